//! Destination resolution: the query side of a run.
//!
//! Takes the built forwarding table, a reader of destination addresses (one
//! per line), and a writer for results. Each resolved address produces one
//! tab-separated output line; an address no block covers is still a result,
//! rendered with the [`NO_MATCH`] marker rather than treated as a failure.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use tracing::warn;

use crate::fib::ForwardingTable;
use crate::rib::parse_address;

/// Rendered next-hop column for an address no block covers.
pub const NO_MATCH: &str = "NoMatch";

/// Counters and timing for one resolution pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveSummary {
    /// Addresses actually looked up
    pub queries: usize,
    /// Lookups that found a covering block
    pub matched: usize,
    /// Lookups rendered as [`NO_MATCH`]
    pub unmatched: usize,
    /// Input lines skipped because they did not decode or their address
    /// did not parse
    pub skipped: usize,
    /// Time spent inside lookups only, file I/O excluded
    pub lookup_time: Duration,
}

impl ResolveSummary {
    /// Mean lookup latency in nanoseconds.
    ///
    /// `None` when nothing was looked up, so callers cannot divide by zero
    /// or mistake an idle run for a fast one.
    #[must_use]
    pub fn avg_lookup_ns(&self) -> Option<u64> {
        if self.queries == 0 {
            return None;
        }
        Some((self.lookup_time.as_nanos() / self.queries as u128) as u64)
    }
}

/// Resolve every address in `input`, writing results to `output`.
///
/// Output lines echo the queried address exactly as it appeared (after
/// trimming the line ends), followed by a tab and the next hop or
/// [`NO_MATCH`]. Blank lines are ignored; lines that fail UTF-8 decoding
/// or address parsing are logged, counted, and produce no output line.
///
/// Only I/O failures abort the pass; they surface as `io::Error` so the
/// caller can report which side broke. An input line that is not valid
/// UTF-8 is skipped, not treated as an I/O failure.
pub fn resolve_addresses<R: BufRead, W: Write>(
    table: &ForwardingTable,
    input: R,
    mut output: W,
) -> io::Result<ResolveSummary> {
    let mut summary = ResolveSummary::default();

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                summary.skipped += 1;
                warn!(error = %err, "Skipping undecodable query line");
                continue;
            }
            Err(err) => return Err(err),
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let addr = match parse_address(text) {
            Ok(addr) => addr,
            Err(err) => {
                summary.skipped += 1;
                warn!(query = text, error = %err, "Skipping query line");
                continue;
            }
        };

        let lookup_start = Instant::now();
        let hop = table.lookup(addr);
        summary.lookup_time += lookup_start.elapsed();
        summary.queries += 1;

        match hop {
            Some(hop) => {
                summary.matched += 1;
                writeln!(output, "{text}\t{hop}")?;
            }
            None => {
                summary.unmatched += 1;
                writeln!(output, "{text}\t{NO_MATCH}")?;
            }
        }
    }

    output.flush()?;
    Ok(summary)
}

//! Route record and address parsing.
//!
//! The route data set is line oriented. A record carries four fields, the
//! first two packed into one block token:
//!
//! ```text
//! 192.168.0.0/16|7018 701 3549|192.168.1.1
//! ```
//!
//! Field separators are `/` between address and bit count and `|` between
//! the remaining fields. The path field contributes only its token count;
//! the next-hop field is opaque text kept verbatim. Anything after a third
//! `|` is ignored.

use std::net::{AddrParseError, Ipv4Addr};
use std::sync::Arc;

use thiserror::Error;

use super::types::{RouteCandidate, RoutePrefix};

/// Reasons one input line is rejected
///
/// Rejection is per record: callers skip the line, count it, and keep
/// going. One bad line must never discard an otherwise valid data set.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The line does not decompose into the required fields.
    #[error("malformed record: {reason}")]
    Malformed { reason: &'static str },

    /// A textual address did not convert to its 32-bit form.
    #[error("bad address {text:?}: {source}")]
    Address {
        text: String,
        #[source]
        source: AddrParseError,
    },
}

impl RecordError {
    fn malformed(reason: &'static str) -> Self {
        RecordError::Malformed { reason }
    }
}

/// Parse a textual IPv4 address, tolerating surrounding whitespace.
///
/// Used for both route prefixes and query lines, so the two paths reject
/// bad addresses identically.
pub fn parse_address(text: &str) -> Result<Ipv4Addr, RecordError> {
    let text = text.trim();
    text.parse().map_err(|source| RecordError::Address {
        text: text.to_string(),
        source,
    })
}

/// Parse one route record into a candidate.
///
/// The prefix address must parse as IPv4 and the bit count must be an
/// integer no greater than 32. An empty path field is a legal zero-length
/// path; an empty next-hop field is not a record.
pub fn parse_route_record(line: &str) -> Result<RouteCandidate, RecordError> {
    let mut fields = line.split('|');
    let block = fields.next().unwrap_or_default();
    let path = fields
        .next()
        .ok_or_else(|| RecordError::malformed("missing path field"))?;
    let next_hop = fields
        .next()
        .ok_or_else(|| RecordError::malformed("missing next-hop field"))?
        .trim();

    let (addr_text, sigbits_text) = block
        .split_once('/')
        .ok_or_else(|| RecordError::malformed("missing '/' between address and bit count"))?;

    let addr = parse_address(addr_text)?;
    let sigbits: u8 = sigbits_text
        .trim()
        .parse()
        .map_err(|_| RecordError::malformed("significant-bit count is not an integer"))?;
    if sigbits > 32 {
        return Err(RecordError::malformed("significant-bit count exceeds 32"));
    }
    if next_hop.is_empty() {
        return Err(RecordError::malformed("empty next-hop field"));
    }

    Ok(RouteCandidate {
        prefix: RoutePrefix::new(addr, sigbits),
        path_len: path.split_whitespace().count(),
        next_hop: Arc::from(next_hop),
    })
}

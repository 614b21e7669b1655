//! Route data set loading.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::parse::parse_route_record;
use super::types::RouteCandidate;

/// Fatal ingestion failures
///
/// Per-record problems never show up here; those lines are skipped and
/// counted in [`LoadStats`]. Failing to read the file at all is the one
/// thing a load cannot recover from.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path did not resolve to a readable file.
    #[error("cannot read route data set {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Ingestion counters reported after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Non-blank lines seen
    pub lines: usize,
    /// Lines parsed into candidates
    pub records: usize,
    /// Lines rejected as malformed, undecodable, or carrying a bad address
    pub skipped: usize,
}

/// Read the route data set, one record per line.
///
/// Blank lines are ignored. A line that fails to parse, or does not decode
/// as UTF-8, is logged with its line number, counted, and skipped; the load
/// carries on. The returned candidates preserve file order, which selection
/// later relies on for tie-breaking.
pub fn load_candidates(path: &Path) -> Result<(Vec<RouteCandidate>, LoadStats), LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    let mut stats = LoadStats::default();

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            // The reader consumes an undecodable line before failing, so
            // skipping it resumes at the next line.
            Err(source) if source.kind() == io::ErrorKind::InvalidData => {
                stats.lines += 1;
                stats.skipped += 1;
                warn!(line = line_no + 1, error = %source, "Skipping undecodable line");
                continue;
            }
            Err(source) => {
                return Err(LoadError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        stats.lines += 1;

        match parse_route_record(&line) {
            Ok(candidate) => {
                candidates.push(candidate);
                stats.records += 1;
            }
            Err(err) => {
                stats.skipped += 1;
                warn!(line = line_no + 1, error = %err, "Skipping route record");
            }
        }
    }

    info!(
        path = %path.display(),
        records = stats.records,
        skipped = stats.skipped,
        "Route data set loaded"
    );

    Ok((candidates, stats))
}

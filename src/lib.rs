//! # fibrouter
//!
//! **fibrouter** resolves IPv4 destination addresses to next hops by
//! longest-prefix match over a static snapshot of routes.
//!
//! ## Overview
//!
//! A run has two halves. The ingestion half parses a textual route data
//! set, skipping lines that do not parse, and reduces competing
//! advertisements for the same address block to the one with the shortest
//! path. The resolution half installs those winners into a stride-2 trie
//! and answers each queried address with the next hop of the longest
//! prefix that covers it.
//!
//! ## Architecture
//!
//! The library is organized into a handful of small modules:
//!
//! - **[`rib`]** - Route data set parsing, per-record error handling, and
//!   best-path selection
//! - **[`fib`]** - The forwarding table: a stride-2 trie resolving
//!   addresses in at most 16 node visits
//! - **[`resolve`]** - The query pass: read addresses, look each one up,
//!   write tab-separated results
//! - **[`cli`]** - Command-line entry point tying the halves together
//! - **[`logging`]** - `tracing` subscriber setup with env-filter support
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::net::Ipv4Addr;
//! use std::path::Path;
//!
//! use fibrouter::{rib, ForwardingTable};
//!
//! # fn main() -> anyhow::Result<()> {
//! let (candidates, stats) = rib::load_candidates(Path::new("routes.txt"))?;
//! println!("parsed {} records, skipped {}", stats.records, stats.skipped);
//!
//! let table = ForwardingTable::new(rib::select_best_routes(candidates));
//! match table.lookup(Ipv4Addr::new(192, 168, 5, 10)) {
//!     Some(hop) => println!("next hop: {hop}"),
//!     None => println!("no covering block"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Notes
//!
//! The trie consumes two address bits per level. A prefix with an odd
//! number of significant bits is written into both children that differ
//! only in the synthesized filler bit, so lookups never special-case odd
//! lengths. The table is immutable once built; updating a snapshot means
//! building a new table.

pub mod cli;
pub mod fib;
pub mod logging;
pub mod resolve;
pub mod rib;

pub use fib::ForwardingTable;
pub use resolve::{resolve_addresses, ResolveSummary, NO_MATCH};
pub use rib::{
    load_candidates, select_best_routes, LoadError, LoadStats, RecordError, RouteCandidate,
    RoutePrefix,
};

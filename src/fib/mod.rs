//! # FIB Module
//!
//! The fib module holds the forwarding information base: the structure that
//! answers "which next hop for this destination address" after the route
//! data set has been parsed and reduced to winners.
//!
//! ## Overview
//!
//! The module is responsible for:
//! - Installing selected routes into a stride-2 trie
//! - Resolving destination addresses by longest-prefix match
//! - Reporting how many routes were installed
//!
//! ## Architecture
//!
//! Resolution is a two-phase affair:
//!
//! 1. **Build**: [`ForwardingTable::new`] consumes the selected routes and
//!    writes each prefix into the trie, two address bits per level. Odd
//!    prefix lengths are padded into both sibling slots so the extra filler
//!    bit never affects matching.
//!
//! 2. **Lookup**: each queried address walks the same branches and keeps the
//!    deepest next hop it passes. The walk is bounded at 16 levels, so cost
//!    is independent of how many routes were installed.
//!
//! ## Example
//!
//! ```rust,ignore
//! use fibrouter::fib::ForwardingTable;
//! use fibrouter::rib;
//!
//! let (candidates, _stats) = rib::load_candidates("routes.txt".as_ref())?;
//! let table = ForwardingTable::new(rib::select_best_routes(candidates));
//!
//! if let Some(hop) = table.lookup("192.168.5.10".parse()?) {
//!     println!("next hop: {hop}");
//! }
//! ```

mod table;
mod trie;

pub use table::ForwardingTable;

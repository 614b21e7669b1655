//! # RIB Module
//!
//! The rib module is the ingestion side of the resolver: it turns the raw
//! route data set into the per-block winners that the forwarding table
//! installs.
//!
//! ## Overview
//!
//! The module is responsible for:
//! - Parsing route records and destination addresses from text
//! - Skipping and counting lines that fail to parse
//! - Reducing competing advertisements to one best path per block
//!
//! ## Architecture
//!
//! Ingestion is a pipeline of three small steps, each testable on its own:
//!
//! 1. **Load**: [`load_candidates`] reads the file line by line, keeping
//!    parse failures from aborting the run.
//! 2. **Group**: [`group_by_block`] collects candidates that advertise the
//!    same (address, bit count) block, wherever they appear in the file.
//! 3. **Reduce**: [`reduce_group`] keeps the candidate with the smallest
//!    path length, first seen winning ties.
//!
//! [`select_best_routes`] wires the last two together.

mod load;
mod parse;
mod select;
mod types;

pub use load::{load_candidates, LoadError, LoadStats};
pub use parse::{parse_address, parse_route_record, RecordError};
pub use select::{group_by_block, reduce_group, select_best_routes};
pub use types::{RouteCandidate, RoutePrefix};

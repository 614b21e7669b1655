//! # CLI Module
//!
//! The CLI module wires the resolver into a command-line run: load the
//! route data set, build the forwarding table, resolve an address file,
//! write the results.
//!
//! ## Usage
//!
//! ```bash
//! fibrouter routes.txt addresses.txt
//! ```
//!
//! Arguments:
//! - `<ROUTE_FILE>` - Route data set, one record per line (required)
//! - `<ADDRESS_FILE>` - Destination addresses, one per line (required)
//! - `--output <FILE>` - Results destination (default: results.txt)
//! - `--log-format <FORMAT>` - pretty or json (default: pretty)
//!
//! ## Output
//!
//! One tab-separated line per resolved address:
//!
//! ```text
//! 192.168.5.10	192.168.1.2
//! 10.1.1.1	NoMatch
//! ```
//!
//! ## Examples
//!
//! ```bash
//! # Resolve with results in the default results.txt
//! fibrouter routes.txt addresses.txt
//!
//! # Machine-readable logs, custom results location
//! fibrouter routes.txt addresses.txt --output hops.tsv --log-format json
//! ```

mod commands;


pub use commands::{run_cli, Cli};

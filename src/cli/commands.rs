use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::fib::ForwardingTable;
use crate::logging::{self, LogFormat};
use crate::resolve::resolve_addresses;
use crate::rib;

/// Command-line interface for fibrouter
///
/// One run builds a forwarding table from a route data set, resolves a
/// file of destination addresses against it, and writes the results.
#[derive(Parser)]
#[command(name = "fibrouter")]
#[command(about = "Longest-prefix-match route resolver", long_about = None)]
pub struct Cli {
    /// Route data set: one `address/sigbits|path|next-hop` record per line
    pub route_file: PathBuf,

    /// Destination addresses to resolve, one per line
    pub address_file: PathBuf,

    /// File the resolved next hops are written to
    #[arg(short, long, default_value = "results.txt")]
    pub output: PathBuf,

    /// Log output format: pretty or json
    #[arg(long, default_value = "pretty")]
    pub log_format: String,
}

/// Parse arguments, set up logging, and execute the run
///
/// # Errors
///
/// Returns an error if:
/// - The route data set or address file cannot be read
/// - The results file cannot be written
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(LogFormat::parse(&cli.log_format))?;
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let (candidates, load_stats) = rib::load_candidates(&cli.route_file)?;
    let routes = rib::select_best_routes(candidates);
    let table = ForwardingTable::new(routes);

    let input = File::open(&cli.address_file)
        .with_context(|| format!("cannot read {}", cli.address_file.display()))?;
    let output = File::create(&cli.output)
        .with_context(|| format!("cannot write {}", cli.output.display()))?;

    let summary = resolve_addresses(&table, BufReader::new(input), BufWriter::new(output))
        .with_context(|| {
            format!(
                "resolving {} into {}",
                cli.address_file.display(),
                cli.output.display()
            )
        })?;

    info!(
        routes = table.route_count(),
        route_lines_skipped = load_stats.skipped,
        queries = summary.queries,
        matched = summary.matched,
        unmatched = summary.unmatched,
        query_lines_skipped = summary.skipped,
        avg_lookup_ns = summary.avg_lookup_ns(),
        output = %cli.output.display(),
        "Resolution complete"
    );

    Ok(())
}

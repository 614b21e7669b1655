use fibrouter::cli;

fn main() -> anyhow::Result<()> {
    cli::run_cli()
}

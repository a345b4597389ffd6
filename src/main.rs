//! CLI entry point for cliff route placement

use clap::Parser;
use cliffpath::io::cli::{Cli, CliffRunner};
use cliffpath::io::logging::init_logging;

fn main() -> cliffpath::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;
    let mut runner = CliffRunner::new(cli);
    runner.process()?;
    Ok(())
}

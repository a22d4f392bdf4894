//! CLI entry point for headless platformer level runs

use clap::Parser;
use ledgewalk::io::cli::{Cli, LevelProcessor};
use ledgewalk::io::logging::{init_logging, level_filter};

fn main() -> ledgewalk::Result<()> {
    let cli = Cli::parse();
    init_logging(level_filter(cli.quiet, cli.verbose));
    let mut processor = LevelProcessor::new(cli);
    processor.process()?;
    Ok(())
}

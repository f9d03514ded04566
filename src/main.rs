//! CLI entry point for the polyomino region packing verifier

use clap::Parser;
use polypack::io::cli::{Cli, FileProcessor};
use polypack::io::configuration::DEFAULT_LOG_FILTER;

fn main() -> polypack::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}

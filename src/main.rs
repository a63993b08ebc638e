//! CLI entry point for conditioning-map preprocessing

use clap::Parser;
use condprep::io::cli::{Cli, FileProcessor};

fn main() -> condprep::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}

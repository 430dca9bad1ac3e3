//! Parlance - Language detection CLI
//!
//! Detects which of 25 languages a text is written in, entirely offline
//! from compiled-in trigram profiles and Unicode script ranges.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; RUST_LOG wins over --log-level when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(args)
}

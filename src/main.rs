use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stdio_input::*;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Cli::parse().run()
}

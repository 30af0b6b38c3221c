//! `orbit` command line tool.

#![deny(unused_must_use, rust_2018_idioms)]

mod cli;

use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing();
    cli::Cli::parse().run().await
}

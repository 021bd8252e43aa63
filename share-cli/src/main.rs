//! `framefinder-share`: render a shareable face-shape result image.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use framefinder_share_lib::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let config = framefinder_share_lib::init_foundation();
    cli::run(args, &config).await
}

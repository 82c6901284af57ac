use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ruledeck_console::{cmd, Opts};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so they never corrupt --json output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    cmd::run(opts).await
}

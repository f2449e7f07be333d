//! Entry point wiring CLI dispatch to the runner modules.

use anyhow::Result;
use arp_runner::{cli::Cli, config::Settings, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error!("runner failed: {err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, "starting Academic Research Platform runner");
    cli.dispatch(settings).await
}

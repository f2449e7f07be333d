//! Web UI terminal action.

use anyhow::Result;
use tokio::process::Command;
use tracing::{info, instrument, warn};

use crate::{
    config::Settings,
    exec::{self, Outcome},
};

/// Launch the platform web UI and block until it exits or is interrupted.
#[instrument(skip(settings))]
pub async fn run(settings: &Settings) -> Result<()> {
    info!("starting the Academic Research Platform");
    info!("open http://localhost:{}", settings.web_port);
    let mut cmd = Command::new(&settings.python_bin);
    cmd.args(["-m", "streamlit", "run"])
        .arg(&settings.app_entry)
        .arg(format!("--server.port={}", settings.web_port))
        .args(["--server.address=localhost", "--server.headless=false"])
        .current_dir(&settings.project_root);
    match exec::run_foreground(cmd, "web UI").await? {
        Outcome::Completed(status) if !status.success() => {
            warn!(%status, "web UI exited with failure status");
        }
        Outcome::Completed(_) => info!("web UI exited"),
        Outcome::Interrupted => info!("shutting down"),
    }
    Ok(())
}

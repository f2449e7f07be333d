//! Notebook-server terminal action.

use anyhow::Result;
use tokio::process::Command;
use tracing::{info, instrument, warn};

use crate::{
    config::Settings,
    exec::{self, Outcome},
};

/// Launch Jupyter Lab and block until it exits or is interrupted.
#[instrument(skip(settings))]
pub async fn run(settings: &Settings) -> Result<()> {
    info!("starting Jupyter Lab");
    info!("open http://localhost:{}", settings.notebook_port);
    let mut cmd = Command::new(&settings.python_bin);
    cmd.args(["-m", "jupyter", "lab", "--ip=0.0.0.0"])
        .arg(format!("--port={}", settings.notebook_port))
        .args(["--no-browser", "--allow-root"])
        .current_dir(&settings.project_root);
    match exec::run_foreground(cmd, "jupyter lab").await? {
        Outcome::Completed(status) if !status.success() => {
            warn!(%status, "jupyter lab exited with failure status");
        }
        Outcome::Completed(_) => info!("jupyter lab exited"),
        Outcome::Interrupted => info!("shutting down jupyter"),
    }
    Ok(())
}

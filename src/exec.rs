//! Subprocess plumbing shared by setup steps and terminal actions.

use std::process::ExitStatus;
use std::time::Duration;

use anyhow::Result;
use tokio::{process::Command, signal, time};
use tracing::{info, warn};

use crate::error::RunnerError;

/// How long an interrupted foreground child gets to exit on its own.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Result of a foreground child that may be interrupted by the user.
#[derive(Debug)]
pub enum Outcome {
    /// The child ran to completion with the given status.
    Completed(ExitStatus),
    /// The user interrupted; the child has been shut down.
    Interrupted,
}

/// Run a command to completion and hand back its exit status.
pub async fn run_to_completion(mut cmd: Command, name: &'static str) -> Result<ExitStatus> {
    let status = cmd
        .status()
        .await
        .map_err(|source| RunnerError::Launch { name, source })?;
    Ok(status)
}

/// Run a blocking foreground command, turning Ctrl-C into a clean shutdown.
///
/// The terminal delivers the interrupt to the whole foreground process
/// group, so the child is already shutting down when the signal is observed
/// here; it gets a bounded grace period before being killed outright.
pub async fn run_foreground(mut cmd: Command, name: &'static str) -> Result<Outcome> {
    let mut child = cmd
        .spawn()
        .map_err(|source| RunnerError::Launch { name, source })?;

    tokio::select! {
        status = child.wait() => Ok(Outcome::Completed(status?)),
        _ = signal::ctrl_c() => {
            info!(%name, "interrupt received, shutting down");
            if time::timeout(SHUTDOWN_GRACE, child.wait()).await.is_err() {
                warn!(%name, "child still running after interrupt, killing it");
                child.kill().await?;
            }
            Ok(Outcome::Interrupted)
        }
    }
}

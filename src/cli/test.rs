//! Platform test-suite runner.

use anyhow::Result;
use tokio::process::Command;
use tracing::{info, instrument};

use crate::{config::Settings, error::RunnerError, exec};

/// Run the platform's pytest suite; a failing suite is fatal.
#[instrument(skip(settings))]
pub async fn run(settings: &Settings) -> Result<()> {
    info!(tests = %settings.tests_path, "running platform test suite");
    let mut cmd = Command::new(&settings.python_bin);
    cmd.args(["-m", "pytest"])
        .arg(&settings.tests_path)
        .arg("-v")
        .current_dir(&settings.project_root);
    let status = exec::run_to_completion(cmd, "pytest").await?;
    if !status.success() {
        return Err(RunnerError::TestsFailed { status }.into());
    }
    info!("all tests passed");
    Ok(())
}

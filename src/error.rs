//! Failure taxonomy for the runner.

use std::process::ExitStatus;

use thiserror::Error;

/// Failures that terminate the runner with a non-zero exit status.
///
/// Non-fatal conditions (a failed corpus download) and graceful interrupts
/// never surface through this type; they are handled where they occur.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("dependency install exited with {status}")]
    InstallFailed { status: ExitStatus },

    #[error("test suite exited with {status}")]
    TestsFailed { status: ExitStatus },

    #[error("failed to launch {name}: {source}")]
    Launch {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
}

//! Environment-file scaffolding step.

use anyhow::Result;
use tracing::{debug, info};

use crate::{config::Settings, scaffold};

/// Create the environment file if this checkout does not have one yet.
pub fn run(settings: &Settings) -> Result<()> {
    let path = settings.env_file_path();
    if scaffold::ensure_env_file(&path)? {
        info!(path = %path.display(), "environment file created");
    } else {
        debug!(path = %path.display(), "environment file already present");
    }
    Ok(())
}

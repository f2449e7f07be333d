//! Dependency install and NLP corpus download.

use anyhow::Result;
use tokio::process::Command;
use tracing::{info, instrument, warn};

use crate::{config::Settings, error::RunnerError, exec};

/// Corpora the platform's optional NLP features expect at runtime.
const CORPORA: &[&str] = &["punkt", "stopwords", "averaged_perceptron_tagger"];

/// Install dependencies, then attempt the corpus download.
///
/// Install failure is fatal; a failed corpus download is only a warning.
#[instrument(skip(settings))]
pub async fn run(settings: &Settings) -> Result<()> {
    install_dependencies(settings).await?;
    if let Err(err) = download_corpora(settings).await {
        warn!("failed to download NLP corpora, continuing: {err:#}");
    }
    Ok(())
}

/// Blocking `pip install` against the platform requirements manifest.
async fn install_dependencies(settings: &Settings) -> Result<()> {
    info!(requirements = %settings.requirements_file, "installing dependencies");
    let mut cmd = Command::new(&settings.python_bin);
    cmd.args(["-m", "pip", "install", "-r"])
        .arg(&settings.requirements_file)
        .current_dir(&settings.project_root);
    let status = exec::run_to_completion(cmd, "pip install").await?;
    if !status.success() {
        return Err(RunnerError::InstallFailed { status }.into());
    }
    info!("dependencies installed");
    Ok(())
}

/// Download corpora through the platform interpreter so they land in its
/// environment, not ours.
async fn download_corpora(settings: &Settings) -> Result<()> {
    info!(corpora = ?CORPORA, "downloading NLP corpora");
    let mut cmd = Command::new(&settings.python_bin);
    cmd.args(["-m", "nltk.downloader"])
        .args(CORPORA)
        .current_dir(&settings.project_root);
    let status = exec::run_to_completion(cmd, "nltk downloader").await?;
    if !status.success() {
        anyhow::bail!("nltk downloader exited with {status}");
    }
    info!("NLP corpora downloaded");
    Ok(())
}

//! Idempotent scaffolding of the platform environment file.

use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::{Context, Result};

/// Template written on first setup. Keys stay commented until the user
/// fills them in; the platform reads this file at its own startup.
pub const ENV_TEMPLATE: &str = "\
# Academic Research Platform environment variables
# Add your API keys here (optional)

# WOLFRAM_APP_ID=your_wolfram_alpha_app_id
# CROSSREF_EMAIL=your_email@domain.com
# PERPLEXITY_API_KEY=your_perplexity_api_key
";

/// Create the environment file if absent. Returns whether a file was written.
///
/// An existing file is never truncated, even one that appears between the
/// existence check and the create.
pub fn ensure_env_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => {
            return Err(err).with_context(|| format!("create env file {}", path.display()))
        }
    };
    file.write_all(ENV_TEMPLATE.as_bytes())
        .with_context(|| format!("write env file {}", path.display()))?;
    Ok(true)
}

//! Runtime configuration for the runner.

use std::{env, path::PathBuf};

use serde::Deserialize;

/// Runner configuration resolved from `.env` and defaults.
///
/// Everything is overridable through the environment so the runner can
/// drive a checkout living anywhere, with any interpreter.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Interpreter used for every platform subprocess.
    pub python_bin: String,
    /// Platform checkout; working directory for every subprocess.
    pub project_root: PathBuf,
    /// Requirements manifest handed to pip.
    pub requirements_file: String,
    /// Platform entry point handed to the web UI server.
    pub app_entry: String,
    /// Directory passed to the test runner.
    pub tests_path: String,
    /// Name of the scaffolded environment file, relative to the project root.
    pub env_file: String,
    /// Port the web UI binds on localhost.
    pub web_port: u16,
    /// Port the notebook server binds on all interfaces.
    pub notebook_port: u16,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let python_bin = env::var("PYTHON_BIN").unwrap_or_else(|_| "python3".to_string());
        let project_root = env::var("PROJECT_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let requirements_file = env::var("REQUIREMENTS_FILE")
            .unwrap_or_else(|_| "github_requirements.txt".to_string());
        let app_entry = env::var("APP_ENTRY").unwrap_or_else(|_| "app.py".to_string());
        let tests_path = env::var("TESTS_PATH").unwrap_or_else(|_| "tests".to_string());
        let env_file = env::var("ENV_FILE").unwrap_or_else(|_| ".env".to_string());
        let web_port = env::var("WEB_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8501);
        let notebook_port = env::var("NOTEBOOK_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8888);

        Ok(Self {
            python_bin,
            project_root,
            requirements_file,
            app_entry,
            tests_path,
            env_file,
            web_port,
            notebook_port,
        })
    }

    /// Location of the scaffolded environment file.
    pub fn env_file_path(&self) -> PathBuf {
        self.project_root.join(&self.env_file)
    }
}

//! Command-line interface and launch-plan derivation.

use anyhow::Result;
use clap::Parser;

use crate::config::Settings;

pub mod install;
pub mod jupyter;
pub mod setup;
pub mod test;
pub mod web;

/// Top-level CLI definition: five composable switches.
#[derive(Debug, Parser)]
#[command(author, version, about = "Academic Research Platform dev runner", long_about = None)]
pub struct Cli {
    /// Install platform dependencies and NLP corpora.
    #[arg(long)]
    pub install: bool,
    /// Scaffold the environment file.
    #[arg(long)]
    pub setup: bool,
    /// Launch Jupyter Lab instead of the web UI.
    #[arg(long)]
    pub jupyter: bool,
    /// Run the platform test suite.
    #[arg(long)]
    pub test: bool,
    /// Install, set up, then launch the web UI.
    #[arg(long)]
    pub all: bool,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Derive the launch plan once, then execute it in order.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        let plan = LaunchPlan::derive(&self);
        if plan.install_deps {
            install::run(&settings).await?;
        }
        if plan.scaffold_env {
            setup::run(&settings)?;
        }
        match plan.action {
            TerminalAction::Test => test::run(&settings).await,
            TerminalAction::Jupyter => jupyter::run(&settings).await,
            TerminalAction::WebUi => web::run(&settings).await,
            TerminalAction::None => Ok(()),
        }
    }

    fn any_flag(&self) -> bool {
        self.install || self.setup || self.jupyter || self.test || self.all
    }
}

/// What a single invocation will do, fixed before any step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Run dependency install and corpus download first.
    pub install_deps: bool,
    /// Scaffold the environment file after any install.
    pub scaffold_env: bool,
    /// The single blocking action that ends the invocation.
    pub action: TerminalAction,
}

/// At most one terminal action runs per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAction {
    /// Run the platform test suite and return.
    Test,
    /// Block on the notebook server.
    Jupyter,
    /// Block on the platform web UI.
    WebUi,
    /// Exit after the requested setup steps.
    None,
}

impl LaunchPlan {
    /// Priority chain: test beats jupyter beats the web UI default.
    ///
    /// A bare invocation (no flag at all) selects the web UI; the check is
    /// on the parsed flag values, not the raw argument count.
    pub fn derive(cli: &Cli) -> Self {
        let action = if cli.test {
            TerminalAction::Test
        } else if cli.jupyter {
            TerminalAction::Jupyter
        } else if cli.all || !cli.any_flag() {
            TerminalAction::WebUi
        } else {
            TerminalAction::None
        };
        Self {
            install_deps: cli.install || cli.all,
            scaffold_env: cli.setup || cli.all,
            action,
        }
    }
}

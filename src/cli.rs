//! CLI argument parsing and dispatch

use anyhow::{Context, Result};
use clap::Parser;

use repo_bridge::defaults::{DEFAULT_HOST, DEFAULT_ORG};
use repo_bridge::output::OutputConfig;
use repo_bridge::prompt::DialoguerPrompter;
use repo_bridge::provision::Provisioner;
use repo_bridge::repository::{GhPlatform, GitSourceControl};

/// repo-bridge - Create or pick an organization repository and merge it into
/// the current directory
#[derive(Parser, Debug)]
#[command(name = "repo-bridge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Organization that owns the repositories
    #[arg(long, value_name = "ORG", env = "REPO_BRIDGE_ORG", default_value = DEFAULT_ORG)]
    org: String,

    /// Git host used for SSH clone URLs
    #[arg(long, value_name = "HOST", env = "REPO_BRIDGE_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Run the interactive provisioning flow in the current directory
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color);
        let workdir = std::env::current_dir().context("Failed to determine current directory")?;

        let platform = GhPlatform::new(self.org);
        let git = GitSourceControl;
        let prompter = DialoguerPrompter::new(&output);

        Provisioner::new(&platform, &git, &prompter, &output, self.host).run(&workdir)?;
        Ok(())
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

// mod.rs — Subcommand implementations and shared config resolution.

pub mod config;
pub mod init;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use dt_submit::{DeployConfig, Overrides};

/// Flags that override the config file. Each also reads an environment variable.
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Path or name of the git executable.
    #[arg(long = "git", env = "DEPLOY_GIT", global = true)]
    pub git: Option<PathBuf>,

    /// Remote to push to.
    #[arg(long, env = "DEPLOY_REMOTE", global = true)]
    pub remote: Option<String>,

    /// Branch to push.
    #[arg(long, env = "DEPLOY_BRANCH", global = true)]
    pub branch: Option<String>,

    /// Commit message.
    #[arg(long, short = 'm', env = "DEPLOY_COMMIT_MESSAGE", global = true)]
    pub message: Option<String>,

    /// Unstage changes if the commit step fails.
    #[arg(long, global = true)]
    pub rollback_on_failure: bool,

    /// Show the steps without staging, committing or pushing (deployment run only).
    #[arg(long)]
    pub dry_run: bool,
}

impl DeployArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            executable: self.git.clone(),
            remote: self.remote.clone(),
            branch: self.branch.clone(),
            message: self.message.clone(),
            rollback_on_failure: self.rollback_on_failure,
        }
    }
}

/// Defaults, then the config file, then env/flags.
pub fn resolve_config(
    repo: &Path,
    config_path: Option<&Path>,
    args: &DeployArgs,
) -> anyhow::Result<DeployConfig> {
    let config = DeployConfig::load_for_repo(repo, config_path)
        .with_context(|| format!("failed to load configuration for {}", repo.display()))?
        .with_overrides(args.overrides())?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

// run.rs — The default command: status check, then add/commit/push.

use std::path::Path;

use anyhow::Context;
use dt_submit::{locate_git, CommandRunner, DeployTrigger, DryRunner, GitCli};

use super::{resolve_config, DeployArgs};

pub fn execute(repo: &Path, config_path: Option<&Path>, args: &DeployArgs) -> anyhow::Result<()> {
    let config = resolve_config(repo, config_path, args)?;
    let git = locate_git(config.git.executable.as_deref())?;

    let cli = GitCli::new(git, repo);
    let dry = DryRunner::new(&cli);
    let runner: &dyn CommandRunner = if args.dry_run { &dry } else { &cli };

    let outcome = DeployTrigger::new(runner, &config)
        .deploy(&mut std::io::stdout().lock())
        .with_context(|| format!("deployment from {} stopped", repo.display()))?;
    tracing::info!("deployment finished: {outcome}");
    Ok(())
}

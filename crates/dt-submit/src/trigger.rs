//! The status-guarded add/commit/push procedure.

use std::fmt;
use std::io::Write;

use crate::config::DeployConfig;
use crate::error::{Result, SubmitError};
use crate::runner::{display_invocation, CommandRunner};

/// How a deployment run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// The working tree was clean; nothing was staged, committed or pushed.
    NoChanges,
    /// All three steps succeeded (or would have, for a dry run).
    Pushed { remote: String, branch: String },
}

impl fmt::Display for DeployOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoChanges => write!(f, "no changes"),
            Self::Pushed { remote, branch } => write!(f, "pushed to {remote}/{branch}"),
        }
    }
}

/// Runs the deployment procedure against a [`CommandRunner`].
///
/// Steps run strictly in order and the first nonzero exit stops the run.
/// Already-applied steps are left in place unless
/// [`DeployConfig::rollback_on_failure`] is set, in which case a failed
/// commit unstages what `add` staged.
pub struct DeployTrigger<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    config: &'a DeployConfig,
}

impl<'a, R: CommandRunner + ?Sized> DeployTrigger<'a, R> {
    pub fn new(runner: &'a R, config: &'a DeployConfig) -> Self {
        Self { runner, config }
    }

    /// `true` when `git status --porcelain` printed anything.
    pub fn check_status(&self) -> Result<bool> {
        let status = self.runner.capture(&["status", "--porcelain"])?;
        tracing::debug!("porcelain status: {} byte(s)", status.len());
        Ok(!status.is_empty())
    }

    /// Run one git step, failing on a nonzero exit.
    pub fn run_command(&self, out: &mut impl Write, args: &[&str]) -> Result<()> {
        let verb = if self.runner.is_dry_run() {
            "Would run"
        } else {
            "Running"
        };
        writeln!(out, "{verb}: {}", display_invocation(args))?;
        out.flush()?;

        tracing::info!("git step started: {}", args.join(" "));
        let code = self.runner.run(args)?;
        if code != 0 {
            tracing::info!("git step failed: {} (exit code {code})", args.join(" "));
            return Err(SubmitError::command_failed(args, code));
        }
        Ok(())
    }

    /// Check for changes, then add, commit and push.
    pub fn deploy(&self, out: &mut impl Write) -> Result<DeployOutcome> {
        writeln!(out, "=== Deployment Trigger ===")?;

        if !self.check_status()? {
            writeln!(out, "No changes to deploy.")?;
            return Ok(DeployOutcome::NoChanges);
        }

        let git = &self.config.git;
        self.run_command(out, &["add", "."])?;

        if let Err(e) = self.run_command(out, &["commit", "-m", self.config.commit.message.as_str()]) {
            if self.config.rollback_on_failure {
                self.unstage(out);
            }
            return Err(e);
        }

        self.run_command(out, &["push", git.remote.as_str(), git.branch.as_str()])?;

        writeln!(out)?;
        if self.runner.is_dry_run() {
            writeln!(out, "[DRY RUN] Would push to {}/{}", git.remote, git.branch)?;
        } else {
            writeln!(out, "[OK] Pushed to {}/{}", git.remote, git.branch)?;
        }

        Ok(DeployOutcome::Pushed {
            remote: git.remote.clone(),
            branch: git.branch.clone(),
        })
    }

    // Best effort: the commit error is what the caller sees either way.
    fn unstage(&self, out: &mut impl Write) {
        if let Err(e) = self.run_command(out, &["reset", "--quiet"]) {
            tracing::warn!("rollback failed, changes remain staged: {e}");
        }
    }
}

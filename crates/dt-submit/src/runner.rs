//! Command runner seam over the git executable.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Result, SubmitError};

/// Runs git subcommands on behalf of the deployment procedure.
///
/// The real implementation shells out; tests substitute a scripted runner.
pub trait CommandRunner {
    /// Run `git <args>` with stdout captured and decoded as UTF-8 (lossy).
    ///
    /// A nonzero exit is an error.
    fn capture(&self, args: &[&str]) -> Result<String>;

    /// Run `git <args>` with output streamed to the console.
    ///
    /// Returns the exit code; a process killed by a signal reports `-1`.
    fn run(&self, args: &[&str]) -> Result<i32>;

    /// Whether `run` actually mutates the repository.
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// `git <args>` as shown in progress lines and errors.
pub fn display_invocation(args: &[&str]) -> String {
    format!("git {}", args.join(" "))
}

/// Runner that invokes a git executable inside a working directory.
pub struct GitCli {
    executable: PathBuf,
    work_dir: PathBuf,
}

impl GitCli {
    pub fn new(executable: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            work_dir: work_dir.into(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.args(args).current_dir(&self.work_dir);
        cmd
    }
}

impl CommandRunner for GitCli {
    fn capture(&self, args: &[&str]) -> Result<String> {
        let output = self.command(args).stderr(Stdio::inherit()).output()?;
        if !output.status.success() {
            return Err(SubmitError::command_failed(
                args,
                output.status.code().unwrap_or(-1),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn run(&self, args: &[&str]) -> Result<i32> {
        let status = self.command(args).status()?;
        Ok(status.code().unwrap_or(-1))
    }
}

/// Wraps a runner so that read-only captures still happen but nothing
/// mutating is executed.
pub struct DryRunner<'a, R: CommandRunner + ?Sized> {
    inner: &'a R,
}

impl<'a, R: CommandRunner + ?Sized> DryRunner<'a, R> {
    pub fn new(inner: &'a R) -> Self {
        Self { inner }
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for DryRunner<'_, R> {
    fn capture(&self, args: &[&str]) -> Result<String> {
        self.inner.capture(args)
    }

    fn run(&self, args: &[&str]) -> Result<i32> {
        tracing::debug!("dry run: skipping {}", display_invocation(args));
        Ok(0)
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedRunner;
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn display_invocation_prefixes_git() {
        assert_eq!(display_invocation(&["push", "origin", "main"]), "git push origin main");
    }

    #[test]
    fn dry_runner_captures_but_never_runs() {
        let inner = ScriptedRunner::with_status(" M app.js\n").failing("add", 1);
        let dry = DryRunner::new(&inner);

        assert_eq!(dry.capture(&["status", "--porcelain"]).unwrap(), " M app.js\n");
        assert_eq!(dry.run(&["add", "."]).unwrap(), 0);
        assert!(dry.is_dry_run());
        assert_eq!(inner.calls(), vec!["status --porcelain"]);
    }

    #[test]
    fn git_cli_reports_missing_executable_as_io_error() {
        let dir = tempdir().unwrap();
        let git = GitCli::new(dir.path().join("no-such-git"), dir.path());
        assert!(matches!(
            git.capture(&["status", "--porcelain"]),
            Err(SubmitError::Io(_))
        ));
    }

    #[test]
    fn git_cli_captures_porcelain_status() {
        let dir = tempdir().unwrap();
        let Ok(exe) = which::which("git") else {
            return;
        };
        Command::new(&exe)
            .args(["init"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        let git = GitCli::new(&exe, dir.path());
        assert_eq!(git.capture(&["status", "--porcelain"]).unwrap(), "");

        std::fs::write(dir.path().join("app.js"), "console.log(1);\n").unwrap();
        assert_eq!(git.capture(&["status", "--porcelain"]).unwrap(), "?? app.js\n");
    }

    #[test]
    fn git_cli_returns_nonzero_exit_code() {
        let dir = tempdir().unwrap();
        let Ok(exe) = which::which("git") else {
            return;
        };
        // Only meaningful when the temp dir is outside every work tree.
        let inside_repo = Command::new(&exe)
            .args(["rev-parse", "--git-dir"])
            .current_dir(dir.path())
            .output()
            .map(|o| o.status.success())
            .unwrap_or(true);
        if inside_repo {
            return;
        }

        let git = GitCli::new(&exe, dir.path());
        assert_ne!(git.run(&["rev-parse", "--git-dir"]).unwrap(), 0);
        assert!(matches!(
            git.capture(&["status", "--porcelain"]),
            Err(SubmitError::CommandFailed { .. })
        ));
    }
}

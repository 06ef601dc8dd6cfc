//! Git executable discovery.

use std::path::{Path, PathBuf};

use crate::error::{Result, SubmitError};

/// Resolve the git executable to invoke.
///
/// A configured path must point at a file and is returned absolute; a
/// configured bare name (no directory part) is looked up on `PATH`. With nothing configured, `git`
/// is looked up on `PATH`.
pub fn locate_git(configured: Option<&Path>) -> Result<PathBuf> {
    let resolved = match configured {
        Some(path) if is_bare_name(path) => lookup(path.as_os_str())?,
        Some(path) => {
            if !path.is_file() {
                return Err(SubmitError::ToolNotFound(format!(
                    "{} is not a file",
                    path.display()
                )));
            }
            // The run happens inside the repository, so a relative path has
            // to be pinned to the file checked here.
            path.canonicalize()?
        }
        None => lookup("git".as_ref())?,
    };
    tracing::debug!("using git executable {}", resolved.display());
    Ok(resolved)
}

fn is_bare_name(path: &Path) -> bool {
    path.parent().map_or(true, |p| p.as_os_str().is_empty())
}

fn lookup(name: &std::ffi::OsStr) -> Result<PathBuf> {
    which::which(name).map_err(|e| {
        SubmitError::ToolNotFound(format!("{} not found on PATH: {e}", Path::new(name).display()))
    })
}

//! Deployment configuration structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SubmitError};

/// Location of the project config file, relative to the repository root.
pub const CONFIG_FILE: &str = ".deploy/deploy.toml";

/// Top-level configuration from .deploy/deploy.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Unstage changes when the commit step fails
    #[serde(default)]
    pub rollback_on_failure: bool,

    /// Git executable and push target
    #[serde(default)]
    pub git: GitConfig,

    /// Commit settings
    #[serde(default)]
    pub commit: CommitConfig,
}

/// Git executable and push target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Path or bare name of the git executable. Discovered on PATH when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<PathBuf>,

    /// Git remote name
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch pushed to the remote
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            executable: None,
            remote: default_remote(),
            branch: default_branch(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitConfig {
    /// Commit message used for every deployment
    #[serde(default = "default_message")]
    pub message: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
        }
    }
}

// Serde default functions
fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "custom-1.7.10-AG".to_string()
}

fn default_message() -> String {
    "Clean up redundant loader in app.js".to_string()
}

/// Values supplied on the command line or through the environment.
///
/// Every `Some` replaces the corresponding file/default value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub executable: Option<PathBuf>,
    pub remote: Option<String>,
    pub branch: Option<String>,
    pub message: Option<String>,
    pub rollback_on_failure: bool,
}

impl DeployConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the file layer for a repository.
    ///
    /// An explicit path must exist. The default `.deploy/deploy.toml` is
    /// optional and falls back to built-in defaults when absent.
    pub fn load_for_repo(repo: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(SubmitError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                Self::load(path)
            }
            None => {
                let path = repo.join(CONFIG_FILE);
                if path.is_file() {
                    tracing::debug!("loading config from {}", path.display());
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply flag/env overrides on top of this config and validate the result.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(exe) = overrides.executable {
            self.git.executable = Some(exe);
        }
        if let Some(remote) = overrides.remote {
            self.git.remote = remote;
        }
        if let Some(branch) = overrides.branch {
            self.git.branch = branch;
        }
        if let Some(message) = overrides.message {
            self.commit.message = message;
        }
        self.rollback_on_failure |= overrides.rollback_on_failure;
        self.validate()?;
        Ok(self)
    }

    /// Reject empty push targets and messages.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("git.remote", &self.git.remote),
            ("git.branch", &self.git.branch),
            ("commit.message", &self.commit.message),
        ] {
            if value.trim().is_empty() {
                return Err(SubmitError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SubmitError::Config(e.to_string()))
    }

    /// Write the default config to `<repo>/.deploy/deploy.toml`.
    ///
    /// Returns the written path. Refuses to overwrite unless `force` is set.
    pub fn write_default(repo: &Path, force: bool) -> Result<PathBuf> {
        let path = repo.join(CONFIG_FILE);
        if path.exists() && !force {
            return Err(SubmitError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Self::default().to_toml()?)?;
        Ok(path)
    }
}

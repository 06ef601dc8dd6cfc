// error.rs — Error types for the deployment procedure.

use thiserror::Error;

/// Errors that can occur while resolving configuration or running git.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A git invocation exited with a nonzero status.
    #[error("git {} failed (exit code: {code})", .args.join(" "))]
    CommandFailed { args: Vec<String>, code: i32 },

    /// The git executable could not be located.
    #[error("git executable not found: {0}")]
    ToolNotFound(String),

    /// A configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    // Wrapped errors are reached through `source()`, not repeated in Display.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("invalid config file")]
    Toml(#[from] toml::de::Error),
}

impl SubmitError {
    /// Builds a `CommandFailed` from borrowed args.
    pub fn command_failed(args: &[&str], code: i32) -> Self {
        Self::CommandFailed {
            args: args.iter().map(|a| a.to_string()).collect(),
            code,
        }
    }

    /// The git subcommand a `CommandFailed` refers to, e.g. `"add"`.
    pub fn failed_subcommand(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { args, .. } => args.first().map(String::as_str),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;

//! # dt-submit
//!
//! The add/commit/push procedure behind `deploy-trigger`.
//!
//! A [`DeployTrigger`] checks `git status --porcelain` and, when the working
//! tree has changes, stages everything, commits with the configured message
//! and pushes the configured branch. The first failing step stops the run.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use dt_submit::{locate_git, DeployConfig, DeployTrigger, GitCli};
//!
//! let config = DeployConfig::default();
//! let git = locate_git(config.git.executable.as_deref()).unwrap();
//! let runner = GitCli::new(git, ".");
//! let outcome = DeployTrigger::new(&runner, &config)
//!     .deploy(&mut std::io::stdout())
//!     .unwrap();
//! println!("{outcome}");
//! ```

pub mod config;
pub mod error;
pub mod locate;
pub mod runner;
pub mod trigger;

pub use config::{CommitConfig, DeployConfig, GitConfig, Overrides};
pub use error::{Result, SubmitError};
pub use locate::locate_git;
pub use runner::{display_invocation, CommandRunner, DryRunner, GitCli};
pub use trigger::{DeployOutcome, DeployTrigger};

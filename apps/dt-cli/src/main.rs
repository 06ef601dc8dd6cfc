//! # dt-cli
//!
//! Command-line interface for Deployment Trigger.
//!
//! - `deploy-trigger` — stage, commit and push when the working tree has changes
//! - `deploy-trigger config` — print the resolved configuration
//! - `deploy-trigger init` — write `.deploy/deploy.toml` with the defaults

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::DeployArgs;

/// Commit and push local changes to a fixed remote branch.
#[derive(Parser)]
#[command(name = "deploy-trigger", version, about)]
struct Cli {
    /// Repository to deploy from (defaults to current directory).
    #[arg(long, default_value = ".", global = true)]
    repo: PathBuf,

    /// Config file (defaults to <repo>/.deploy/deploy.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log procedure details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    deploy: DeployArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration as TOML.
    Config,
    /// Write the default configuration to .deploy/deploy.toml.
    Init {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.deploy.dry_run && cli.command.is_some() {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--dry-run only applies to a deployment run, not to a subcommand",
            )
            .exit();
    }

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    let repo = cli.repo.canonicalize().unwrap_or(cli.repo);
    let result = match &cli.command {
        None => commands::run::execute(&repo, cli.config.as_deref(), &cli.deploy),
        Some(Commands::Config) => {
            commands::config::execute(&repo, cli.config.as_deref(), &cli.deploy)
        }
        Some(Commands::Init { force }) => commands::init::execute(&repo, *force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    // RUST_LOG replaces the default filter; --verbose raises our crates on top of either.
    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dt_submit=warn,deploy_trigger=warn"));
    if verbose {
        filter = filter
            .add_directive("dt_submit=debug".parse()?)
            .add_directive("deploy_trigger=debug".parse()?);
    }

    // Logs go to stderr so they don't mix with progress lines on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    Ok(())
}

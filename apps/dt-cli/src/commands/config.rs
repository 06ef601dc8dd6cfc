// config.rs — `deploy-trigger config`: show the settings a run would use.

use std::path::Path;

use dt_submit::locate_git;

use super::{resolve_config, DeployArgs};

pub fn execute(repo: &Path, config_path: Option<&Path>, args: &DeployArgs) -> anyhow::Result<()> {
    let config = resolve_config(repo, config_path, args)?;

    print!("{}", config.to_toml()?);
    println!();
    match locate_git(config.git.executable.as_deref()) {
        Ok(path) => println!("# git resolves to {}", path.display()),
        Err(_) => println!("# git resolves to <not found>"),
    }
    Ok(())
}

// init.rs — `deploy-trigger init`: write the default config file.

use std::path::Path;

use dt_submit::DeployConfig;

pub fn execute(repo: &Path, force: bool) -> anyhow::Result<()> {
    let path = DeployConfig::write_default(repo, force)?;
    println!("Created {}", path.display());
    println!("Edit it to change the remote, branch or commit message.");
    Ok(())
}

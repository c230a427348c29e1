//! Init command - Create a .oppflow store

use std::path::Path;

use crate::errors::Result;
use crate::fs::{get_config_path, get_opportunities_dir, resolve_cwd, write_config};
use crate::schemas::Config;

/// Create `.oppflow/` with a default config in the working directory
pub async fn run(cwd: Option<&Path>, force: bool, dry_run: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config_path = get_config_path(&root);

    if config_path.exists() && !force {
        println!("Store already initialized at {} (use --force to reset config)", root.display());
        return Ok(());
    }

    if dry_run {
        tracing::info!("[DRY RUN] would initialize store at {}", root.display());
        return Ok(());
    }

    std::fs::create_dir_all(get_opportunities_dir(&root))?;
    write_config(&root, &Config::default())?;
    tracing::info!(root = %root.display(), "initialized store");
    println!("Initialized oppflow store in {}", root.display());
    Ok(())
}

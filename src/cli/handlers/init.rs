use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::ServerConfig;

pub fn handle_init(dir: &Path, force: bool) -> Result<()> {
    let config_path = ServerConfig::default_path(dir);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    ServerConfig::default().save(&config_path)?;
    println!("{} {}", "Created".green(), config_path.display());
    Ok(())
}

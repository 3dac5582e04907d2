use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use wheelpick_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Print the configuration that a picker started now would use
pub fn show(config_path: &Path) -> Result<()> {
    let config = AppConfig::load_from(config_path)?;
    if !config_path.exists() {
        println!("# {} does not exist; showing defaults\n", config_path.display());
    }
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists.\nUse --force to overwrite it with defaults.",
            config_path.display()
        );
    }

    AppConfig::default().save_to(config_path)?;
    info!(path = %config_path.display(), "Wrote default configuration");
    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

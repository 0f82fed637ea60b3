use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::{BookqlConfig, CONFIG_FILE_NAME};

pub fn handle_init(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    BookqlConfig::default().save(&config_path)?;
    println!("{} {}", "Initialized".green(), config_path.display());
    Ok(())
}

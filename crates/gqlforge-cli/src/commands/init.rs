use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use gqlforge_config::{CONFIG_FILE_NAME, GenerationConfig};

pub fn cmd_init() -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    let config = GenerationConfig::default();
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    fs::write(&path, json).with_context(|| format!("write {}", CONFIG_FILE_NAME))?;
    println!("{} {}", "Created".green(), path.display());
    Ok(())
}

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use gqlforge_config::{CONFIG_FILE_NAME, GenerationConfig};

/// Load gqlforge.json from the current directory.
pub fn load_config() -> Result<GenerationConfig> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if !path.exists() {
        anyhow::bail!("{} not found. Run 'gqlforge init' first.", CONFIG_FILE_NAME);
    }
    read_config(path)
}

/// Load config from a specific path.
pub fn load_config_from_path(path: PathBuf) -> Result<GenerationConfig> {
    if !path.exists() {
        anyhow::bail!("{} not found at: {}", CONFIG_FILE_NAME, path.display());
    }
    read_config(path)
}

/// Load config from a project root (or the current directory), falling back to defaults.
pub fn load_config_or_default(project_root: Option<PathBuf>) -> Result<GenerationConfig> {
    match project_root {
        Some(root) => {
            let config_path = root.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                load_config_from_path(config_path)
            } else {
                Ok(GenerationConfig::default())
            }
        }
        None if PathBuf::from(CONFIG_FILE_NAME).exists() => load_config(),
        None => Ok(GenerationConfig::default()),
    }
}

fn read_config(path: PathBuf) -> Result<GenerationConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("read {}", path.display()))?;
    let config: GenerationConfig = serde_json::from_str(&content)
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}

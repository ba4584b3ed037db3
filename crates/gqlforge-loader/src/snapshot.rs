use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gqlforge_config::GenerationConfig;
use gqlforge_core::{MetadataSnapshot, TableMetadata};

/// Load the ORM metadata snapshot named by `metadataPath`.
pub fn load_snapshot(config: &GenerationConfig) -> Result<MetadataSnapshot> {
    load_snapshot_from_path(config.metadata_path())
}

/// Load a metadata snapshot from a file or a directory.
///
/// A file holds a whole snapshot (`engine` + `tables`). A directory is walked
/// recursively and every JSON/YAML file in it holds one table; tables are returned
/// in path order.
pub fn load_snapshot_from_path(path: &Path) -> Result<MetadataSnapshot> {
    if !path.exists() {
        anyhow::bail!("metadata snapshot not found at: {}", path.display());
    }

    let snapshot = if path.is_dir() {
        let mut files = Vec::new();
        collect_files(path, &mut files)?;
        files.sort();
        let tables = files
            .iter()
            .map(|file| parse_file::<TableMetadata>(file))
            .collect::<Result<Vec<_>>>()?;
        MetadataSnapshot {
            engine: None,
            tables,
        }
    } else {
        parse_file::<MetadataSnapshot>(path)?
    };

    snapshot
        .engine()
        .with_context(|| format!("invalid metadata snapshot: {}", path.display()))?;
    Ok(snapshot)
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("read metadata directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.context("read directory entry")?;
        let path = entry.path();

        if path.is_dir() {
            collect_files(&path, files)?;
            continue;
        }

        let ext = path.extension().and_then(|s| s.to_str());
        if path.is_file() && matches!(ext, Some("json") | Some("yaml") | Some("yml")) {
            files.push(path);
        }
    }

    Ok(())
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read metadata file: {}", path.display()))?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("parse YAML metadata: {}", path.display())),
        _ => serde_json::from_str(&content)
            .with_context(|| format!("parse JSON metadata: {}", path.display())),
    }
}

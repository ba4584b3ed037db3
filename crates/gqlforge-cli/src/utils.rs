use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use gqlforge_config::GenerationConfig;
use gqlforge_core::MetadataSnapshot;
use gqlforge_loader::{load_config_or_default, load_snapshot};
use gqlforge_planner::GenerationReport;

/// Command-line values that take precedence over gqlforge.json.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub results_path: Option<PathBuf>,
    pub snapshot: Option<PathBuf>,
    pub graphql_files: bool,
}

impl Overrides {
    pub fn apply(&self, mut config: GenerationConfig) -> GenerationConfig {
        if let Some(path) = &self.results_path {
            config.results_path = path.clone();
        }
        if let Some(path) = &self.snapshot {
            config.metadata_path = path.clone();
        }
        if self.graphql_files {
            config.graphql_files = true;
        }
        config
    }
}

/// Load gqlforge.json (or defaults) with overrides applied, then the metadata snapshot.
pub fn load_project(overrides: &Overrides) -> Result<(GenerationConfig, MetadataSnapshot)> {
    let config = overrides.apply(load_config_or_default(None)?);
    let snapshot = load_snapshot(&config)?;
    log::debug!(
        "loaded {} table(s) from {}",
        snapshot.tables.len(),
        config.metadata_path().display()
    );
    Ok((config, snapshot))
}

pub fn print_report(report: &GenerationReport) {
    for path in &report.written {
        if report.unformatted.contains(path) {
            println!("  {} {}", "unformatted".yellow(), path.display());
        } else {
            println!("  {} {}", "created".green(), path.display());
        }
    }
    for failed in &report.failed {
        println!(
            "  {} {} for '{}': {}",
            "failed".red(),
            failed.kind,
            failed.table,
            failed.error
        );
    }
    println!(
        "{} {}",
        "Files written:".bright_cyan().bold(),
        report.written.len().to_string().bright_yellow()
    );
}

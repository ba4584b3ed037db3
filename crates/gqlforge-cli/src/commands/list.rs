use anyhow::Result;
use colored::Colorize;
use gqlforge_core::build_entities;

use crate::utils::{Overrides, load_project};

pub fn cmd_list(overrides: &Overrides) -> Result<()> {
    let (_, snapshot) = load_project(overrides)?;
    let entities = build_entities(&snapshot.tables);

    if let Some(engine) = snapshot.engine()? {
        println!("{} {}", "Engine:".cyan(), engine.to_string().bright_white());
    }
    println!(
        "{} {}",
        "Entities:".bright_cyan().bold(),
        entities.len().to_string().bright_yellow()
    );
    for entity in &entities {
        println!(
            "  {} {} ({} columns)",
            entity.name.bright_white().bold(),
            format!("[{}]", entity.table_name).dimmed(),
            entity.columns.len()
        );
        for relation in &entity.relations {
            println!(
                "    {} {} -> {}",
                format!("{}:", relation.field_name).cyan(),
                relation.kind.to_string().bright_magenta(),
                relation.related_table
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{CATEGORIES_SNAPSHOT, CwdGuard, write_snapshot};
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn list_reads_snapshot() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        write_snapshot(CATEGORIES_SNAPSHOT);
        cmd_list(&Overrides::default()).unwrap();
    }

    #[test]
    #[serial]
    fn list_rejects_unknown_engine() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        write_snapshot(r#"{ "engine": "sqlite", "tables": [] }"#);
        let err = cmd_list(&Overrides::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("sqlite"));
    }
}

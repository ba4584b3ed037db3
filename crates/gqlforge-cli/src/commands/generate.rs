use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::MultiSelect;
use gqlforge_config::GenerationConfig;
use gqlforge_core::{ResolverRegistry, TableMetadata, build_entities};
use gqlforge_naming::ArtifactKind;
use gqlforge_planner::{ArtifactFlags, generate};

use crate::utils::{Overrides, load_project, print_report};

#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Generate TypeORM model classes.
    #[arg(short = 'm', long = "model")]
    pub model: bool,
    /// Generate GraphQL object types.
    #[arg(short = 'o', long = "object-type")]
    pub object_type: bool,
    /// Generate create/update input classes.
    #[arg(short = 'i', long = "input")]
    pub input: bool,
    /// Generate filter classes.
    #[arg(short = 'f', long = "filter")]
    pub filter: bool,
    /// Generate sort classes.
    #[arg(short = 's', long = "sort")]
    pub sort: bool,
    /// Generate resolver stubs.
    #[arg(short = 'r', long = "resolver")]
    pub resolver: bool,
    /// Use every entity without asking.
    #[arg(short = 'a', long = "all")]
    pub all: bool,
}

impl GenerateArgs {
    pub fn flags(&self) -> ArtifactFlags {
        ArtifactFlags {
            model: self.model,
            object_type: self.object_type,
            input: self.input,
            filter: self.filter,
            sort: self.sort,
            resolver: self.resolver,
        }
    }
}

pub fn cmd_generate(args: GenerateArgs, overrides: &Overrides, interactive: bool) -> Result<()> {
    let (config, snapshot) = load_project(overrides)?;

    let mut flags = Some(args.flags()).filter(|flags| !flags.is_empty());
    if flags.is_none() && interactive {
        let picked = prompt_kinds()?;
        if picked.is_empty() {
            println!("{}", "No file types selected".yellow());
            return Ok(());
        }
        flags = Some(picked);
    }

    let mut tables = snapshot.tables;
    if !args.all && interactive && !tables.is_empty() {
        tables = prompt_tables(tables)?;
        if tables.is_empty() {
            println!("{}", "No entities selected".yellow());
            return Ok(());
        }
    }

    run_generation(&tables, flags.as_ref(), &config)
}

/// Build entities from `tables` and write everything the flags select.
pub(crate) fn run_generation(
    tables: &[TableMetadata],
    flags: Option<&ArtifactFlags>,
    config: &GenerationConfig,
) -> Result<()> {
    if tables.is_empty() {
        println!("{}", "No tables found in metadata. Nothing to generate.".yellow());
        return Ok(());
    }

    let registry = ResolverRegistry::from_tables(tables);
    if registry.is_empty() {
        log::debug!("no resolver declarations in metadata; only explicit flags select GraphQL files");
    }
    let report = generate(build_entities(tables), flags, config, &registry)
        .context("generate files")?;
    if !report.is_empty() {
        print_report(&report);
    }
    Ok(())
}

fn prompt_kinds() -> Result<ArtifactFlags> {
    let labels: Vec<String> = ArtifactKind::ALL.iter().map(|k| k.to_string()).collect();
    let picked = MultiSelect::new()
        .with_prompt("Which files do you want to generate?")
        .items(&labels)
        .interact()
        .context("select file types")?;
    Ok(picked.into_iter().map(|i| ArtifactKind::ALL[i]).collect())
}

fn prompt_tables(tables: Vec<TableMetadata>) -> Result<Vec<TableMetadata>> {
    let labels: Vec<String> = tables
        .iter()
        .map(|t| format!("{} ({})", t.entity_name, t.table_name))
        .collect();
    let picked = MultiSelect::new()
        .with_prompt("Which entities?")
        .items(&labels)
        .interact()
        .context("select entities")?;
    Ok(tables
        .into_iter()
        .enumerate()
        .filter(|(i, _)| picked.contains(i))
        .map(|(_, t)| t)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{CATEGORIES_SNAPSHOT, CwdGuard, write_snapshot};
    use rstest::rstest;
    use serial_test::serial;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn model_flag_follows_declared_operations() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        write_snapshot(CATEGORIES_SNAPSHOT);

        let args = GenerateArgs {
            model: true,
            ..Default::default()
        };
        cmd_generate(args, &Overrides::default(), false).unwrap();

        assert!(Path::new("src/models/category/category.model.ts").exists());
        assert!(Path::new("src/_generated/category/category.filter.ts").exists());
        assert!(Path::new("src/_generated/category/category.sort.ts").exists());
        assert!(Path::new("src/_generated/category/category.input.ts").exists());
        assert!(!Path::new("src/models/category/category.ot.ts").exists());
        assert!(!Path::new("src/_generated/category/category.resolver.ts").exists());
    }

    #[rstest]
    #[case(GenerateArgs::default(), 6)]
    #[case(GenerateArgs { resolver: true, ..Default::default() }, 4)]
    #[case(GenerateArgs { object_type: true, sort: true, ..Default::default() }, 2)]
    #[serial]
    fn non_interactive_run_counts(#[case] args: GenerateArgs, #[case] expected: usize) {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        write_snapshot(CATEGORIES_SNAPSHOT);

        let overrides = Overrides {
            results_path: Some("out".into()),
            ..Default::default()
        };
        cmd_generate(args, &overrides, false).unwrap();

        let count = ["out/models/category", "out/_generated/category"]
            .iter()
            .map(|dir| std::fs::read_dir(dir).unwrap().count())
            .sum::<usize>();
        assert_eq!(count, expected);
    }

    #[test]
    #[serial]
    fn graphql_files_override_writes_full_set() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        write_snapshot(CATEGORIES_SNAPSHOT);

        let args = GenerateArgs {
            model: true,
            ..Default::default()
        };
        let overrides = Overrides {
            graphql_files: true,
            ..Default::default()
        };
        cmd_generate(args, &overrides, false).unwrap();

        assert!(Path::new("src/models/category/category.ot.ts").exists());
        assert!(Path::new("src/_generated/category/category.resolver.ts").exists());
        let input = std::fs::read_to_string("src/_generated/category/category.input.ts").unwrap();
        assert!(input.contains("CategoryUpdateInput"));
    }

    #[test]
    #[serial]
    fn missing_snapshot_is_an_error() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        let err = cmd_generate(GenerateArgs::default(), &Overrides::default(), false).unwrap_err();
        assert!(err.to_string().contains("metadata snapshot not found"));
    }

    #[test]
    fn args_map_to_flags() {
        let args = GenerateArgs {
            filter: true,
            all: true,
            ..Default::default()
        };
        let flags = args.flags();
        assert!(flags.filter);
        assert!(!flags.model);
        assert!(GenerateArgs::default().flags().is_empty());
    }
}

use anyhow::{Context, Result};
use clap::ValueEnum;
use gqlforge_config::GenerationConfig;
use gqlforge_core::MetadataSnapshot;
use schemars::schema_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// gqlforge.json
    Config,
    /// ORM metadata snapshot
    Snapshot,
}

pub fn render_schema(kind: SchemaKind) -> Result<String> {
    let schema = match kind {
        SchemaKind::Config => schema_for!(GenerationConfig),
        SchemaKind::Snapshot => schema_for!(MetadataSnapshot),
    };
    serde_json::to_string_pretty(&schema).context("serialize schema")
}

pub fn cmd_schema(kind: SchemaKind) -> Result<()> {
    println!("{}", render_schema(kind)?);
    Ok(())
}

use anyhow::Result;
use gqlforge_planner::ArtifactFlags;

use super::generate::run_generation;
use crate::utils::{Overrides, load_project};

/// Generate from every table reported by the ORM: the model always, and the GraphQL
/// artifacts when `graphqlFiles` is on.
pub fn cmd_reverse(overrides: &Overrides) -> Result<()> {
    let (config, snapshot) = load_project(overrides)?;
    let flags = ArtifactFlags::reverse(config.graphql_files);
    run_generation(&snapshot.tables, Some(&flags), &config)
}

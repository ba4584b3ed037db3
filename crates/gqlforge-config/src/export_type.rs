use serde::{Deserialize, Serialize};

/// How generated classes are exported and therefore imported by sibling files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    /// `export default class Foo` / `import Foo from "..."`
    Default,
    /// `export class Foo` / `import { Foo } from "..."`
    Named,
}

impl Default for ExportType {
    fn default() -> Self {
        ExportType::Named
    }
}

impl ExportType {
    pub fn is_default(self) -> bool {
        matches!(self, ExportType::Default)
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::export_type::ExportType;
use crate::name_case::NameCase;
use crate::style::{FormatOptions, PropertyVisibility, StrictMode};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "gqlforge.json";

fn default_results_path() -> PathBuf {
    PathBuf::from("src")
}

fn default_metadata_path() -> PathBuf {
    PathBuf::from("metadata.json")
}

fn default_file_case() -> NameCase {
    NameCase::Param
}

fn default_entity_case() -> NameCase {
    NameCase::Pascal
}

fn default_property_case() -> NameCase {
    NameCase::Camel
}

/// Top-level generation configuration (`gqlforge.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Root directory for everything the generator writes.
    #[serde(default = "default_results_path")]
    pub results_path: PathBuf,
    /// ORM metadata snapshot (file or directory) to read tables from.
    #[serde(default = "default_metadata_path")]
    pub metadata_path: PathBuf,
    #[serde(default = "default_file_case")]
    pub convert_case_file: NameCase,
    #[serde(default = "default_entity_case")]
    pub convert_case_entity: NameCase,
    #[serde(default = "default_property_case")]
    pub convert_case_property: NameCase,
    #[serde(default)]
    pub export_type: ExportType,
    /// Emit the whole GraphQL artifact set and ignore declarative resolver metadata.
    #[serde(default)]
    pub graphql_files: bool,
    /// Put model directories straight under `results_path` instead of `models/`.
    #[serde(default)]
    pub no_configs: bool,
    /// Wrap relation property types in `Promise<...>`.
    #[serde(default)]
    pub lazy: bool,
    #[serde(default)]
    pub property_visibility: PropertyVisibility,
    #[serde(default)]
    pub strict_mode: StrictMode,
    #[serde(default)]
    pub format: FormatOptions,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            results_path: default_results_path(),
            metadata_path: default_metadata_path(),
            convert_case_file: default_file_case(),
            convert_case_entity: default_entity_case(),
            convert_case_property: default_property_case(),
            export_type: ExportType::default(),
            graphql_files: false,
            no_configs: false,
            lazy: false,
            property_visibility: PropertyVisibility::default(),
            strict_mode: StrictMode::default(),
            format: FormatOptions::default(),
        }
    }
}

impl GenerationConfig {
    /// Root directory for generated output.
    pub fn results_path(&self) -> &Path {
        &self.results_path
    }

    /// Location of the metadata snapshot.
    pub fn metadata_path(&self) -> &Path {
        &self.metadata_path
    }

    /// Naming case for file and directory names.
    pub fn file_case(&self) -> NameCase {
        self.convert_case_file
    }

    /// Naming case for class/type names.
    pub fn entity_case(&self) -> NameCase {
        self.convert_case_entity
    }

    /// Naming case for property names.
    pub fn property_case(&self) -> NameCase {
        self.convert_case_property
    }

    pub fn export_type(&self) -> ExportType {
        self.export_type
    }

    /// True when declarative resolver metadata must be ignored.
    pub fn ignore_metadata(&self) -> bool {
        self.graphql_files
    }

    pub fn format(&self) -> &FormatOptions {
        &self.format
    }
}

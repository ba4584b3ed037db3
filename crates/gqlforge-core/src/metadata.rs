//! Raw ORM metadata as it appears in a snapshot file.
//!
//! These records mirror what an ORM reports about its mapped tables. They are read
//! once per run and turned into [`crate::model::Entity`] values by
//! [`crate::build::build_entities`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::resolver::ResolverDecl;

/// Database engines whose metadata the generator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseEngine {
    Mssql,
    Postgres,
    Mysql,
    Mariadb,
    Oracle,
}

impl DatabaseEngine {
    pub const ALL: [DatabaseEngine; 5] = [
        DatabaseEngine::Mssql,
        DatabaseEngine::Postgres,
        DatabaseEngine::Mysql,
        DatabaseEngine::Mariadb,
        DatabaseEngine::Oracle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DatabaseEngine::Mssql => "mssql",
            DatabaseEngine::Postgres => "postgres",
            DatabaseEngine::Mysql => "mysql",
            DatabaseEngine::Mariadb => "mariadb",
            DatabaseEngine::Oracle => "oracle",
        }
    }
}

impl FromStr for DatabaseEngine {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatabaseEngine::ALL
            .into_iter()
            .find(|engine| engine.as_str() == s)
            .ok_or_else(|| CoreError::UnknownEngine(s.to_string()))
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host-language constructor an ORM may report instead of a database type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum HostPrimitive {
    String,
    Number,
    Date,
    Boolean,
}

impl HostPrimitive {
    pub fn as_str(self) -> &'static str {
        match self {
            HostPrimitive::String => "String",
            HostPrimitive::Number => "Number",
            HostPrimitive::Date => "Date",
            HostPrimitive::Boolean => "Boolean",
        }
    }
}

/// A column type as reported by the ORM.
///
/// In JSON this is either a plain token (`"varchar"`, `"timestamp with time zone"`) or
/// `{ "primitive": "Number" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum RawColumnType {
    Primitive { primitive: HostPrimitive },
    Named(String),
}

impl RawColumnType {
    pub fn named(token: impl Into<String>) -> Self {
        RawColumnType::Named(token.into())
    }

    pub fn primitive(primitive: HostPrimitive) -> Self {
        RawColumnType::Primitive { primitive }
    }

    /// The token carried into the generated model.
    pub fn token(&self) -> &str {
        match self {
            RawColumnType::Named(name) => name,
            RawColumnType::Primitive { primitive } => primitive.as_str(),
        }
    }
}

impl From<&str> for RawColumnType {
    fn from(value: &str) -> Self {
        RawColumnType::Named(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetadata {
    pub property_name: String,
    #[serde(rename = "type")]
    pub column_type: RawColumnType,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_strategy: Option<String>,
    /// Column name in the database; falls back to the property name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// Property name of the relation this column backs, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    /// Column on the related table this column points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_column: Option<String>,
}

impl ColumnMetadata {
    pub fn new(property_name: impl Into<String>, column_type: impl Into<RawColumnType>) -> Self {
        Self {
            property_name: property_name.into(),
            column_type: column_type.into(),
            nullable: false,
            primary: false,
            generation_strategy: None,
            database_name: None,
            relation: None,
            referenced_column: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RelationMetadata {
    pub property_name: String,
    #[serde(default)]
    pub is_many_to_many: bool,
    #[serde(default)]
    pub is_many_to_one: bool,
    #[serde(default)]
    pub is_one_to_many: bool,
    #[serde(default)]
    pub is_one_to_one: bool,
    #[serde(default)]
    pub is_owning: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse_property_name: Option<String>,
    pub inverse_table_name: String,
}

impl RelationMetadata {
    pub fn new(property_name: impl Into<String>, inverse_table_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            is_many_to_many: false,
            is_many_to_one: false,
            is_one_to_many: false,
            is_one_to_one: false,
            is_owning: false,
            inverse_property_name: None,
            inverse_table_name: inverse_table_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TableMetadata {
    pub table_name: String,
    pub entity_name: String,
    #[serde(default)]
    pub columns: Vec<ColumnMetadata>,
    #[serde(default)]
    pub relations: Vec<RelationMetadata>,
    /// Declarative resolver metadata attached to the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolver: Option<ResolverDecl>,
}

impl TableMetadata {
    pub fn new(table_name: impl Into<String>, entity_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            entity_name: entity_name.into(),
            columns: Vec::new(),
            relations: Vec::new(),
            resolver: None,
        }
    }
}

/// Everything the ORM reported in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MetadataSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default)]
    pub tables: Vec<TableMetadata>,
}

impl MetadataSnapshot {
    /// Parse the declared engine. A snapshot without one is accepted.
    pub fn engine(&self) -> Result<Option<DatabaseEngine>, CoreError> {
        self.engine.as_deref().map(str::parse).transpose()
    }
}

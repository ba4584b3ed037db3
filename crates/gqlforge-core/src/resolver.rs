//! Declarative resolver metadata.
//!
//! An entity can declare which CRUD operations its resolver exposes and how each
//! property takes part in filters, sorts and inputs. The planner asks these questions
//! through [`ResolverMetadata`], so callers can swap the snapshot-backed
//! [`ResolverRegistry`] for anything else.

use std::collections::BTreeMap;
use std::fmt;

use gqlforge_naming::singularize;
use serde::{Deserialize, Serialize};

use crate::metadata::TableMetadata;

/// Operation a generated resolver can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    List,
    Find,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Find,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::List => "LIST",
            Operation::Find => "FIND",
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// Operation as written in metadata; `ALL` stands for every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum DeclaredOperation {
    All,
    List,
    Find,
    Create,
    Update,
    Delete,
}

impl DeclaredOperation {
    pub fn covers(self, op: Operation) -> bool {
        match self {
            DeclaredOperation::All => true,
            DeclaredOperation::List => op == Operation::List,
            DeclaredOperation::Find => op == Operation::Find,
            DeclaredOperation::Create => op == Operation::Create,
            DeclaredOperation::Update => op == Operation::Update,
            DeclaredOperation::Delete => op == Operation::Delete,
        }
    }
}

fn default_exposed() -> bool {
    true
}

/// How one property takes part in generated GraphQL types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FieldPolicy {
    /// Exposed as a GraphQL field at all.
    #[serde(default = "default_exposed")]
    pub exposed: bool,
    #[serde(default)]
    pub filter_ignored: bool,
    #[serde(default)]
    pub sort_ignored: bool,
    #[serde(default)]
    pub create_input_ignored: bool,
    #[serde(default)]
    pub update_input_ignored: bool,
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self {
            exposed: true,
            filter_ignored: false,
            sort_ignored: false,
            create_input_ignored: false,
            update_input_ignored: false,
        }
    }
}

impl FieldPolicy {
    pub fn in_filter(&self) -> bool {
        self.exposed && !self.filter_ignored
    }

    pub fn in_sort(&self) -> bool {
        self.exposed && !self.sort_ignored
    }

    pub fn in_create_input(&self) -> bool {
        self.exposed && !self.create_input_ignored
    }

    pub fn in_update_input(&self) -> bool {
        self.exposed && !self.update_input_ignored
    }
}

/// Resolver declaration attached to a table in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ResolverDecl {
    #[serde(default)]
    pub operations: Vec<DeclaredOperation>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, FieldPolicy>,
}

impl ResolverDecl {
    pub fn supports(&self, op: Operation) -> bool {
        self.operations.iter().any(|declared| declared.covers(op))
    }
}

/// Read-only answers about declared resolver operations and field policies.
///
/// `entity` is the singular entity name.
pub trait ResolverMetadata {
    fn supports_operation(&self, entity: &str, op: Operation) -> bool;

    fn field_policy(&self, _entity: &str, _property: &str) -> FieldPolicy {
        FieldPolicy::default()
    }
}

/// Metadata source that declares nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolverMetadata;

impl ResolverMetadata for NoResolverMetadata {
    fn supports_operation(&self, _entity: &str, _op: Operation) -> bool {
        false
    }
}

/// Resolver declarations from a snapshot, keyed by singular entity name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverRegistry {
    decls: BTreeMap<String, ResolverDecl>,
}

impl ResolverRegistry {
    pub fn from_tables(tables: &[TableMetadata]) -> Self {
        let decls = tables
            .iter()
            .filter_map(|table| {
                table
                    .resolver
                    .as_ref()
                    .map(|decl| (singularize(&table.entity_name), decl.clone()))
            })
            .collect();
        Self { decls }
    }

    pub fn insert(&mut self, entity: &str, decl: ResolverDecl) {
        self.decls.insert(singularize(entity), decl);
    }

    pub fn get(&self, entity: &str) -> Option<&ResolverDecl> {
        self.decls.get(&singularize(entity))
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl ResolverMetadata for ResolverRegistry {
    fn supports_operation(&self, entity: &str, op: Operation) -> bool {
        self.get(entity).is_some_and(|decl| decl.supports(op))
    }

    fn field_policy(&self, entity: &str, property: &str) -> FieldPolicy {
        self.get(entity)
            .and_then(|decl| decl.fields.get(property))
            .copied()
            .unwrap_or_default()
    }
}

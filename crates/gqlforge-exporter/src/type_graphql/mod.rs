//! type-graphql artifacts: object types, filters, sorts, inputs and resolvers.

mod filter;
mod input;
mod object_type;
mod resolver;
mod sort;

use std::collections::BTreeSet;

use gqlforge_core::{Column, ScalarType};

pub use filter::FilterRenderer;
pub use input::InputRenderer;
pub use object_type::ObjectTypeRenderer;
pub use resolver::ResolverRenderer;
pub use sort::SortRenderer;

/// Package providing the base classes and filter scalars generated sources extend.
pub const RUNTIME_PACKAGE: &str = "@gqlforge/core";

/// `import { A, B } from "<RUNTIME_PACKAGE>";`
pub(crate) fn runtime_import(names: &BTreeSet<&str>) -> String {
    let names: Vec<&str> = names.iter().copied().collect();
    format!("import {{ {} }} from \"{}\";", names.join(", "), RUNTIME_PACKAGE)
}

/// GraphQL scalar used for a column in `@Field(() => ...)`.
pub(crate) fn graphql_scalar(column: &Column) -> &'static str {
    if column.is_id() {
        return "ID";
    }
    match column.scalar {
        ScalarType::String => "String",
        ScalarType::Number if column.source_type.contains("int") => "Int",
        ScalarType::Number => "Float",
        ScalarType::Date => "Date",
        ScalarType::Boolean => "Boolean",
    }
}

/// Names imported from `type-graphql`, kept sorted so output is stable.
#[derive(Default)]
pub(crate) struct TypeGraphqlImports<'a> {
    names: BTreeSet<&'a str>,
}

impl<'a> TypeGraphqlImports<'a> {
    pub fn with(names: &[&'a str]) -> Self {
        Self {
            names: names.iter().copied().collect(),
        }
    }

    pub fn add(&mut self, name: &'a str) {
        self.names.insert(name);
    }

    /// Record a scalar; built-in JavaScript types need no import.
    pub fn add_scalar(&mut self, scalar: &'a str) {
        if matches!(scalar, "ID" | "Int" | "Float") {
            self.names.insert(scalar);
        }
    }

    pub fn line(&self) -> String {
        let names: Vec<&str> = self.names.iter().copied().collect();
        format!("import {{ {} }} from \"type-graphql\";", names.join(", "))
    }
}

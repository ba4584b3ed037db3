use std::fmt;

use gqlforge_naming::singularize;

/// Scalar category a column is projected onto in generated sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Number,
    Date,
    Boolean,
}

impl ScalarType {
    /// TypeScript type annotation for the scalar.
    pub fn ts_type(self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Number => "number",
            ScalarType::Date => "Date",
            ScalarType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ts_type())
    }
}

/// How the database fills a column on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum GenerationStrategy {
    #[default]
    None,
    Increment,
    Uuid,
    Other(String),
}

impl GenerationStrategy {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => GenerationStrategy::None,
            Some("increment") => GenerationStrategy::Increment,
            Some("uuid") => GenerationStrategy::Uuid,
            Some(other) => GenerationStrategy::Other(other.to_string()),
        }
    }

    pub fn is_generated(&self) -> bool {
        !matches!(self, GenerationStrategy::None)
    }
}

/// Token used as the column type of a kept foreign-key column.
pub const ID_TYPE: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub scalar: ScalarType,
    /// Raw type token, or [`ID_TYPE`] for columns referencing another table.
    pub source_type: String,
    pub primary: bool,
    pub generated: GenerationStrategy,
    pub nullable: bool,
    pub database_name: String,
}

impl Column {
    pub fn is_id(&self) -> bool {
        self.primary || self.source_type == ID_TYPE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationKind {
    /// True when the navigation property holds many related rows.
    pub fn is_collection(self) -> bool {
        matches!(self, RelationKind::OneToMany | RelationKind::ManyToMany)
    }

    /// Name of the ORM decorator for this relation.
    pub fn decorator(self) -> &'static str {
        match self {
            RelationKind::OneToOne => "OneToOne",
            RelationKind::OneToMany => "OneToMany",
            RelationKind::ManyToOne => "ManyToOne",
            RelationKind::ManyToMany => "ManyToMany",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.decorator())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub field_name: String,
    pub kind: RelationKind,
    pub related_field: Option<String>,
    pub related_table: String,
    /// This side owns the join column or join table.
    pub owning: bool,
}

/// One table, ready for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub table_name: String,
    pub name: String,
    pub columns: Vec<Column>,
    pub relations: Vec<Relation>,
    /// Related table of every relation, in relation order. Duplicates are kept.
    pub file_imports: Vec<String>,
}

impl Entity {
    /// Replace `name` with its singular form.
    pub fn singularize_name(&mut self) {
        self.name = singularize(&self.name);
    }

    pub fn primary_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.primary)
    }

    /// True when some relation navigates through the property `name`.
    pub fn is_relation_field(&self, name: &str) -> bool {
        self.relations.iter().any(|r| r.field_name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, GenerationStrategy::None, false)]
    #[case(Some("increment"), GenerationStrategy::Increment, true)]
    #[case(Some("uuid"), GenerationStrategy::Uuid, true)]
    #[case(Some("rowid"), GenerationStrategy::Other("rowid".into()), true)]
    fn generation_strategy_from_raw(
        #[case] raw: Option<&str>,
        #[case] expected: GenerationStrategy,
        #[case] generated: bool,
    ) {
        let strategy = GenerationStrategy::from_raw(raw);
        assert_eq!(strategy, expected);
        assert_eq!(strategy.is_generated(), generated);
    }

    #[rstest]
    #[case(RelationKind::OneToOne, false)]
    #[case(RelationKind::ManyToOne, false)]
    #[case(RelationKind::OneToMany, true)]
    #[case(RelationKind::ManyToMany, true)]
    fn collection_kinds(#[case] kind: RelationKind, #[case] expected: bool) {
        assert_eq!(kind.is_collection(), expected);
    }

    #[test]
    fn singularize_name_in_place() {
        let mut entity = Entity {
            table_name: "categories".into(),
            name: "Categories".into(),
            columns: vec![],
            relations: vec![],
            file_imports: vec![],
        };
        entity.singularize_name();
        assert_eq!(entity.name, "Category");
        entity.singularize_name();
        assert_eq!(entity.name, "Category");
        assert_eq!(entity.table_name, "categories");
    }

    #[test]
    fn scalar_ts_types() {
        assert_eq!(ScalarType::Date.ts_type(), "Date");
        assert_eq!(ScalarType::Boolean.to_string(), "boolean");
    }
}

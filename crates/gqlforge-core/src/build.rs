//! Per-table metadata → [`Entity`] records.

use crate::metadata::{ColumnMetadata, TableMetadata};
use crate::model::{Column, Entity, GenerationStrategy, ID_TYPE, Relation};
use crate::relation::classify_relation;
use crate::type_map::map_column_type;

/// Build one entity per table, in input order.
pub fn build_entities(tables: &[TableMetadata]) -> Vec<Entity> {
    tables.iter().map(build_entity).collect()
}

pub fn build_entity(table: &TableMetadata) -> Entity {
    let columns = table.columns.iter().filter_map(build_column).collect();

    let relations: Vec<Relation> = table
        .relations
        .iter()
        .map(|meta| {
            let descriptor = classify_relation(meta);
            Relation {
                field_name: meta.property_name.clone(),
                kind: descriptor.kind,
                related_field: descriptor.related_field,
                related_table: descriptor.related_table,
                owning: meta.is_owning,
            }
        })
        .collect();

    let file_imports = relations.iter().map(|r| r.related_table.clone()).collect();

    Entity {
        table_name: table.table_name.clone(),
        name: table.entity_name.clone(),
        columns,
        relations,
        file_imports,
    }
}

/// A column backing a relation is only kept when it names the column it references;
/// such a column is typed as an opaque id.
fn build_column(meta: &ColumnMetadata) -> Option<Column> {
    if meta.relation.is_some() && meta.referenced_column.is_none() {
        return None;
    }

    let source_type = match meta.referenced_column {
        Some(_) => ID_TYPE.to_string(),
        None => meta.column_type.token().to_string(),
    };

    Some(Column {
        name: meta.property_name.clone(),
        scalar: map_column_type(&meta.column_type),
        source_type,
        primary: meta.primary,
        generated: GenerationStrategy::from_raw(meta.generation_strategy.as_deref()),
        nullable: meta.nullable,
        database_name: meta
            .database_name
            .clone()
            .unwrap_or_else(|| meta.property_name.clone()),
    })
}

//! TypeORM entity models (`<base>.model.ts`).

use std::collections::BTreeSet;

use gqlforge_core::{Column, Entity, GenerationStrategy, ID_TYPE, Relation, RelationKind};
use gqlforge_naming::ArtifactKind;

use crate::error::RenderError;
use crate::renderer::{ArtifactRenderer, RenderContext, related_imports, string_literal};

pub struct ModelRenderer;

impl ArtifactRenderer for ModelRenderer {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Model
    }

    fn render(&self, entity: &Entity, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        Ok(render_model(entity, ctx))
    }
}

/// Render a TypeORM entity class for the given entity.
pub fn render_model(entity: &Entity, ctx: &RenderContext<'_>) -> String {
    let naming = &ctx.naming;
    let class_name = naming.entity_name(&entity.name);
    let mut decorators: BTreeSet<&str> = BTreeSet::from(["BaseEntity", "Entity"]);
    let mut body: Vec<String> = Vec::new();

    for column in &entity.columns {
        for decorator in column_decorators(column, &mut decorators) {
            body.push(format!("    {}", decorator));
        }
        let mut ts_type = column.scalar.ts_type().to_string();
        if column.nullable {
            ts_type.push_str(" | null");
        }
        body.push(format!("    {};", property(ctx, &column.name, &ts_type)));
        body.push(String::new());
    }

    for relation in &entity.relations {
        let related = naming.entity_name(&relation.related_table);
        decorators.insert(relation.kind.decorator());
        body.push(format!("    {}", relation_decorator(ctx, relation, &related)));
        if relation.owning {
            match relation.kind {
                RelationKind::OneToOne => {
                    decorators.insert("JoinColumn");
                    body.push("    @JoinColumn()".into());
                }
                RelationKind::ManyToMany => {
                    decorators.insert("JoinTable");
                    body.push("    @JoinTable()".into());
                }
                RelationKind::OneToMany | RelationKind::ManyToOne => {}
            }
        }
        let ts_type = relation_type(&related, relation.kind, ctx.config.lazy);
        body.push(format!("    {};", property(ctx, &relation.field_name, &ts_type)));
        body.push(String::new());
    }
    if body.last().is_some_and(String::is_empty) {
        body.pop();
    }

    let mut lines: Vec<String> = Vec::new();
    let names: Vec<&str> = decorators.into_iter().collect();
    lines.push(format!("import {{ {} }} from \"typeorm\";", names.join(", ")));
    for table in related_imports(entity, naming) {
        lines.push(ctx.import_line(
            &naming.entity_name(table),
            &ctx.sibling_import(table, ArtifactKind::Model),
        ));
    }
    lines.push(String::new());
    lines.push(format!("@Entity({})", string_literal(&entity.table_name)));
    lines.push(format!("{} extends BaseEntity {{", ctx.class_header(&class_name)));
    lines.extend(body);
    lines.push("}".into());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `[visibility ]name[marker]: type`
fn property(ctx: &RenderContext<'_>, raw_name: &str, ts_type: &str) -> String {
    format!(
        "{}{}{}: {}",
        ctx.config.property_visibility.prefix(),
        ctx.naming.property_name(raw_name),
        ctx.config.strict_mode.marker(),
        ts_type
    )
}

/// Property type of a relation: `X`, `X[]`, or either wrapped in `Promise<...>` when lazy.
pub(crate) fn relation_type(related: &str, kind: RelationKind, lazy: bool) -> String {
    let mut ty = related.to_string();
    if kind.is_collection() {
        ty.push_str("[]");
    }
    if lazy {
        ty = format!("Promise<{}>", ty);
    }
    ty
}

fn relation_decorator(ctx: &RenderContext<'_>, relation: &Relation, related: &str) -> String {
    match &relation.related_field {
        Some(inverse) => {
            let param = ctx.naming.property_name(related);
            format!(
                "@{}(() => {}, ({}) => {}.{})",
                relation.kind.decorator(),
                related,
                param,
                param,
                ctx.naming.property_name(inverse)
            )
        }
        None => format!("@{}(() => {})", relation.kind.decorator(), related),
    }
}

/// Database type to declare, if the column carries a real one.
fn db_type(column: &Column) -> Option<&str> {
    match column.source_type.as_str() {
        ID_TYPE | "String" | "Number" | "Date" | "Boolean" => None,
        other => Some(other),
    }
}

fn column_decorators<'a>(column: &Column, used: &mut BTreeSet<&'a str>) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    if let Some(ty) = db_type(column) {
        options.push(format!("type: {}", string_literal(ty)));
    }
    if column.database_name != column.name {
        options.push(format!("name: {}", string_literal(&column.database_name)));
    }
    if column.nullable {
        options.push("nullable: true".into());
    }
    let options = if options.is_empty() {
        String::new()
    } else {
        format!("{{ {} }}", options.join(", "))
    };

    let mut out = Vec::new();
    match (&column.generated, column.primary) {
        (GenerationStrategy::Increment, true) => {
            used.insert("PrimaryGeneratedColumn");
            out.push(format!("@PrimaryGeneratedColumn({})", name_only(column)));
        }
        (GenerationStrategy::Uuid, true) => {
            used.insert("PrimaryGeneratedColumn");
            let name = name_only(column);
            if name.is_empty() {
                out.push("@PrimaryGeneratedColumn(\"uuid\")".into());
            } else {
                out.push(format!("@PrimaryGeneratedColumn(\"uuid\", {})", name));
            }
        }
        (strategy, primary) => {
            let decorator = if primary { "PrimaryColumn" } else { "Column" };
            used.insert(decorator);
            out.push(format!("@{}({})", decorator, options));
            let generated = match strategy {
                GenerationStrategy::None => None,
                GenerationStrategy::Increment => Some("increment"),
                GenerationStrategy::Uuid => Some("uuid"),
                GenerationStrategy::Other(other) => Some(other.as_str()),
            };
            if let Some(generated) = generated {
                used.insert("Generated");
                out.push(format!("@Generated({})", string_literal(generated)));
            }
        }
    }
    out
}

/// `{ name: "..." }` when the database name differs from the property, else nothing.
fn name_only(column: &Column) -> String {
    if column.database_name == column.name {
        String::new()
    } else {
        format!("{{ name: {} }}", string_literal(&column.database_name))
    }
}

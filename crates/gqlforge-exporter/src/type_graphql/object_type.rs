use gqlforge_core::Entity;
use gqlforge_naming::ArtifactKind;

use super::{TypeGraphqlImports, graphql_scalar};
use crate::error::RenderError;
use crate::renderer::{ArtifactRenderer, RenderContext, related_imports};

/// GraphQL object type exposed for an entity (`<base>.ot.ts`).
pub struct ObjectTypeRenderer;

impl ArtifactRenderer for ObjectTypeRenderer {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ObjectType
    }

    fn render(&self, entity: &Entity, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let naming = &ctx.naming;
        let mut imports = TypeGraphqlImports::with(&["Field", "ObjectType"]);
        let mut body: Vec<String> = Vec::new();

        for column in entity
            .columns
            .iter()
            .filter(|c| ctx.policy(entity, &c.name).exposed)
        {
            let scalar = graphql_scalar(column);
            imports.add_scalar(scalar);
            let property = naming.property_name(&column.name);
            if column.nullable {
                body.push(format!("    @Field(() => {}, {{ nullable: true }})", scalar));
                body.push(format!("    {}?: {};", property, column.scalar.ts_type()));
            } else {
                body.push(format!("    @Field(() => {})", scalar));
                body.push(format!("    {}!: {};", property, column.scalar.ts_type()));
            }
            body.push(String::new());
        }

        for relation in entity
            .relations
            .iter()
            .filter(|r| ctx.policy(entity, &r.field_name).exposed)
        {
            let related = naming.object_type_name(&relation.related_table);
            let (graphql, ts) = if relation.kind.is_collection() {
                (format!("[{}]", related), format!("{}[]", related))
            } else {
                (related.clone(), related)
            };
            body.push(format!("    @Field(() => {}, {{ nullable: true }})", graphql));
            body.push(format!(
                "    {}?: {};",
                naming.property_name(&relation.field_name),
                ts
            ));
            body.push(String::new());
        }
        if body.last().is_some_and(String::is_empty) {
            body.pop();
        }

        let mut lines = vec![imports.line()];
        for table in related_imports(entity, naming) {
            lines.push(ctx.import_line(
                &naming.object_type_name(table),
                &ctx.sibling_import(table, ArtifactKind::ObjectType),
            ));
        }
        lines.push(String::new());
        lines.push(format!(
            "@ObjectType(\"{}\")",
            naming.entity_name(&entity.name)
        ));
        lines.push(format!(
            "{} {{",
            ctx.class_header(&naming.object_type_name(&entity.name))
        ));
        lines.extend(body);
        lines.push("}".into());

        Ok(lines.join("\n") + "\n")
    }
}

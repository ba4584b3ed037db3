use std::collections::BTreeSet;

use gqlforge_core::Entity;
use gqlforge_naming::ArtifactKind;

use super::{TypeGraphqlImports, runtime_import};
use crate::error::RenderError;
use crate::renderer::{ArtifactRenderer, RenderContext, related_imports};

/// Sort input type for list queries (`<base>.sort.ts`).
///
/// Relations sort through the related entity's sort type, one level per relation,
/// whatever the relation's cardinality.
pub struct SortRenderer;

impl ArtifactRenderer for SortRenderer {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Sort
    }

    fn render(&self, entity: &Entity, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let naming = &ctx.naming;
        let sorts_name = naming.sorts_name(&entity.name);

        let mut body: Vec<String> = Vec::new();
        for column in entity
            .columns
            .iter()
            .filter(|c| ctx.policy(entity, &c.name).in_sort())
        {
            body.push("    @Field(() => SortField, { nullable: true })".into());
            body.push(format!(
                "    {}?: SortField;",
                naming.property_name(&column.name)
            ));
            body.push(String::new());
        }
        for relation in entity
            .relations
            .iter()
            .filter(|r| ctx.policy(entity, &r.field_name).in_sort())
        {
            let related = naming.sorts_name(&relation.related_table);
            body.push(format!("    @Field(() => {}, {{ nullable: true }})", related));
            body.push(format!(
                "    {}?: {};",
                naming.property_name(&relation.field_name),
                related
            ));
            body.push(String::new());
        }
        if body.last().is_some_and(String::is_empty) {
            body.pop();
        }

        let mut lines = vec![
            TypeGraphqlImports::with(&["Field", "InputType"]).line(),
            runtime_import(&BTreeSet::from(["BaseSortFields", "SortField"])),
        ];
        for table in related_imports(entity, naming) {
            lines.push(ctx.import_line(
                &naming.sorts_name(table),
                &ctx.sibling_import(table, ArtifactKind::Sort),
            ));
        }
        lines.push(String::new());
        lines.push("@InputType()".into());
        lines.push(format!(
            "{} extends BaseSortFields {{",
            ctx.class_header(&sorts_name)
        ));
        lines.extend(body);
        lines.push("}".into());

        Ok(lines.join("\n") + "\n")
    }
}

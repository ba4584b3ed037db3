use std::collections::BTreeSet;

use gqlforge_core::{Column, Entity, ScalarType};
use gqlforge_naming::ArtifactKind;

use super::{TypeGraphqlImports, runtime_import};
use crate::error::RenderError;
use crate::renderer::{ArtifactRenderer, RenderContext, related_imports};

/// Filter input type for list queries (`<base>.filter.ts`).
pub struct FilterRenderer;

/// Runtime filter scalar for a column.
fn filter_scalar(column: &Column) -> &'static str {
    if column.generated.is_generated() || column.is_id() {
        return "FilteredID";
    }
    match column.scalar {
        ScalarType::String => "FilteredString",
        ScalarType::Number if column.source_type.contains("int") => "FilteredInt",
        ScalarType::Number => "FilteredFloat",
        ScalarType::Date => "FilteredDate",
        ScalarType::Boolean => "FilteredBoolean",
    }
}

impl ArtifactRenderer for FilterRenderer {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Filter
    }

    fn render(&self, entity: &Entity, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let naming = &ctx.naming;
        let filter_name = naming.filters_name(&entity.name);
        let mut runtime: BTreeSet<&str> = BTreeSet::from(["BaseFilterFields"]);

        let mut body: Vec<String> = Vec::new();
        for combinator in ["or", "and"] {
            body.push(format!(
                "    @Field(() => [{}], {{ nullable: true }})",
                filter_name
            ));
            body.push(format!("    {}?: {}[];", combinator, filter_name));
            body.push(String::new());
        }

        for column in entity
            .columns
            .iter()
            .filter(|c| ctx.policy(entity, &c.name).in_filter())
        {
            let scalar = filter_scalar(column);
            runtime.insert(scalar);
            body.push(format!("    @Field(() => {}, {{ nullable: true }})", scalar));
            body.push(format!(
                "    {}?: {};",
                naming.property_name(&column.name),
                scalar
            ));
            body.push(String::new());
        }

        for relation in entity
            .relations
            .iter()
            .filter(|r| ctx.policy(entity, &r.field_name).in_filter())
        {
            let related = naming.filters_name(&relation.related_table);
            body.push(format!("    @Field(() => {}, {{ nullable: true }})", related));
            body.push(format!(
                "    {}?: {};",
                naming.property_name(&relation.field_name),
                related
            ));
            body.push(String::new());
        }
        body.pop();

        let mut lines = vec![
            TypeGraphqlImports::with(&["Field", "InputType"]).line(),
            runtime_import(&runtime),
        ];
        for table in related_imports(entity, naming) {
            lines.push(ctx.import_line(
                &naming.filters_name(table),
                &ctx.sibling_import(table, ArtifactKind::Filter),
            ));
        }
        lines.push(String::new());
        lines.push("@InputType()".into());
        lines.push(format!(
            "{} extends BaseFilterFields {{",
            ctx.class_header(&filter_name)
        ));
        lines.extend(body);
        lines.push("}".into());

        Ok(lines.join("\n") + "\n")
    }
}

use std::collections::BTreeSet;

use gqlforge_core::{Column, Entity, ScalarType};
use gqlforge_naming::ArtifactKind;

use super::{TypeGraphqlImports, graphql_scalar, runtime_import};
use crate::error::RenderError;
use crate::renderer::{ArtifactRenderer, RenderContext};

/// Create/update input types (`<base>.input.ts`).
///
/// Both classes share one file, so they are always named exports.
pub struct InputRenderer;

/// Initializer that keeps a required create field well-formed when omitted.
fn default_value(column: &Column) -> &'static str {
    if column.nullable {
        return "";
    }
    match column.scalar {
        ScalarType::String => " = \"\"",
        ScalarType::Number => " = 0",
        ScalarType::Date => " = new Date()",
        ScalarType::Boolean => " = false",
    }
}

impl ArtifactRenderer for InputRenderer {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Input
    }

    fn render(&self, entity: &Entity, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        if !ctx.input.any() {
            return Err(RenderError::NoInputVariant(entity.name.clone()));
        }
        let naming = &ctx.naming;
        let entity_name = naming.entity_name(&entity.name);
        let mut imports = TypeGraphqlImports::with(&["Field", "InputType"]);
        let mut classes: Vec<Vec<String>> = Vec::new();

        if ctx.input.create {
            let mut class = vec![
                "@InputType()".to_string(),
                format!(
                    "export class {} extends BaseInputFields implements Partial<{}> {{",
                    naming.create_input_name(&entity.name),
                    entity_name
                ),
            ];
            let columns = entity.columns.iter().filter(|c| {
                ctx.policy(entity, &c.name).in_create_input()
                    && !c.generated.is_generated()
                    && !entity.is_relation_field(&c.name)
            });
            for column in columns {
                let scalar = graphql_scalar(column);
                imports.add_scalar(scalar);
                let property = naming.property_name(&column.name);
                if column.nullable {
                    class.push(format!("    @Field(() => {}, {{ nullable: true }})", scalar));
                    class.push(format!("    {}?: {};", property, column.scalar.ts_type()));
                } else {
                    class.push(format!("    @Field(() => {})", scalar));
                    class.push(format!(
                        "    {}: {}{};",
                        property,
                        column.scalar.ts_type(),
                        default_value(column)
                    ));
                }
                class.push(String::new());
            }
            close_class(&mut class);
            classes.push(class);
        }

        if ctx.input.update {
            let mut class = vec![
                "@InputType()".to_string(),
                format!(
                    "export class {} extends BaseInputFields implements Partial<{}> {{",
                    naming.update_input_name(&entity.name),
                    entity_name
                ),
            ];
            let columns = entity.columns.iter().filter(|c| {
                ctx.policy(entity, &c.name).in_update_input()
                    && !c.primary
                    && !entity.is_relation_field(&c.name)
            });
            for column in columns {
                let scalar = graphql_scalar(column);
                imports.add_scalar(scalar);
                class.push(format!("    @Field(() => {}, {{ nullable: true }})", scalar));
                class.push(format!(
                    "    {}?: {};",
                    naming.property_name(&column.name),
                    column.scalar.ts_type()
                ));
                class.push(String::new());
            }
            close_class(&mut class);
            classes.push(class);
        }

        let mut lines = vec![
            imports.line(),
            runtime_import(&BTreeSet::from(["BaseInputFields"])),
            ctx.import_line(
                &entity_name,
                &ctx.model_import(&entity.name, ArtifactKind::Model),
            ),
        ];
        for class in classes {
            lines.push(String::new());
            lines.extend(class);
        }

        Ok(lines.join("\n") + "\n")
    }
}

fn close_class(class: &mut Vec<String>) {
    if class.last().is_some_and(String::is_empty) {
        class.pop();
    }
    class.push("}".into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{InputVariants, fixtures};
    use gqlforge_config::{ExportType, GenerationConfig};
    use gqlforge_core::{FieldPolicy, NoResolverMetadata, ResolverDecl, ResolverRegistry};

    fn render(config: &GenerationConfig, input: InputVariants) -> Result<String, RenderError> {
        let ctx = RenderContext::new(config, &NoResolverMetadata).with_input(input);
        InputRenderer.render(&fixtures::post(), &ctx)
    }

    #[test]
    fn renders_create_and_update() {
        let out = render(&GenerationConfig::default(), InputVariants::BOTH).unwrap();
        assert!(out.starts_with(
            "import { Field, Float, ID, InputType } from \"type-graphql\";\n\
             import { BaseInputFields } from \"@gqlforge/core\";\n\
             import { Post } from \"../../models/post/post.model\";\n"
        ));
        assert!(out.contains(
            "export class PostCreateInput extends BaseInputFields implements Partial<Post> {"
        ));
        assert!(out.contains(
            "export class PostUpdateInput extends BaseInputFields implements Partial<Post> {"
        ));

        let (create, update) = out
            .split_once("export class PostUpdateInput")
            .unwrap();
        // generated id is not part of create
        assert!(!create.contains("id: number"));
        assert!(create.contains("    @Field(() => String)\n    title: string = \"\";"));
        assert!(create.contains("    @Field(() => Float, { nullable: true })\n    score?: number;"));
        assert!(create.contains("    published: boolean = false;"));
        assert!(create.contains("    createdAt: Date = new Date();"));
        assert!(create.contains("    @Field(() => ID)\n    authorId: number = 0;"));

        assert!(!update.contains("    id?"));
        assert!(update.contains("    @Field(() => String, { nullable: true })\n    title?: string;"));
        assert!(update.contains("    authorId?: number;"));
    }

    #[test]
    fn create_only() {
        let out = render(
            &GenerationConfig::default(),
            InputVariants {
                create: true,
                update: false,
            },
        )
        .unwrap();
        assert!(out.contains("PostCreateInput"));
        assert!(!out.contains("PostUpdateInput"));
    }

    #[test]
    fn no_variant_is_an_error() {
        assert_eq!(
            render(&GenerationConfig::default(), InputVariants::NONE),
            Err(RenderError::NoInputVariant("Post".into()))
        );
    }

    #[test]
    fn flat_layout_and_default_export_change_model_import() {
        let config = GenerationConfig {
            no_configs: true,
            export_type: ExportType::Default,
            ..Default::default()
        };
        let out = render(&config, InputVariants::BOTH).unwrap();
        assert!(out.contains("import Post from \"../../post/post.model\";"));
        assert!(out.contains("export class PostCreateInput"));
    }

    #[test]
    fn ignored_fields_per_variant() {
        let mut decl = ResolverDecl::default();
        decl.fields.insert(
            "title".into(),
            FieldPolicy {
                create_input_ignored: true,
                ..Default::default()
            },
        );
        decl.fields.insert(
            "score".into(),
            FieldPolicy {
                update_input_ignored: true,
                ..Default::default()
            },
        );
        let mut registry = ResolverRegistry::default();
        registry.insert("Post", decl);

        let config = GenerationConfig::default();
        let ctx = RenderContext::new(&config, &registry);
        let out = InputRenderer.render(&fixtures::post(), &ctx).unwrap();
        let (create, update) = out.split_once("PostUpdateInput").unwrap();
        assert!(!create.contains("title"));
        assert!(create.contains("score?: number;"));
        assert!(update.contains("title?: string;"));
        assert!(!update.contains("score"));
    }
}

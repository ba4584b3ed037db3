use gqlforge_core::{Column, Entity, Operation};
use gqlforge_naming::ArtifactKind;

use super::TypeGraphqlImports;
use crate::error::RenderError;
use crate::renderer::{ArtifactRenderer, RenderContext};

/// CRUD resolver stub (`<base>.resolver.ts`) backed by TypeORM's active-record API.
///
/// The operations are the ones the metadata declares for the entity. An entity that
/// declares none, or a run that ignores metadata, gets all five.
pub struct ResolverRenderer;

impl ArtifactRenderer for ResolverRenderer {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Resolver
    }

    fn render(&self, entity: &Entity, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let naming = &ctx.naming;
        let mut operations: Vec<Operation> = Operation::ALL
            .into_iter()
            .filter(|op| ctx.supports(entity, *op))
            .collect();
        if operations.is_empty() {
            operations = Operation::ALL.to_vec();
        }

        let needs_key = operations
            .iter()
            .find(|op| matches!(op, Operation::Find | Operation::Update | Operation::Delete));
        let key = match needs_key {
            Some(op) => Some(entity.primary_columns().next().ok_or_else(|| {
                RenderError::MissingPrimaryKey(entity.name.clone(), op.to_string())
            })?),
            None => None,
        };

        let names = Names {
            model: naming.entity_name(&entity.name),
            object_type: naming.object_type_name(&entity.name),
            filters: naming.filters_name(&entity.name),
            sorts: naming.sorts_name(&entity.name),
            create_input: naming.create_input_name(&entity.name),
            update_input: naming.update_input_name(&entity.name),
        };
        let mut imports = TypeGraphqlImports::with(&["Arg", "Resolver"]);
        let mut body: Vec<String> = Vec::new();

        for op in &operations {
            let method = match op {
                Operation::List => {
                    imports.add("Query");
                    list_method(&names, &naming.plural_property_name(&entity.name))
                }
                Operation::Find => {
                    imports.add("Query");
                    imports.add("ID");
                    find_method(ctx, &names, key)
                }
                Operation::Create => {
                    imports.add("Mutation");
                    create_method(&names)
                }
                Operation::Update => {
                    imports.add("Mutation");
                    imports.add("ID");
                    update_method(ctx, &names, key)
                }
                Operation::Delete => {
                    imports.add("Mutation");
                    imports.add("ID");
                    delete_method(ctx, &names, key)
                }
            };
            body.extend(method);
            body.push(String::new());
        }
        body.pop();

        let mut lines = vec![
            imports.line(),
            ctx.import_line(
                &names.model,
                &ctx.model_import(&entity.name, ArtifactKind::Model),
            ),
            ctx.import_line(
                &names.object_type,
                &ctx.model_import(&entity.name, ArtifactKind::ObjectType),
            ),
        ];
        let local = |kind: ArtifactKind| format!("./{}", naming.artifact_file_stem(&entity.name, kind));
        if operations.contains(&Operation::List) {
            lines.push(ctx.import_line(&names.filters, &local(ArtifactKind::Filter)));
            lines.push(ctx.import_line(&names.sorts, &local(ArtifactKind::Sort)));
        }
        let inputs: Vec<&str> = [
            (Operation::Create, names.create_input.as_str()),
            (Operation::Update, names.update_input.as_str()),
        ]
        .into_iter()
        .filter(|(op, _)| operations.contains(op))
        .map(|(_, name)| name)
        .collect();
        if !inputs.is_empty() {
            lines.push(format!(
                "import {{ {} }} from \"{}\";",
                inputs.join(", "),
                local(ArtifactKind::Input)
            ));
        }

        lines.push(String::new());
        lines.push(format!("@Resolver(() => {})", names.object_type));
        lines.push(format!(
            "{} {{",
            ctx.class_header(&naming.resolver_name(&entity.name))
        ));
        lines.extend(body);
        lines.push("}".into());

        Ok(lines.join("\n") + "\n")
    }
}

struct Names {
    model: String,
    object_type: String,
    filters: String,
    sorts: String,
    create_input: String,
    update_input: String,
}

/// `(property, ts type)` of the key argument.
fn key_arg(ctx: &RenderContext<'_>, key: Option<&Column>) -> (String, &'static str) {
    match key {
        Some(column) => (
            ctx.naming.property_name(&column.name),
            column.scalar.ts_type(),
        ),
        None => ("id".to_string(), "string"),
    }
}

fn list_method(names: &Names, query: &str) -> Vec<String> {
    vec![
        format!("    @Query(() => [{}])", names.object_type),
        format!("    async {}(", query),
        format!(
            "        @Arg(\"filters\", () => {f}, {{ nullable: true }}) filters?: {f},",
            f = names.filters
        ),
        format!(
            "        @Arg(\"sorts\", () => [{s}], {{ nullable: true }}) sorts?: {s}[],",
            s = names.sorts
        ),
        format!("    ): Promise<{}[]> {{", names.model),
        format!("        return {}.find();", names.model),
        "    }".into(),
    ]
}

fn find_method(ctx: &RenderContext<'_>, names: &Names, key: Option<&Column>) -> Vec<String> {
    let (key, ts) = key_arg(ctx, key);
    vec![
        format!("    @Query(() => {}, {{ nullable: true }})", names.object_type),
        format!(
            "    async {}(@Arg(\"{k}\", () => ID) {k}: {ts}): Promise<{m} | null> {{",
            ctx.naming.property_name(&names.model),
            k = key,
            ts = ts,
            m = names.model
        ),
        format!("        return {}.findOne({{ where: {{ {} }} }});", names.model, key),
        "    }".into(),
    ]
}

fn create_method(names: &Names) -> Vec<String> {
    vec![
        format!("    @Mutation(() => {})", names.object_type),
        format!("    async create{}(", names.model),
        format!(
            "        @Arg(\"data\", () => {i}) data: {i},",
            i = names.create_input
        ),
        format!("    ): Promise<{}> {{", names.model),
        format!("        return {}.create({{ ...data }}).save();", names.model),
        "    }".into(),
    ]
}

fn update_method(ctx: &RenderContext<'_>, names: &Names, key: Option<&Column>) -> Vec<String> {
    let (key, ts) = key_arg(ctx, key);
    vec![
        format!("    @Mutation(() => {})", names.object_type),
        format!("    async update{}(", names.model),
        format!("        @Arg(\"{k}\", () => ID) {k}: {ts},", k = key, ts = ts),
        format!(
            "        @Arg(\"data\", () => {i}) data: {i},",
            i = names.update_input
        ),
        format!("    ): Promise<{}> {{", names.model),
        format!(
            "        const entity = await {}.findOneOrFail({{ where: {{ {} }} }});",
            names.model, key
        ),
        "        Object.assign(entity, data);".into(),
        "        return entity.save();".into(),
        "    }".into(),
    ]
}

fn delete_method(ctx: &RenderContext<'_>, names: &Names, key: Option<&Column>) -> Vec<String> {
    let (key, ts) = key_arg(ctx, key);
    vec![
        "    @Mutation(() => Boolean)".into(),
        format!(
            "    async delete{}(@Arg(\"{k}\", () => ID) {k}: {ts}): Promise<boolean> {{",
            names.model,
            k = key,
            ts = ts
        ),
        format!(
            "        const entity = await {}.findOneOrFail({{ where: {{ {} }} }});",
            names.model, key
        ),
        "        await entity.remove();".into(),
        "        return true;".into(),
        "    }".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::fixtures;
    use gqlforge_config::GenerationConfig;
    use gqlforge_core::{DeclaredOperation, NoResolverMetadata, ResolverDecl, ResolverRegistry};

    fn registry(operations: Vec<DeclaredOperation>) -> ResolverRegistry {
        let mut registry = ResolverRegistry::default();
        registry.insert(
            "Post",
            ResolverDecl {
                operations,
                ..Default::default()
            },
        );
        registry
    }

    #[test]
    fn undeclared_entity_gets_every_operation() {
        let config = GenerationConfig::default();
        let ctx = RenderContext::new(&config, &NoResolverMetadata);
        let out = ResolverRenderer.render(&fixtures::post(), &ctx).unwrap();

        assert!(out.starts_with(
            "import { Arg, ID, Mutation, Query, Resolver } from \"type-graphql\";\n\
             import { Post } from \"../../models/post/post.model\";\n\
             import { PostOT } from \"../../models/post/post.ot\";\n\
             import { PostFilters } from \"./post.filter\";\n\
             import { PostSorts } from \"./post.sort\";\n\
             import { PostCreateInput, PostUpdateInput } from \"./post.input\";\n"
        ));
        assert!(out.contains("@Resolver(() => PostOT)\nexport class PostResolver {"));
        assert!(out.contains("    @Query(() => [PostOT])\n    async posts("));
        assert!(out.contains("    ): Promise<Post[]> {\n        return Post.find();"));
        assert!(out.contains(
            "    async post(@Arg(\"id\", () => ID) id: number): Promise<Post | null> {"
        ));
        assert!(out.contains("return Post.findOne({ where: { id } });"));
        assert!(out.contains("    async createPost(\n        @Arg(\"data\", () => PostCreateInput) data: PostCreateInput,"));
        assert!(out.contains("    async updatePost(\n        @Arg(\"id\", () => ID) id: number,"));
        assert!(out.contains("    async deletePost(@Arg(\"id\", () => ID) id: number): Promise<boolean> {"));
        assert!(out.ends_with("        return true;\n    }\n}\n"));
    }

    #[test]
    fn declared_operations_limit_methods_and_imports() {
        let registry = registry(vec![DeclaredOperation::List, DeclaredOperation::Create]);
        let config = GenerationConfig::default();
        let ctx = RenderContext::new(&config, &registry);
        let out = ResolverRenderer.render(&fixtures::post(), &ctx).unwrap();

        assert!(out.starts_with("import { Arg, Mutation, Query, Resolver } from \"type-graphql\";"));
        assert!(out.contains("import { PostCreateInput } from \"./post.input\";"));
        assert!(out.contains("async posts("));
        assert!(out.contains("async createPost("));
        assert!(!out.contains("updatePost"));
        assert!(!out.contains("deletePost"));
        assert!(!out.contains("async post("));
    }

    #[test]
    fn keyed_operation_without_primary_key_fails() {
        let registry = registry(vec![DeclaredOperation::Find]);
        let config = GenerationConfig::default();
        let ctx = RenderContext::new(&config, &registry);
        let mut entity = fixtures::audit_log();
        entity.name = "Post".into();
        assert_eq!(
            ResolverRenderer.render(&entity, &ctx),
            Err(RenderError::MissingPrimaryKey("Post".into(), "FIND".into()))
        );

        let registry = self::registry(vec![DeclaredOperation::List]);
        let ctx = RenderContext::new(&config, &registry);
        assert!(ResolverRenderer.render(&entity, &ctx).is_ok());
    }
}

use gqlforge_config::GenerationConfig;
use gqlforge_core::{Entity, FieldPolicy, Operation, ResolverMetadata};
use gqlforge_naming::{ArtifactKind, MODELS_DIR, Naming};

use crate::error::RenderError;
use crate::type_graphql::{
    FilterRenderer, InputRenderer, ObjectTypeRenderer, ResolverRenderer, SortRenderer,
};
use crate::typeorm::ModelRenderer;

/// Which input classes go into an entity's `.input` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputVariants {
    pub create: bool,
    pub update: bool,
}

impl InputVariants {
    pub const BOTH: InputVariants = InputVariants {
        create: true,
        update: true,
    };
    pub const NONE: InputVariants = InputVariants {
        create: false,
        update: false,
    };

    pub fn any(self) -> bool {
        self.create || self.update
    }
}

impl Default for InputVariants {
    fn default() -> Self {
        InputVariants::BOTH
    }
}

/// Everything a renderer may consult besides the entity itself.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a GenerationConfig,
    pub naming: Naming,
    pub metadata: &'a dyn ResolverMetadata,
    pub input: InputVariants,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a GenerationConfig, metadata: &'a dyn ResolverMetadata) -> Self {
        Self {
            config,
            naming: Naming::from_config(config),
            metadata,
            input: InputVariants::default(),
        }
    }

    pub fn with_input(mut self, input: InputVariants) -> Self {
        self.input = input;
        self
    }

    /// Field policy for a property; every field is fully exposed when metadata is ignored.
    pub fn policy(&self, entity: &Entity, property: &str) -> FieldPolicy {
        if self.config.ignore_metadata() {
            FieldPolicy::default()
        } else {
            self.metadata.field_policy(&entity.name, property)
        }
    }

    pub fn supports(&self, entity: &Entity, op: Operation) -> bool {
        self.config.ignore_metadata() || self.metadata.supports_operation(&entity.name, op)
    }

    /// Import path from one entity directory to a sibling in the same family.
    pub fn sibling_import(&self, name: &str, kind: ArtifactKind) -> String {
        format!(
            "../{}/{}",
            self.naming.directory_name(name),
            self.naming.artifact_file_stem(name, kind)
        )
    }

    /// Import path from a `_generated/<dir>` file to a model-family artifact.
    pub fn model_import(&self, name: &str, kind: ArtifactKind) -> String {
        let models = if self.config.no_configs {
            String::new()
        } else {
            format!("{}/", MODELS_DIR)
        };
        format!(
            "../../{}{}/{}",
            models,
            self.naming.directory_name(name),
            self.naming.artifact_file_stem(name, kind)
        )
    }

    /// `import <binding> from "<path>";`
    pub fn import_line(&self, name: &str, path: &str) -> String {
        format!(
            "import {} from {};",
            self.naming.local_import(name),
            string_literal(path)
        )
    }

    /// `export [default ]class <name>`
    pub fn class_header(&self, name: &str) -> String {
        format!("export {}class {}", self.naming.export_keyword(), name)
    }
}

/// A per-artifact source renderer.
pub trait ArtifactRenderer {
    fn kind(&self) -> ArtifactKind;

    fn render(&self, entity: &Entity, ctx: &RenderContext<'_>) -> Result<String, RenderError>;
}

pub fn renderer_for(kind: ArtifactKind) -> &'static dyn ArtifactRenderer {
    match kind {
        ArtifactKind::Model => &ModelRenderer,
        ArtifactKind::ObjectType => &ObjectTypeRenderer,
        ArtifactKind::Filter => &FilterRenderer,
        ArtifactKind::Sort => &SortRenderer,
        ArtifactKind::Input => &InputRenderer,
        ArtifactKind::Resolver => &ResolverRenderer,
    }
}

/// Render one artifact of an entity.
pub fn render_artifact(
    kind: ArtifactKind,
    entity: &Entity,
    ctx: &RenderContext<'_>,
) -> Result<String, RenderError> {
    renderer_for(kind).render(entity, ctx)
}

/// Double-quoted TypeScript string literal.
pub(crate) fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Related entities to import, in first-seen order, without duplicates or the entity itself.
pub(crate) fn related_imports<'e>(entity: &'e Entity, naming: &Naming) -> Vec<&'e str> {
    let own = naming.entity_name(&entity.name);
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for table in &entity.file_imports {
        let type_name = naming.entity_name(table);
        if type_name == own || seen.contains(&type_name) {
            continue;
        }
        seen.push(type_name);
        out.push(table.as_str());
    }
    out
}

#[cfg(test)]
pub(crate) mod fixtures {
    use gqlforge_core::{
        ColumnMetadata, Entity, RelationMetadata, TableMetadata, build_entity,
    };

    /// `posts`: id, title, nullable score, authorId -> users, tags (many-to-many).
    pub fn post() -> Entity {
        let mut entity = build_entity(&TableMetadata {
            columns: vec![
                ColumnMetadata {
                    primary: true,
                    generation_strategy: Some("increment".into()),
                    ..ColumnMetadata::new("id", "int")
                },
                ColumnMetadata::new("title", "varchar"),
                ColumnMetadata {
                    nullable: true,
                    ..ColumnMetadata::new("score", "decimal")
                },
                ColumnMetadata::new("published", "boolean"),
                ColumnMetadata::new("createdAt", "timestamp"),
                ColumnMetadata {
                    relation: Some("author".into()),
                    referenced_column: Some("id".into()),
                    database_name: Some("author_id".into()),
                    ..ColumnMetadata::new("authorId", "int")
                },
            ],
            relations: vec![
                RelationMetadata {
                    is_many_to_one: true,
                    inverse_property_name: Some("posts".into()),
                    ..RelationMetadata::new("author", "users")
                },
                RelationMetadata {
                    is_many_to_many: true,
                    is_owning: true,
                    ..RelationMetadata::new("tags", "tags")
                },
            ],
            ..TableMetadata::new("posts", "Posts")
        });
        entity.singularize_name();
        entity
    }

    /// Entity without a primary column.
    pub fn audit_log() -> Entity {
        build_entity(&TableMetadata {
            columns: vec![ColumnMetadata::new("message", "text")],
            ..TableMetadata::new("audit_logs", "AuditLog")
        })
    }
}

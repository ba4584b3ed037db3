use std::fs;
use std::path::{Path, PathBuf};

use gqlforge_config::GenerationConfig;
use gqlforge_core::{Entity, ResolverMetadata};
use gqlforge_exporter::{RenderContext, RenderError, format_source, render_artifact};
use gqlforge_naming::ArtifactKind;

use crate::error::GenerateError;
use crate::flags::ArtifactFlags;
use crate::plan::{GenerationPlan, plan};

/// An artifact whose renderer failed; the rest of the run went on without it.
#[derive(Debug)]
pub struct FailedArtifact {
    pub table: String,
    pub kind: ArtifactKind,
    pub error: RenderError,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Every file written, in write order.
    pub written: Vec<PathBuf>,
    /// Files written as rendered because formatting failed.
    pub unformatted: Vec<PathBuf>,
    pub failed: Vec<FailedArtifact>,
}

impl GenerationReport {
    pub fn is_empty(&self) -> bool {
        self.written.is_empty() && self.failed.is_empty()
    }
}

/// Plan and write every artifact for `entities`.
///
/// Zero entities is not an error: a warning is logged and nothing is created.
pub fn generate(
    entities: Vec<Entity>,
    flags: Option<&ArtifactFlags>,
    config: &GenerationConfig,
    metadata: &dyn ResolverMetadata,
) -> Result<GenerationReport, GenerateError> {
    let plan = plan(entities, flags, config, metadata);
    write_plan(&plan, config, metadata)
}

/// Create the output directories, then render, format and write each planned artifact.
///
/// An empty plan logs a warning and creates nothing.
pub fn write_plan(
    plan: &GenerationPlan,
    config: &GenerationConfig,
    metadata: &dyn ResolverMetadata,
) -> Result<GenerationReport, GenerateError> {
    let mut report = GenerationReport::default();
    if plan.is_empty() {
        log::warn!("no tables found in metadata; skipping generation");
        return Ok(report);
    }

    create_dir(&plan.root)?;
    create_dir(&plan.models_root)?;
    create_dir(&plan.generated_root)?;
    for entity_plan in &plan.entities {
        create_dir(&entity_plan.model_dir)?;
        create_dir(&entity_plan.generated_dir)?;
    }

    let base_ctx = RenderContext::new(config, metadata);
    for entity_plan in &plan.entities {
        let entity = &entity_plan.entity;
        let ctx = base_ctx.with_input(entity_plan.input);

        for &kind in &entity_plan.artifacts {
            let rendered = match render_artifact(kind, entity, &ctx) {
                Ok(text) => text,
                Err(error) => {
                    log::error!(
                        "failed to render {} for table '{}': {}",
                        kind,
                        entity.table_name,
                        error
                    );
                    report.failed.push(FailedArtifact {
                        table: entity.table_name.clone(),
                        kind,
                        error,
                    });
                    continue;
                }
            };

            let path = entity_plan.path_for(kind);
            let text = match format_source(&rendered, &config.format) {
                Ok(formatted) => formatted,
                Err(error) => {
                    log::error!(
                        "there were problems formatting the {} for table '{}': {}; writing it unformatted",
                        kind,
                        entity.table_name,
                        error
                    );
                    report.unformatted.push(path.clone());
                    rendered
                }
            };

            fs::write(&path, text).map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;
            log::debug!("wrote {}", path.display());
            report.written.push(path);
        }
    }

    log::info!(
        "generated {} file(s) for {} entit{}",
        report.written.len(),
        plan.entities.len(),
        if plan.entities.len() == 1 { "y" } else { "ies" }
    );
    Ok(report)
}

fn create_dir(path: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(path).map_err(|source| GenerateError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlforge_config::NameCase;
    use gqlforge_core::{
        ColumnMetadata, DeclaredOperation, NoResolverMetadata, RelationMetadata, ResolverDecl,
        ResolverRegistry, TableMetadata, build_entities,
    };
    use tempfile::tempdir;

    fn categories_table() -> TableMetadata {
        TableMetadata {
            columns: vec![
                ColumnMetadata {
                    primary: true,
                    generation_strategy: Some("increment".into()),
                    ..ColumnMetadata::new("id", "int")
                },
                ColumnMetadata::new("name", "varchar"),
                ColumnMetadata {
                    relation: Some("parent".into()),
                    referenced_column: Some("id".into()),
                    nullable: true,
                    ..ColumnMetadata::new("parentId", "int")
                },
            ],
            relations: vec![RelationMetadata {
                is_many_to_one: true,
                ..RelationMetadata::new("parent", "categories")
            }],
            resolver: Some(ResolverDecl {
                operations: vec![DeclaredOperation::List, DeclaredOperation::Create],
                ..Default::default()
            }),
            ..TableMetadata::new("categories", "Categories")
        }
    }

    fn config_in(root: &Path) -> GenerationConfig {
        GenerationConfig {
            results_path: root.join("src"),
            ..Default::default()
        }
    }

    fn model_only() -> ArtifactFlags {
        ArtifactFlags {
            model: true,
            ..Default::default()
        }
    }

    #[test]
    fn categories_with_list_and_create() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let tables = vec![categories_table()];
        let registry = ResolverRegistry::from_tables(&tables);

        let report = generate(build_entities(&tables), Some(&model_only()), &config, &registry).unwrap();

        let src = dir.path().join("src");
        let model = src.join("models/category/category.model.ts");
        let filter = src.join("_generated/category/category.filter.ts");
        let sort = src.join("_generated/category/category.sort.ts");
        let input = src.join("_generated/category/category.input.ts");
        assert_eq!(report.written, vec![model.clone(), filter.clone(), sort.clone(), input.clone()]);
        assert!(report.unformatted.is_empty());
        assert!(report.failed.is_empty());

        assert!(!src.join("models/category/category.ot.ts").exists());
        assert!(!src.join("_generated/category/category.resolver.ts").exists());

        let input_text = fs::read_to_string(&input).unwrap();
        assert!(input_text.contains("export class CategoryCreateInput"));
        assert!(!input_text.contains("CategoryUpdateInput"));

        let model_text = fs::read_to_string(&model).unwrap();
        assert!(model_text.contains("export class Category extends BaseEntity {"));
        assert!(model_text.contains("    @ManyToOne(() => Category)\n    parent: Category;"));

        let filter_text = fs::read_to_string(&filter).unwrap();
        assert!(filter_text.contains("    parent?: CategoryFilters;"));
        // self relation needs no import
        assert!(!filter_text.contains("../category/category.filter"));
    }

    #[test]
    fn graphql_files_adds_object_types() {
        let dir = tempdir().unwrap();
        let config = GenerationConfig {
            graphql_files: true,
            ..config_in(dir.path())
        };
        let tables = vec![categories_table()];
        let flags = ArtifactFlags::reverse(config.graphql_files);
        let report = generate(build_entities(&tables), Some(&flags), &config, &NoResolverMetadata).unwrap();

        assert_eq!(report.written.len(), 6);
        let src = dir.path().join("src");
        assert!(src.join("models/category/category.ot.ts").exists());
        let input = fs::read_to_string(src.join("_generated/category/category.input.ts")).unwrap();
        assert!(input.contains("CategoryCreateInput"));
        assert!(input.contains("CategoryUpdateInput"));
    }

    #[test]
    fn zero_tables_creates_nothing() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let report = generate(Vec::new(), Some(&model_only()), &config, &NoResolverMetadata).unwrap();
        assert!(report.is_empty());
        assert!(!dir.path().join("src").exists());

        let empty = plan(Vec::new(), None, &config, &NoResolverMetadata);
        assert!(write_plan(&empty, &config, &NoResolverMetadata).unwrap().is_empty());
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn explicit_filter_ignores_metadata() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let tables = vec![categories_table(), TableMetadata::new("users", "User")];
        let registry = ResolverRegistry::from_tables(&tables);
        let flags = ArtifactFlags {
            filter: true,
            ..Default::default()
        };
        let report = generate(build_entities(&tables), Some(&flags), &config, &registry).unwrap();

        let src = dir.path().join("src");
        assert_eq!(
            report.written,
            vec![
                src.join("_generated/category/category.filter.ts"),
                src.join("_generated/user/user.filter.ts"),
            ]
        );
        // directories exist for every entity even when only filters are written
        assert!(src.join("models/user").is_dir());
    }

    #[test]
    fn resolver_flag_keeps_listed_filters_and_sorts() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let tables = vec![categories_table()];
        let registry = ResolverRegistry::from_tables(&tables);
        let flags = ArtifactFlags {
            resolver: true,
            ..Default::default()
        };
        let report = generate(build_entities(&tables), Some(&flags), &config, &registry).unwrap();

        let generated = dir.path().join("src/_generated/category");
        assert_eq!(
            report.written,
            vec![
                generated.join("category.filter.ts"),
                generated.join("category.sort.ts"),
                generated.join("category.input.ts"),
                generated.join("category.resolver.ts"),
            ]
        );
        let resolver = fs::read_to_string(generated.join("category.resolver.ts")).unwrap();
        assert!(resolver.contains("from \"./category.filter\";"));
        assert!(resolver.contains("from \"./category.sort\";"));
    }

    #[test]
    fn format_failure_writes_raw_text_and_continues() {
        let dir = tempdir().unwrap();
        let config = GenerationConfig {
            convert_case_property: NameCase::None,
            ..config_in(dir.path())
        };
        let broken = TableMetadata {
            columns: vec![ColumnMetadata::new("odd{name", "varchar")],
            ..TableMetadata::new("widgets", "Widget")
        };
        let tables = vec![broken, TableMetadata::new("users", "User")];
        let report = generate(build_entities(&tables), Some(&model_only()), &config, &NoResolverMetadata).unwrap();

        let src = dir.path().join("src");
        let widget = src.join("models/widget/widget.model.ts");
        assert_eq!(report.unformatted, vec![widget.clone()]);
        assert_eq!(report.written.len(), 2);
        assert!(fs::read_to_string(&widget).unwrap().contains("odd{name: string;"));
        assert!(src.join("models/user/user.model.ts").exists());
    }

    #[test]
    fn render_failure_is_recorded_and_skipped() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let tables = vec![
            TableMetadata {
                columns: vec![ColumnMetadata::new("message", "text")],
                ..TableMetadata::new("audit_logs", "AuditLog")
            },
            categories_table(),
        ];
        let flags = ArtifactFlags {
            resolver: true,
            ..Default::default()
        };
        let report = generate(build_entities(&tables), Some(&flags), &config, &NoResolverMetadata).unwrap();

        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].table, "audit_logs");
        assert_eq!(report.failed[0].kind, ArtifactKind::Resolver);
        assert_eq!(
            report.written,
            vec![dir.path().join("src/_generated/category/category.resolver.ts")]
        );
    }

    #[test]
    fn flat_layout_has_no_models_dir() {
        let dir = tempdir().unwrap();
        let config = GenerationConfig {
            no_configs: true,
            ..config_in(dir.path())
        };
        let tables = vec![categories_table()];
        generate(build_entities(&tables), Some(&model_only()), &config, &NoResolverMetadata).unwrap();

        let src = dir.path().join("src");
        assert!(src.join("category/category.model.ts").exists());
        assert!(!src.join("models").exists());
    }

    #[test]
    fn write_failure_is_fatal() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("src");
        fs::write(&blocker, "not a directory").unwrap();
        let config = config_in(dir.path());
        let err = generate(
            build_entities(&[categories_table()]),
            None,
            &config,
            &NoResolverMetadata,
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::CreateDir { .. }));
    }
}

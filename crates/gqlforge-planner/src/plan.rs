use std::path::{Path, PathBuf};

use gqlforge_config::GenerationConfig;
use gqlforge_core::{Entity, Operation, ResolverMetadata};
use gqlforge_exporter::InputVariants;
use gqlforge_naming::{ArtifactFamily, ArtifactKind, GENERATED_DIR, MODELS_DIR, Naming, SOURCE_EXTENSION};

use crate::flags::ArtifactFlags;

/// Everything to generate for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityPlan {
    /// The entity, with its name already singularized.
    pub entity: Entity,
    /// Cased, singular file stem shared by all artifacts.
    pub base_name: String,
    pub model_dir: PathBuf,
    pub generated_dir: PathBuf,
    /// Artifacts in emission order.
    pub artifacts: Vec<ArtifactKind>,
    pub input: InputVariants,
}

impl EntityPlan {
    pub fn dir_for(&self, kind: ArtifactKind) -> &Path {
        match kind.family() {
            ArtifactFamily::Models => &self.model_dir,
            ArtifactFamily::Generated => &self.generated_dir,
        }
    }

    /// `<dir>/<base><suffix>.ts`
    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        self.dir_for(kind).join(format!(
            "{}.{}",
            kind.module_name(&self.base_name),
            SOURCE_EXTENSION
        ))
    }

    pub fn includes(&self, kind: ArtifactKind) -> bool {
        self.artifacts.contains(&kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub root: PathBuf,
    /// Parent of the per-entity model directories (`root` itself with `noConfigs`).
    pub models_root: PathBuf,
    pub generated_root: PathBuf,
    pub entities: Vec<EntityPlan>,
}

impl GenerationPlan {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn artifact_count(&self) -> usize {
        self.entities.iter().map(|e| e.artifacts.len()).sum()
    }
}

/// Decide which artifacts an entity gets.
///
/// Without flags, or with `graphqlFiles`, every artifact is produced. Otherwise the
/// model, object type and resolver follow their flag. Declared LIST adds filter and
/// sort unless either is selected explicitly; declared CREATE/UPDATE add the matching
/// input unless filter, sort or input is selected explicitly.
pub fn select_artifacts(
    entity_name: &str,
    flags: Option<&ArtifactFlags>,
    config: &GenerationConfig,
    metadata: &dyn ResolverMetadata,
) -> (Vec<ArtifactKind>, InputVariants) {
    let flags = match flags {
        Some(flags) if !config.ignore_metadata() => flags,
        _ => return (ArtifactKind::ALL.to_vec(), InputVariants::BOTH),
    };

    let supports = |op: Operation| metadata.supports_operation(entity_name, op);
    let list_gated = !(flags.filter || flags.sort);
    let write_gated = list_gated && !flags.input;
    let list = list_gated && supports(Operation::List);

    let input = if flags.input {
        InputVariants::BOTH
    } else {
        InputVariants {
            create: write_gated && supports(Operation::Create),
            update: write_gated && supports(Operation::Update),
        }
    };

    let selected = [
        (ArtifactKind::Model, flags.model),
        (ArtifactKind::ObjectType, flags.object_type),
        (ArtifactKind::Filter, flags.filter || list),
        (ArtifactKind::Sort, flags.sort || list),
        (ArtifactKind::Input, input.any()),
        (ArtifactKind::Resolver, flags.resolver),
    ];
    let artifacts = selected
        .into_iter()
        .filter_map(|(kind, on)| on.then_some(kind))
        .collect();
    (artifacts, input)
}

/// Plan a generation run. Entities are planned independently, in order.
pub fn plan(
    entities: Vec<Entity>,
    flags: Option<&ArtifactFlags>,
    config: &GenerationConfig,
    metadata: &dyn ResolverMetadata,
) -> GenerationPlan {
    let naming = Naming::from_config(config);
    let root = config.results_path().to_path_buf();
    let models_root = if config.no_configs {
        root.clone()
    } else {
        root.join(MODELS_DIR)
    };
    let generated_root = root.join(GENERATED_DIR);

    let entities = entities
        .into_iter()
        .map(|mut entity| {
            let base_name = naming.file_name(&entity.name);
            entity.singularize_name();
            let (artifacts, input) = select_artifacts(&entity.name, flags, config, metadata);
            EntityPlan {
                model_dir: models_root.join(&base_name),
                generated_dir: generated_root.join(&base_name),
                base_name,
                entity,
                artifacts,
                input,
            }
        })
        .collect();

    GenerationPlan {
        root,
        models_root,
        generated_root,
        entities,
    }
}

//! Naming conventions for gqlforge generated sources.
//!
//! Generated files import each other by file stem and by class name, so every name
//! the generator prints goes through this crate: case conversion, English
//! singularization, the fixed type-name suffixes, and the artifact file suffixes.

pub mod artifact;
pub mod case;
pub mod inflect;
pub mod naming;

pub use artifact::{
    ArtifactFamily, ArtifactKind, CREATE_INPUT_SUFFIX, FILTERS_SUFFIX, GENERATED_DIR, MODELS_DIR,
    OBJECT_TYPE_SUFFIX, RESOLVER_SUFFIX, SORTS_SUFFIX, SOURCE_EXTENSION, UPDATE_INPUT_SUFFIX,
};
pub use case::{NamePurpose, convert_case, derive_name};
pub use inflect::{pluralize, singularize};
pub use naming::Naming;

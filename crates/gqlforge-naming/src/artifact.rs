//! File and type naming contract shared by every generated artifact.
//!
//! Generated files reference each other through these literals (`../user/user.filter`,
//! `UserFilters`, ...). Changing any of them breaks previously generated trees, so they
//! are treated like a wire format.

use std::fmt;

/// Directory (under the results root) holding model and object-type files.
pub const MODELS_DIR: &str = "models";
/// Directory (under the results root) holding filter, sort, input and resolver files.
pub const GENERATED_DIR: &str = "_generated";
/// Extension of every generated source file.
pub const SOURCE_EXTENSION: &str = "ts";

pub const OBJECT_TYPE_SUFFIX: &str = "OT";
pub const FILTERS_SUFFIX: &str = "Filters";
pub const SORTS_SUFFIX: &str = "Sorts";
pub const CREATE_INPUT_SUFFIX: &str = "CreateInput";
pub const UPDATE_INPUT_SUFFIX: &str = "UpdateInput";
pub const RESOLVER_SUFFIX: &str = "Resolver";

/// The kinds of file emitted per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    Model,
    ObjectType,
    Filter,
    Sort,
    Input,
    Resolver,
}

/// Which top-level directory an artifact lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFamily {
    Models,
    Generated,
}

impl ArtifactFamily {
    pub fn dir_name(self) -> &'static str {
        match self {
            ArtifactFamily::Models => MODELS_DIR,
            ArtifactFamily::Generated => GENERATED_DIR,
        }
    }
}

impl ArtifactKind {
    /// Emission order within one entity.
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::Model,
        ArtifactKind::ObjectType,
        ArtifactKind::Filter,
        ArtifactKind::Sort,
        ArtifactKind::Input,
        ArtifactKind::Resolver,
    ];

    /// Literal appended to the base file name, before the extension.
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Model => ".model",
            ArtifactKind::ObjectType => ".ot",
            ArtifactKind::Filter => ".filter",
            ArtifactKind::Sort => ".sort",
            ArtifactKind::Input => ".input",
            ArtifactKind::Resolver => ".resolver",
        }
    }

    pub fn family(self) -> ArtifactFamily {
        match self {
            ArtifactKind::Model | ArtifactKind::ObjectType => ArtifactFamily::Models,
            ArtifactKind::Filter
            | ArtifactKind::Sort
            | ArtifactKind::Input
            | ArtifactKind::Resolver => ArtifactFamily::Generated,
        }
    }

    /// Module specifier used in import statements, e.g. `category.filter`.
    pub fn module_name(self, base: &str) -> String {
        format!("{}{}", base, self.suffix())
    }

    /// File name on disk, e.g. `category.filter.ts`.
    pub fn file_name(self, base: &str) -> String {
        format!("{}{}.{}", base, self.suffix(), SOURCE_EXTENSION)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArtifactKind::Model => "model",
            ArtifactKind::ObjectType => "object type",
            ArtifactKind::Filter => "filter",
            ArtifactKind::Sort => "sort",
            ArtifactKind::Input => "input",
            ArtifactKind::Resolver => "resolver",
        };
        f.write_str(label)
    }
}

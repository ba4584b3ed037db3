pub mod build;
pub mod error;
pub mod metadata;
pub mod model;
pub mod relation;
pub mod resolver;
pub mod type_map;

pub use build::{build_entities, build_entity};
pub use error::CoreError;
pub use metadata::{
    ColumnMetadata, DatabaseEngine, HostPrimitive, MetadataSnapshot, RawColumnType,
    RelationMetadata, TableMetadata,
};
pub use model::{Column, Entity, GenerationStrategy, ID_TYPE, Relation, RelationKind, ScalarType};
pub use relation::{RelationDescriptor, classify_relation};
pub use resolver::{
    DeclaredOperation, FieldPolicy, NoResolverMetadata, Operation, ResolverDecl,
    ResolverMetadata, ResolverRegistry,
};
pub use type_map::map_column_type;

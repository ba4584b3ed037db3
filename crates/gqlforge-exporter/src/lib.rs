//! Renderers that turn gqlforge `Entity` records into TypeScript sources: TypeORM
//! models plus type-graphql object types, filters, sorts, inputs and resolvers.

pub mod error;
pub mod format;
pub mod renderer;
pub mod type_graphql;
pub mod typeorm;

pub use error::{FormatError, RenderError};
pub use format::format_source;
pub use renderer::{ArtifactRenderer, InputVariants, RenderContext, render_artifact, renderer_for};
pub use type_graphql::{
    FilterRenderer, InputRenderer, ObjectTypeRenderer, RUNTIME_PACKAGE, ResolverRenderer,
    SortRenderer,
};
pub use typeorm::ModelRenderer;

pub mod error;
pub mod flags;
pub mod generate;
pub mod plan;

pub use error::GenerateError;
pub use flags::ArtifactFlags;
pub use generate::{FailedArtifact, GenerationReport, generate, write_plan};
pub use plan::{EntityPlan, GenerationPlan, plan, select_artifacts};

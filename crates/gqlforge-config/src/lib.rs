pub mod config;
pub mod export_type;
pub mod name_case;
pub mod style;

pub use config::{CONFIG_FILE_NAME, GenerationConfig};
pub use export_type::ExportType;
pub use name_case::{NameCase, UnknownNameCase};
pub use style::{EndOfLine, FormatOptions, PropertyVisibility, StrictMode};

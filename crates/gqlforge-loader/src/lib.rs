pub mod config;
pub mod snapshot;

pub use config::{load_config, load_config_from_path, load_config_or_default};
pub use snapshot::{load_snapshot, load_snapshot_from_path};

pub mod generate;
pub mod init;
pub mod list;
pub mod reverse;
pub mod schema;

pub use generate::{GenerateArgs, cmd_generate};
pub use init::cmd_init;
pub use list::cmd_list;
pub use reverse::cmd_reverse;
pub use schema::{SchemaKind, cmd_schema};

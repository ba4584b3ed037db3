use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;
use commands::{GenerateArgs, SchemaKind, cmd_generate, cmd_init, cmd_list, cmd_reverse, cmd_schema};
use utils::Overrides;

/// gqlforge command-line interface.
#[derive(Parser, Debug)]
#[command(name = "gqlforge", author, version, about)]
struct Cli {
    /// Write generated files under this directory instead of `resultsPath`.
    #[arg(long, global = true)]
    results_path: Option<PathBuf>,
    /// Read ORM metadata from this file or directory instead of `metadataPath`.
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,
    /// Generate every GraphQL artifact and ignore declared resolver operations.
    #[arg(long, global = true)]
    graphql_files: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize gqlforge.json with defaults.
    Init,
    /// Generate models and GraphQL CRUD files for selected entities.
    #[command(alias = "crud")]
    Generate(GenerateArgs),
    /// Generate models (and GraphQL files with --graphql-files) for every table.
    Reverse,
    /// List entities and their relations.
    #[command(alias = "l")]
    List,
    /// Print a JSON Schema.
    Schema {
        #[arg(long, value_enum, default_value_t = SchemaKind::Config)]
        kind: SchemaKind,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let overrides = Overrides {
        results_path: cli.results_path,
        snapshot: cli.snapshot,
        graphql_files: cli.graphql_files,
    };
    let interactive = std::io::stdin().is_terminal();

    match cli.command {
        Commands::Init => cmd_init(),
        Commands::Generate(args) => cmd_generate(args, &overrides, interactive),
        Commands::Reverse => cmd_reverse(&overrides),
        Commands::List => cmd_list(&overrides),
        Commands::Schema { kind } => cmd_schema(kind),
    }
}

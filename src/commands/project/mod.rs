mod cli_tests;
mod execute;
mod output;

pub use execute::ProjectResult;

use clap::Args;
use std::path::PathBuf;

/// Materialize instance rows into flat field mappings
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_project project Person -i people.json        # Project rows as Person
  schema_project project Person -i one.json -m sales  # Pick the model explicitly

The input file holds a single JSON object or an array of objects; each object
is one instance row of the given type.")]
pub struct ProjectCmd {
    /// Schema type name to project rows as
    pub type_name: String,

    /// Path to the instance JSON file (object or array of objects)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the schema JSON file
    #[arg(short, long, default_value = "./schema.json")]
    pub schema: PathBuf,

    /// Model id (required when the schema file declares several models)
    #[arg(short, long)]
    pub model: Option<String>,
}

mod execute;
mod execute_tests;
mod output;

pub use execute::{InspectResult, PropertyReport, TypeReport};

use clap::Args;
use std::path::PathBuf;

/// List the types of a schema model and how each property classifies
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_project inspect                          # All types of the sole model
  schema_project inspect -t Person                # One type
  schema_project inspect -m sales -s ./sales.json # Pick model and schema file")]
pub struct InspectCmd {
    /// Path to the schema JSON file
    #[arg(short, long, default_value = "./schema.json")]
    pub schema: PathBuf,

    /// Model id (required when the schema file declares several models)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Show only this type
    #[arg(short = 't', long = "type")]
    pub type_name: Option<String>,
}

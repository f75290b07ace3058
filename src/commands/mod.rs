//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` implementation producing a serializable result
//! - An `Outputable` implementation rendering the result as a table

mod inspect;
mod project;

pub use inspect::InspectCmd;
pub use project::ProjectCmd;

use clap::Subcommand;
use std::error::Error;
use std::sync::Arc;

use crate::output::{OutputFormat, Outputable};
use crate::schema::{SchemaModel, SchemaRegistry};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the types of a schema model with per-property classification
    Inspect(InspectCmd),

    /// Materialize instance rows into flat field mappings
    Project(ProjectCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Picks the model a command operates on: the one named with `--model`, or
/// the sole model of the file when the flag is omitted.
pub(crate) fn select_model(
    registry: &SchemaRegistry,
    requested: Option<&str>,
) -> Result<Arc<SchemaModel>, Box<dyn Error>> {
    match requested {
        Some(id) => Ok(registry.resolve(id)?),
        None => {
            let mut ids: Vec<_> = registry.model_ids().collect();
            if ids.len() == 1 {
                return Ok(registry.resolve(ids[0])?);
            }
            ids.sort_unstable();
            Err(format!(
                "Schema file declares {} models; pick one with --model (available: {})",
                ids.len(),
                ids.join(", ")
            )
            .into())
        }
    }
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Inspect(cmd) => {
                let result = cmd.execute()?;
                Ok(result.format(format))
            }
            Command::Project(cmd) => {
                let result = cmd.execute()?;
                Ok(result.format(format))
            }
            Command::Unknown(args) => {
                Err(format!("Unknown command: {}", args.first().unwrap_or(&String::new())).into())
            }
        }
    }
}

//! Export CLI command

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{SubtrackError, SubtrackResult};
use crate::export::{export_costs_csv, export_costs_json};
use crate::storage::Storage;

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format: json or csv
    #[arg(short, long, default_value = "json")]
    pub format: String,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> SubtrackResult<()> {
    let costs = storage.costs.list()?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .map_err(|e| SubtrackError::Export(format!("Failed to create output: {}", e)))?,
        ),
        None => Box::new(io::stdout()),
    };

    match args.format.to_lowercase().as_str() {
        "json" => export_costs_json(&costs, &mut writer)?,
        "csv" => export_costs_csv(&costs, &mut writer)?,
        other => {
            return Err(SubtrackError::Export(format!(
                "Unknown format '{}'. Expected: json, csv",
                other
            )))
        }
    }

    if let Some(path) = &args.output {
        eprintln!("Exported {} costs to {}", costs.len(), path.display());
    }

    Ok(())
}

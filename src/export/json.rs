//! JSON export
//!
//! Exports the cost collection with a small metadata envelope.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SubtrackError, SubtrackResult};
use crate::models::CostRecord;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Number of exported costs
    pub cost_count: usize,

    /// All cost records
    pub costs: Vec<CostRecord>,
}

impl CostExport {
    /// Build an export snapshot of the given collection
    pub fn new(costs: Vec<CostRecord>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            cost_count: costs.len(),
            costs,
        }
    }
}

/// Export all costs as pretty-printed JSON
pub fn export_costs_json<W: Write>(costs: &[CostRecord], writer: W) -> SubtrackResult<()> {
    let export = CostExport::new(costs.to_vec());
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| SubtrackError::Export(e.to_string()))?;
    Ok(())
}

//! Export module for subtrack
//!
//! Exports the cost collection in spreadsheet-compatible CSV or
//! machine-readable JSON.

pub mod csv;
pub mod json;

pub use self::csv::export_costs_csv;
pub use self::json::{export_costs_json, CostExport, EXPORT_SCHEMA_VERSION};

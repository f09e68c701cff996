//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod analyze;
pub mod cost;
pub mod dashboard;
pub mod export;

pub use analyze::handle_analyze_command;
pub use cost::{handle_cost_command, CostCommands};
pub use dashboard::handle_dashboard_command;
pub use export::{handle_export_command, ExportArgs};

//! Terminal output formatting
//!
//! Plain-text formatting helpers plus per-entity formatters. All functions
//! return strings; printing is left to the CLI handlers.

pub mod cost;
pub mod suggestion;
pub mod summary;

pub use cost::{format_cost_details, format_cost_list};
pub use suggestion::format_suggestions;
pub use summary::format_dashboard;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

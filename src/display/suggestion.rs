//! Suggestion formatting

use crate::models::{CostRecord, Suggestion};

use super::separator;

/// Format the suggestions returned for a cost
pub fn format_suggestions(cost: &CostRecord, suggestions: &[Suggestion]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Alternatives for {} ({}, {})\n",
        cost.name, cost.cost, cost.billing_cycle
    ));
    output.push_str(&format!("{}\n", separator(60)));

    if suggestions.is_empty() {
        output.push_str("No suggestions found.\n");
        return output;
    }

    for (i, suggestion) in suggestions.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} ({})\n",
            i + 1,
            suggestion.alternative_name,
            suggestion.estimated_cost
        ));
        output.push_str(&format!("   {}\n", suggestion.reason));
        if i < suggestions.len() - 1 {
            output.push('\n');
        }
    }

    output
}

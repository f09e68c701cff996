//! Dashboard formatting
//!
//! Renders the cost summary and the upcoming-renewals list for the terminal.
//! Rounding to two decimals happens here, at the presentation boundary.

use crate::models::CostRecord;
use crate::reports::{CostSummary, RENEWAL_WINDOW_DAYS};

use super::{format_bar, separator};

const BAR_WIDTH: usize = 24;

/// Format the dashboard: totals, category breakdown, upcoming renewals
pub fn format_dashboard(summary: &CostSummary, renewals: &[CostRecord]) -> String {
    let mut output = String::new();

    output.push_str("Dashboard\n");
    output.push_str(&format!("{}\n", separator(60)));
    output.push_str(&format!(
        "Total monthly cost:  {}\n",
        summary.total_monthly
    ));
    output.push_str(&format!("Total annual cost:   {}\n", summary.total_annual));
    output.push_str(&format!(
        "Upcoming renewals:   {} (next {} days)\n",
        renewals.len(),
        RENEWAL_WINDOW_DAYS
    ));

    output.push_str("\nCost breakdown by category (monthly)\n");
    output.push_str(&format!("{}\n", separator(60)));

    let chart = summary.chart_totals();
    if chart.is_empty() {
        output.push_str("Add a cost to see your breakdown.\n");
    } else {
        let label_width = chart
            .iter()
            .map(|t| t.category.label().len())
            .max()
            .unwrap_or(0);
        let max_total = chart
            .iter()
            .map(|t| t.monthly_total.amount())
            .fold(0.0_f64, f64::max);

        for total in &chart {
            output.push_str(&format!(
                "{:<label_width$}  {}  {:>10}\n",
                total.category.label(),
                format_bar(total.monthly_total.amount(), max_total, BAR_WIDTH),
                total.monthly_total.to_string()
            ));
        }
    }

    output.push_str("\nUpcoming renewals\n");
    output.push_str(&format!("{}\n", separator(60)));

    if renewals.is_empty() {
        output.push_str(&format!(
            "No renewals in the next {} days.\n",
            RENEWAL_WINDOW_DAYS
        ));
    } else {
        let name_width = renewals.iter().map(|c| c.name.len()).max().unwrap_or(0);
        for cost in renewals {
            output.push_str(&format!(
                "{:<name_width$}  {}  {:>10}\n",
                cost.name,
                cost.renewal_date,
                cost.cost.to_string()
            ));
        }
    }

    output
}

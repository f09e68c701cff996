//! Dashboard CLI command
//!
//! Renders the summary view: totals, category breakdown, and the costs
//! renewing in the next 30 days.

use chrono::Local;

use crate::display::format_dashboard;
use crate::error::SubtrackResult;
use crate::reports::{upcoming_renewals, CostSummary};
use crate::storage::Storage;

/// Handle the dashboard command
pub fn handle_dashboard_command(storage: &Storage) -> SubtrackResult<()> {
    let costs = storage.costs.list()?;

    let summary = CostSummary::generate(&costs);
    let today = Local::now().date_naive();
    let renewals = upcoming_renewals(&costs, today);

    print!("{}", format_dashboard(&summary, &renewals));
    Ok(())
}

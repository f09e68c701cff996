//! Upcoming renewals report
//!
//! Flags the costs whose renewal date falls within the next 30 calendar
//! days. Renewal dates are compared as plain calendar dates, never as
//! timezone-shifted instants.

use chrono::{Days, NaiveDate};

use crate::models::CostRecord;

/// Length of the renewal window in calendar days (inclusive on both ends)
pub const RENEWAL_WINDOW_DAYS: u64 = 30;

/// Costs renewing within `[today, today + 30 days]`, sorted ascending by
/// renewal date
///
/// The sort is stable, so costs renewing on the same day keep their original
/// collection order. Costs with an unparseable renewal date never qualify.
pub fn upcoming_renewals(costs: &[CostRecord], today: NaiveDate) -> Vec<CostRecord> {
    let horizon = today
        .checked_add_days(Days::new(RENEWAL_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming: Vec<(NaiveDate, CostRecord)> = costs
        .iter()
        .filter_map(|cost| {
            let day = cost.renewal_day()?;
            (day >= today && day <= horizon).then(|| (day, cost.clone()))
        })
        .collect();

    upcoming.sort_by_key(|(day, _)| *day);
    upcoming.into_iter().map(|(_, cost)| cost).collect()
}

//! Aggregation reports over the cost collection
//!
//! Everything in this module is pure: reports are recomputed from the
//! current collection on every call and take the reference date as an
//! explicit argument.

pub mod renewals;
pub mod summary;

pub use renewals::{upcoming_renewals, RENEWAL_WINDOW_DAYS};
pub use summary::{CategoryTotal, CostSummary};

//! Core data models for subtrack
//!
//! - `CostRecord`: one recurring subscription cost
//! - `Money`: USD amounts with presentation-boundary rounding
//! - `CostId`: opaque unique identifier
//! - `Suggestion`: ephemeral AI-generated alternative

pub mod cost;
pub mod ids;
pub mod money;
pub mod suggestion;

pub use cost::{BillingCycle, CostCategory, CostRecord, CostValidationError};
pub use ids::CostId;
pub use money::{Money, MoneyParseError};
pub use suggestion::Suggestion;

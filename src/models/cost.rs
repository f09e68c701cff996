//! Cost record model
//!
//! A cost record is one recurring subscription: a named service with a fixed
//! category, a USD amount, a billing cycle, and the next renewal date. The
//! serialized field names (`billingCycle`, `renewalDate`, ...) are the on-disk
//! format and must not change without a migration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::CostId;
use super::money::Money;

/// How often a cost is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingCycle {
    Monthly,
    Annually,
}

impl BillingCycle {
    /// Display label for this cycle
    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Annually => "Annually",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "annually" | "annual" | "yearly" | "year" | "a" | "y" => Ok(Self::Annually),
            other => Err(format!(
                "Unknown billing cycle '{}'. Expected: monthly, annually",
                other
            )),
        }
    }
}

/// Fixed set of cost categories
///
/// Serialized as the full display strings to match the stored format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    #[serde(rename = "Cloud Services")]
    Cloud,
    #[serde(rename = "Email & Marketing")]
    Marketing,
    #[serde(rename = "Domains & Hosting")]
    Domains,
    #[serde(rename = "Advertising")]
    Ads,
    #[serde(rename = "Office & Equipment")]
    Office,
    #[serde(rename = "Other")]
    Other,
}

impl CostCategory {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Cloud,
            Self::Marketing,
            Self::Domains,
            Self::Ads,
            Self::Office,
            Self::Other,
        ]
    }

    /// Display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cloud => "Cloud Services",
            Self::Marketing => "Email & Marketing",
            Self::Domains => "Domains & Hosting",
            Self::Ads => "Advertising",
            Self::Office => "Office & Equipment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CostCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "cloud services" | "cloud" => Ok(Self::Cloud),
            "email & marketing" | "marketing" | "email" => Ok(Self::Marketing),
            "domains & hosting" | "domains" | "hosting" => Ok(Self::Domains),
            "advertising" | "ads" => Ok(Self::Ads),
            "office & equipment" | "office" | "equipment" => Ok(Self::Office),
            "other" => Ok(Self::Other),
            other => Err(format!(
                "Unknown category '{}'. Expected one of: {}",
                other,
                Self::all()
                    .iter()
                    .map(|c| c.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// A recurring cost record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    /// Unique identifier
    pub id: CostId,

    /// Service name
    pub name: String,

    /// Cost category
    pub category: CostCategory,

    /// Billed amount in USD
    pub cost: Money,

    /// Billing cycle
    pub billing_cycle: BillingCycle,

    /// Next renewal date as a "YYYY-MM-DD" string
    ///
    /// Kept as the raw string so a record with a malformed date survives a
    /// load/save round trip; parsing happens on demand via [`renewal_day`].
    ///
    /// [`renewal_day`]: CostRecord::renewal_day
    pub renewal_date: String,
}

impl CostRecord {
    /// Create a new cost record with a freshly generated ID
    pub fn new(
        name: impl Into<String>,
        category: CostCategory,
        cost: Money,
        billing_cycle: BillingCycle,
        renewal_date: impl Into<String>,
    ) -> Self {
        Self {
            id: CostId::new(),
            name: name.into(),
            category,
            cost,
            billing_cycle,
            renewal_date: renewal_date.into(),
        }
    }

    /// Monthly-equivalent amount: annual costs are spread over 12 months,
    /// monthly costs pass through unchanged
    pub fn monthly_equivalent(&self) -> Money {
        match self.billing_cycle {
            BillingCycle::Annually => self.cost / 12.0,
            BillingCycle::Monthly => self.cost,
        }
    }

    /// Parse the renewal date as a plain calendar date
    ///
    /// The stored string is split into year/month/day components rather than
    /// being interpreted as an instant, so the result is the calendar day the
    /// user entered regardless of timezone. Returns `None` for a malformed
    /// date.
    pub fn renewal_day(&self) -> Option<NaiveDate> {
        let mut parts = self.renewal_date.split('-');
        let year: i32 = parts.next()?.parse().ok()?;
        let month: u32 = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), CostValidationError> {
        if self.name.trim().is_empty() {
            return Err(CostValidationError::EmptyName);
        }

        if self.cost.is_negative() {
            return Err(CostValidationError::NegativeAmount);
        }

        if self.renewal_day().is_none() {
            return Err(CostValidationError::MalformedDate(
                self.renewal_date.clone(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for CostRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for cost records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostValidationError {
    EmptyName,
    NegativeAmount,
    MalformedDate(String),
}

impl fmt::Display for CostValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Cost name cannot be empty"),
            Self::NegativeAmount => write!(f, "Cost amount cannot be negative"),
            Self::MalformedDate(s) => {
                write!(f, "Malformed renewal date '{}' (expected YYYY-MM-DD)", s)
            }
        }
    }
}

impl std::error::Error for CostValidationError {}

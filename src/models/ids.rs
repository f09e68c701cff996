//! Strongly-typed ID wrapper for cost records
//!
//! Using a newtype wrapper keeps cost identifiers opaque to callers and
//! prevents mixing them up with plain strings at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a cost record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostId(Uuid);

impl CostId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cost-{}", &self.0.to_string()[..8])
    }
}

impl FromStr for CostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Try to parse the full UUID
        if let Ok(uuid) = Uuid::parse_str(s) {
            return Ok(Self(uuid));
        }
        // Try stripping the display prefix
        let s = s.strip_prefix("cost-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

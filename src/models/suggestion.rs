//! Alternative-service suggestion model
//!
//! Suggestions are produced per analyze request and never persisted. The
//! serialized field names match the structured response schema the provider
//! is asked to fill.

use serde::{Deserialize, Serialize};

/// An AI-generated alternative to an existing cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Name of the alternative service
    pub alternative_name: String,

    /// Estimated cost as free-form display text (e.g. "$25/month")
    pub estimated_cost: String,

    /// Why this is a good alternative
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "alternativeName": "Fastmail",
            "estimatedCost": "$5/month",
            "reason": "Cheaper for small teams"
        }"#;

        let suggestion: Suggestion = serde_json::from_str(json).unwrap();
        assert_eq!(suggestion.alternative_name, "Fastmail");
        assert_eq!(suggestion.estimated_cost, "$5/month");

        let back = serde_json::to_value(&suggestion).unwrap();
        assert!(back.get("alternativeName").is_some());
        assert!(back.get("estimatedCost").is_some());
    }
}

//! AI suggestion collaborator
//!
//! Given one cost record, a provider returns up to three cheaper-alternative
//! suggestions or fails. Providers hold no per-request mutable state, so
//! independent requests can run concurrently. An empty suggestion list is a
//! successful outcome, distinct from every error variant.

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CostRecord, Suggestion};

/// Maximum number of suggestions returned per request
pub const MAX_SUGGESTIONS: usize = 3;

/// Errors from a suggestion request
#[derive(Error, Debug)]
pub enum SuggestError {
    /// The request never produced a response (connection, DNS, TLS, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The provider answered but the payload did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// A provider of alternative-service suggestions
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Request suggestions for one cost record
    ///
    /// Returns between zero and [`MAX_SUGGESTIONS`] suggestions. A single
    /// attempt is made; there is no retry or timeout policy.
    async fn suggest(&self, cost: &CostRecord) -> Result<Vec<Suggestion>, SuggestError>;
}

//! Gemini-backed suggestion provider
//!
//! Calls the Gemini `generateContent` endpoint with a JSON response schema so
//! the model answers with structured data instead of prose. The prompt
//! renders the cost's name, category, amount, and billing cycle into a short
//! natural-language request.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::settings::SuggestionSettings;
use crate::models::{BillingCycle, CostRecord, Suggestion};

use super::{SuggestError, SuggestionProvider, MAX_SUGGESTIONS};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Suggestion provider backed by the Gemini API
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    /// Create a client for the given model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Create a client from suggestion settings and a resolved API key
    pub fn from_settings(settings: &SuggestionSettings, api_key: impl Into<String>) -> Self {
        let mut client = Self::new(api_key, settings.model.clone());
        if let Some(base) = &settings.api_base {
            client.api_base = base.trim_end_matches('/').to_string();
        }
        client
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl SuggestionProvider for GeminiClient {
    async fn suggest(&self, cost: &CostRecord) -> Result<Vec<Suggestion>, SuggestError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(cost) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        });

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SuggestError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SuggestError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SuggestError::Api {
                status: status.as_u16(),
                message: text.chars().take(500).collect(),
            });
        }

        parse_response(&text)
    }
}

/// Render the cost into the natural-language prompt sent to the model
pub fn build_prompt(cost: &CostRecord) -> String {
    let per = match cost.billing_cycle {
        BillingCycle::Monthly => "per month",
        BillingCycle::Annually => "per year",
    };
    format!(
        "I am paying {} USD {} for a service called \"{}\" in the \"{}\" category. \
         Please suggest up to 3 alternative services that offer similar features for a \
         lower price for a small e-commerce business. For each alternative, provide its \
         name, an estimated monthly or annual price, and a brief reason why it's a good \
         alternative.",
        cost.cost.amount(),
        per,
        cost.name,
        cost.category
    )
}

/// JSON schema the model is asked to fill
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "suggestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "alternativeName": { "type": "STRING" },
                        "estimatedCost": { "type": "STRING" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["alternativeName", "estimatedCost", "reason"]
                }
            }
        }
    })
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct SuggestionList {
    #[serde(default)]
    suggestions: Vec<Suggestion>,
}

/// Parse the raw response body into suggestions
///
/// The model's structured answer arrives as JSON text inside the first
/// candidate part; that inner payload holds the `suggestions` array. A
/// present-but-empty array is a valid empty result, not an error. The list
/// is truncated to [`MAX_SUGGESTIONS`].
pub fn parse_response(body: &str) -> Result<Vec<Suggestion>, SuggestError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| SuggestError::Malformed(format!("invalid response envelope: {}", e)))?;

    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.trim())
        .ok_or_else(|| SuggestError::Malformed("response contains no candidates".into()))?;

    let list: SuggestionList = serde_json::from_str(text)
        .map_err(|e| SuggestError::Malformed(format!("invalid suggestion payload: {}", e)))?;

    let mut suggestions = list.suggestions;
    suggestions.truncate(MAX_SUGGESTIONS);
    Ok(suggestions)
}

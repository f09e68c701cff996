//! Analyze CLI command
//!
//! Runs the suggestion flow for one cost: builds the provider from settings,
//! performs the request, and renders the result. "No suggestions found" and
//! "request failed" are deliberately distinct outcomes.

use crate::config::Settings;
use crate::display::format_suggestions;
use crate::error::SubtrackResult;
use crate::services::CostService;
use crate::storage::Storage;
use crate::suggest::{GeminiClient, SuggestError, SuggestionProvider};

use super::cost::require_cost;

/// Handle the analyze command
pub fn handle_analyze_command(
    storage: &Storage,
    settings: &Settings,
    identifier: &str,
) -> SubtrackResult<()> {
    let service = CostService::new(storage);
    let record = require_cost(&service, identifier)?;

    let api_key = settings.suggestion_api_key()?;
    let client = GeminiClient::from_settings(&settings.suggestion, api_key);

    println!(
        "Looking for cheaper alternatives to '{}' ...",
        record.name
    );

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| crate::error::SubtrackError::Io(e.to_string()))?;

    match runtime.block_on(client.suggest(&record)) {
        Ok(suggestions) => {
            print!("{}", format_suggestions(&record, &suggestions));
        }
        Err(e) => {
            print_suggest_error(&e);
        }
    }

    Ok(())
}

/// Render a suggestion failure as a non-fatal, user-facing message
fn print_suggest_error(error: &SuggestError) {
    match error {
        SuggestError::Transport(msg) => {
            eprintln!("Could not reach the suggestion service: {}", msg);
        }
        SuggestError::Api { status, message } => {
            eprintln!(
                "The suggestion service rejected the request (status {}): {}",
                status, message
            );
        }
        SuggestError::Malformed(msg) => {
            eprintln!("The suggestion service returned an unusable answer: {}", msg);
        }
    }
    eprintln!("Please try again later.");
}

//! User settings for subtrack
//!
//! Manages user preferences and the suggestion-client configuration. The API
//! key itself is never written to the settings file; only the name of the
//! environment variable holding it is.

use serde::{Deserialize, Serialize};

use super::paths::SubtrackPaths;
use crate::error::SubtrackError;
use crate::storage::file_io::write_json_atomic;

/// Settings for the AI suggestion client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionSettings {
    /// Model used for suggestion requests
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Override for the API base URL (mainly for testing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            api_base: None,
        }
    }
}

/// User settings for subtrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Suggestion client configuration
    #[serde(default)]
    pub suggestion: SuggestionSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            suggestion: SuggestionSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating defaults if no settings file exists
    pub fn load_or_create(paths: &SubtrackPaths) -> Result<Self, SubtrackError> {
        let path = paths.settings_file();

        if !path.exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| SubtrackError::Config(format!("Failed to read settings: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| SubtrackError::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SubtrackPaths) -> Result<(), SubtrackError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolve the suggestion API key from the configured environment variable
    pub fn suggestion_api_key(&self) -> Result<String, SubtrackError> {
        std::env::var(&self.suggestion.api_key_env).map_err(|_| {
            SubtrackError::Config(format!(
                "Suggestion API key not set. Export {} with your API key.",
                self.suggestion.api_key_env
            ))
        })
    }
}

fn default_schema_version() -> u32 {
    1
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

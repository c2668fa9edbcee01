//! Gemini client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the Gemini client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key. `None` (or empty) means the model is unavailable and every
    /// dependent call returns a fixed fallback message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// API endpoint base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model to use for generation.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self::base_default().with_env_overrides()
    }
}

impl GeminiConfig {
    /// Base default without env overrides (used internally to avoid recursion).
    fn base_default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `GEMINI_API_KEY`: API credential
    /// - `GEMINI_ENDPOINT`: API base URL
    /// - `GEMINI_MODEL`: model name
    /// - `GEMINI_TIMEOUT_SECS`: request timeout
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("GEMINI_API_KEY") {
            if !val.is_empty() {
                self.api_key = Some(val);
            }
        }
        if let Ok(val) = std::env::var("GEMINI_ENDPOINT") {
            self.endpoint = val;
        }
        if let Ok(val) = std::env::var("GEMINI_MODEL") {
            self.model = val;
        }
        if let Ok(val) = std::env::var("GEMINI_TIMEOUT_SECS") {
            if let Ok(n) = val.parse() {
                self.timeout_secs = n;
            }
        }
        self
    }

    /// Whether a usable credential is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_by_default() {
        let config = GeminiConfig::base_default();
        assert!(!config.is_configured());
        assert!(config.endpoint.contains("generativelanguage"));
        assert_eq!(config.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_empty_key_is_unconfigured() {
        let config = GeminiConfig::base_default().with_api_key("");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_with_api_key() {
        let config = GeminiConfig::base_default().with_api_key("test-key");
        assert!(config.is_configured());
    }
}

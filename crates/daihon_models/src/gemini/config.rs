//! Gemini client settings.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for [`GeminiClient`](crate::GeminiClient).
///
/// Deserialized from the `[gemini]` section of `daihon.toml`; every field
/// has a default.
///
/// # Examples
///
/// ```
/// use daihon_models::GeminiConfig;
///
/// let config = GeminiConfig::default()
///     .with_model("gemini-1.5-pro")
///     .with_timeout_secs(30u64);
/// assert_eq!(
///     config.endpoint(),
///     "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-pro:generateContent"
/// );
/// assert_eq!(*config.timeout_secs(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(into, prefix = "with_")]
pub struct GeminiConfig {
    /// Model identifier
    model: String,
    /// REST API base URL, without trailing slash
    api_base: String,
    /// Sampling temperature; provider default when absent
    #[setters(strip_option)]
    temperature: Option<f32>,
    /// Output token limit; provider default when absent
    #[setters(strip_option)]
    max_output_tokens: Option<u32>,
    /// Whole-request HTTP timeout in seconds
    timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            temperature: None,
            max_output_tokens: None,
            timeout_secs: 120,
        }
    }
}

impl GeminiConfig {
    /// `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        self.endpoint_for(&self.model)
    }

    /// `generateContent` URL for an explicit model.
    pub fn endpoint_for(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            model
        )
    }
}

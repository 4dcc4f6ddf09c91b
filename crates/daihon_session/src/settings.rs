//! Per-session request settings.

use daihon_core::GenerateRequest;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Overrides applied to every request of a session.
///
/// Absent values leave the decision to the generator's own configuration.
///
/// # Examples
///
/// ```
/// use daihon_session::GenerationSettings;
///
/// let settings = GenerationSettings::builder()
///     .temperature(Some(0.8f32))
///     .build()
///     .unwrap();
/// let request = settings.request_for("プロンプト");
/// assert_eq!(request.temperature, Some(0.8));
/// assert_eq!(request.model, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into))]
pub struct GenerationSettings {
    /// Model identifier override
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Output token limit
    pub max_output_tokens: Option<u32>,
}

impl GenerationSettings {
    /// Creates a new settings builder.
    pub fn builder() -> GenerationSettingsBuilder {
        GenerationSettingsBuilder::default()
    }

    /// Request carrying `prompt` and these settings.
    pub fn request_for(&self, prompt: impl Into<String>) -> GenerateRequest {
        GenerateRequest {
            prompt: prompt.into(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

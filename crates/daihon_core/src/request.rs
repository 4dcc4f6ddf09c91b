//! Request and response types for text generation.

use crate::TokenUsage;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// One prompt sent to the generation API.
///
/// # Examples
///
/// ```
/// use daihon_core::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .prompt("あなたはプロの脚本家です。")
///     .temperature(Some(0.9f32))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt, "あなたはプロの脚本家です。");
/// assert_eq!(request.model, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Fully rendered prompt text
    pub prompt: String,
    /// Model identifier override
    #[builder(default)]
    pub model: Option<String>,
    /// Sampling temperature
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Maximum number of output tokens
    #[builder(default)]
    pub max_output_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Request carrying only a prompt.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

/// Normalized result of one generation call.
///
/// # Examples
///
/// ```
/// use daihon_core::{GenerateResponse, TokenUsage};
///
/// let response = GenerateResponse::new("こんにちは（修正）", Some(TokenUsage::total(42)));
/// assert_eq!(response.reported_tokens(), Some(42));
/// assert_eq!(GenerateResponse::new("text", None).reported_tokens(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text
    pub text: String,
    /// Token usage, when the provider reported it
    pub usage: Option<TokenUsage>,
}

impl GenerateResponse {
    /// Creates a response.
    pub fn new(text: impl Into<String>, usage: Option<TokenUsage>) -> Self {
        Self {
            text: text.into(),
            usage,
        }
    }

    /// Total tokens reported for the call, if any.
    pub fn reported_tokens(&self) -> Option<u64> {
        self.usage.map(|u| *u.total_tokens())
    }
}

//! Gemini `generateContent` data transfer objects.

use daihon_core::TokenUsage;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One text part of a content block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiPart {
    /// Text of the part; absent for non-text parts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl GeminiPart {
    /// Text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// A content block (one conversation turn).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiContent {
    /// `user` or `model`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Parts of the turn
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    /// A user turn holding a single text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![GeminiPart::from_text(text)],
        }
    }

    /// Concatenated text of every text part.
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .concat()
    }
}

/// Sampling settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Output token limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Creates a generation config.
    pub fn new(temperature: Option<f32>, max_output_tokens: Option<u32>) -> Self {
        Self {
            temperature,
            max_output_tokens,
        }
    }

    /// Whether no setting is present.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.max_output_tokens.is_none()
    }
}

/// Request body of `generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GeminiRequest {
    /// Conversation turns
    contents: Vec<GeminiContent>,
    /// Sampling settings
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GeminiRequest {
    /// Creates a new builder for `GeminiRequest`.
    pub fn builder() -> GeminiRequestBuilder {
        GeminiRequestBuilder::default()
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Generated content
    #[serde(default)]
    content: Option<GeminiContent>,
    /// Why generation stopped (e.g. `STOP`, `SAFETY`)
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Token counts reported by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    prompt_token_count: Option<u64>,
    /// Tokens across all candidates
    #[serde(default)]
    candidates_token_count: Option<u64>,
    /// Total tokens billed
    #[serde(default)]
    total_token_count: Option<u64>,
}

impl UsageMetadata {
    /// Normalized usage, or `None` when no count was reported.
    ///
    /// A missing total is derived from the prompt and candidate counts.
    pub fn to_usage(&self) -> Option<TokenUsage> {
        let total = self.total_token_count.or_else(|| {
            match (self.prompt_token_count, self.candidates_token_count) {
                (None, None) => None,
                (p, c) => Some(p.unwrap_or(0).saturating_add(c.unwrap_or(0))),
            }
        })?;
        Some(TokenUsage::from_parts(
            self.prompt_token_count,
            self.candidates_token_count,
            total,
        ))
    }
}

/// Response body of `generateContent`.
///
/// Usage metadata is kept as raw JSON so that a malformed block never fails
/// the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Generated candidates
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    /// Raw usage block
    #[serde(default)]
    usage_metadata: Option<serde_json::Value>,
}

impl GeminiResponse {
    /// Parsed usage, `None` when absent or malformed.
    pub fn usage(&self) -> Option<TokenUsage> {
        let raw = self.usage_metadata.as_ref()?;
        match serde_json::from_value::<UsageMetadata>(raw.clone()) {
            Ok(meta) => meta.to_usage(),
            Err(e) => {
                warn!(error = %e, "Ignoring malformed usage metadata");
                None
            }
        }
    }

    /// Text of the first candidate, if it has any.
    pub fn first_text(&self) -> Option<String> {
        let text = self.candidates.first()?.content.as_ref()?.joined_text();
        (!text.is_empty()).then_some(text)
    }
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeminiErrorBody {
    pub(crate) error: GeminiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeminiErrorDetail {
    #[serde(default)]
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) status: Option<String>,
}

//! Gemini REST client.

use super::dto::{GeminiContent, GeminiErrorBody, GeminiRequest, GeminiResponse, GenerationConfig};
use crate::{GeminiConfig, LlmMetrics, classify_error};
use async_trait::async_trait;
use daihon_core::{GenerateRequest, GenerateResponse};
use daihon_error::{
    ConfigError, CredentialError, CredentialErrorKind, DaihonResult, InvocationError,
    InvocationErrorKind,
};
use daihon_interface::TextGenerator;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, instrument};

const PROVIDER: &str = "gemini";

/// Google Gemini API client.
///
/// Makes one `generateContent` call per [`TextGenerator::generate`], with no
/// retry and no streaming.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key
    /// * `config` - Model and sampling settings
    ///
    /// # Errors
    ///
    /// `CredentialError::Missing` for a blank key, `ConfigError` when the
    /// HTTP client cannot be built.
    #[instrument(name = "gemini_client_new", skip(api_key, config), fields(model = %config.model()))]
    pub fn new(api_key: impl Into<String>, config: GeminiConfig) -> DaihonResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CredentialError::new(CredentialErrorKind::Missing).into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        debug!("Creating new Gemini client");
        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Converts a daihon request to a `generateContent` body.
    ///
    /// Per-request sampling settings override the configured ones.
    pub fn convert_request(&self, request: &GenerateRequest) -> DaihonResult<GeminiRequest> {
        let generation_config = GenerationConfig::new(
            request.temperature.or(*self.config.temperature()),
            request.max_output_tokens.or(*self.config.max_output_tokens()),
        );

        GeminiRequest::builder()
            .contents(vec![GeminiContent::user_text(&request.prompt)])
            .generation_config((!generation_config.is_empty()).then_some(generation_config))
            .build()
            .map_err(|e| {
                InvocationError::new(InvocationErrorKind::Request(format!(
                    "Failed to build request: {}",
                    e
                )))
                .into()
            })
    }

    /// Converts a `generateContent` body to a daihon response.
    ///
    /// Text is the concatenation of the first candidate's text parts. Usage
    /// is `None` when the block is absent or malformed.
    pub fn convert_response(response: &GeminiResponse) -> DaihonResult<GenerateResponse> {
        let Some(candidate) = response.candidates().first() else {
            return Err(InvocationError::new(InvocationErrorKind::MalformedResponse(
                "response has no candidates".to_string(),
            ))
            .into());
        };

        match response.first_text() {
            Some(text) => Ok(GenerateResponse::new(text, response.usage())),
            None => {
                let reason = candidate
                    .finish_reason()
                    .as_deref()
                    .unwrap_or("unknown")
                    .to_string();
                Err(InvocationError::new(InvocationErrorKind::MalformedResponse(format!(
                    "candidate has no text (finish reason: {})",
                    reason
                )))
                .into())
            }
        }
    }

    /// Sends a request body to the Gemini API.
    #[instrument(skip(self, body), fields(model = %model))]
    pub async fn generate_content(
        &self,
        model: &str,
        body: &GeminiRequest,
    ) -> DaihonResult<GeminiResponse> {
        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(self.config.endpoint_for(model))
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                InvocationError::new(InvocationErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(&body);
            error!(status = %status, message = %message, "Gemini API returned error");
            return Err(InvocationError::new(InvocationErrorKind::Http {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let raw = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read Gemini response body");
            InvocationError::new(InvocationErrorKind::Request(e.to_string()))
        })?;

        let parsed: GeminiResponse = serde_json::from_str(&raw).map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            InvocationError::new(InvocationErrorKind::MalformedResponse(e.to_string()))
        })?;

        debug!(candidates = parsed.candidates().len(), "Received response from Gemini");
        Ok(parsed)
    }

    async fn generate_once(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> DaihonResult<GenerateResponse> {
        let body = self.convert_request(request)?;
        let raw = self.generate_content(model, &body).await?;
        Self::convert_response(&raw)
    }
}

/// Human-readable message from an error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<GeminiErrorBody>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(status) => format!("{}: {}", status, parsed.error.message),
            None => parsed.error.message,
        },
        Err(_) => body.to_string(),
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, request), fields(prompt_chars = request.prompt.chars().count()))]
    async fn generate(&self, request: &GenerateRequest) -> DaihonResult<GenerateResponse> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.config.model().clone());
        let metrics = LlmMetrics::get();
        let started = Instant::now();

        let result = self.generate_once(&model, request).await;

        match &result {
            Ok(response) => {
                metrics.record_request(PROVIDER, &model, started.elapsed().as_secs_f64());
                if let Some(usage) = &response.usage {
                    metrics.record_tokens(&model, usage);
                }
                debug!(
                    chars = response.text.chars().count(),
                    tokens = ?response.reported_tokens(),
                    "Gemini generation complete"
                );
            }
            Err(e) => metrics.record_error(PROVIDER, &model, classify_error(e)),
        }

        result
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiClient {
        GeminiClient::new("test-key", GeminiConfig::default().with_temperature(0.7f32)).unwrap()
    }

    #[test]
    fn test_blank_key_is_missing_credential() {
        let err = GeminiClient::new("  ", GeminiConfig::default()).unwrap_err();
        assert!(err.is_credential());
    }

    #[test]
    fn test_request_override_wins() {
        let request = GenerateRequest::builder()
            .prompt("プロンプト")
            .temperature(Some(0.2f32))
            .max_output_tokens(Some(512u32))
            .build()
            .unwrap();
        let body = client().convert_request(&request).unwrap();
        let config = body.generation_config().unwrap();
        assert_eq!(*config.temperature(), Some(0.2));
        assert_eq!(*config.max_output_tokens(), Some(512));
    }

    #[test]
    fn test_no_generation_config_when_unset() {
        let client = GeminiClient::new("k", GeminiConfig::default()).unwrap();
        let body = client
            .convert_request(&GenerateRequest::from_prompt("p"))
            .unwrap();
        assert!(body.generation_config().is_none());
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("test-key"));
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            api_error_message(body),
            "RESOURCE_EXHAUSTED: Resource has been exhausted"
        );
        assert_eq!(api_error_message("gateway timeout"), "gateway timeout");
    }
}

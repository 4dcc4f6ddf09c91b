//! Metrics for generation API calls.
//!
//! OpenTelemetry instruments on the global meter. Without an installed meter
//! provider every recording is a no-op.

use daihon_core::TokenUsage;
use daihon_error::{DaihonError, DaihonErrorKind, InvocationErrorKind};
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<LlmMetrics> = OnceLock::new();

/// Instruments for generation calls, labeled by provider and model.
#[derive(Clone)]
pub struct LlmMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Successful generation calls
    pub requests: Counter<u64>,
    /// Failed generation calls
    pub errors: Counter<u64>,
    /// Call duration in seconds
    pub duration: Histogram<f64>,
    /// Total tokens reported
    pub tokens_used: Counter<u64>,
    /// Prompt tokens reported
    pub prompt_tokens: Counter<u64>,
    /// Completion tokens reported
    pub completion_tokens: Counter<u64>,
}

impl LlmMetrics {
    fn init() -> Self {
        let meter = global::meter("daihon_llm");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("llm.requests")
                .with_description("Successful generation calls")
                .build(),
            errors: meter
                .u64_counter("llm.errors")
                .with_description("Failed generation calls")
                .build(),
            duration: meter
                .f64_histogram("llm.duration")
                .with_unit("s")
                .with_description("Generation call duration")
                .build(),
            tokens_used: meter
                .u64_counter("llm.tokens")
                .with_description("Total tokens reported by the provider")
                .build(),
            prompt_tokens: meter
                .u64_counter("llm.tokens.prompt")
                .with_description("Prompt tokens reported by the provider")
                .build(),
            completion_tokens: meter
                .u64_counter("llm.tokens.completion")
                .with_description("Completion tokens reported by the provider")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful call.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed call.
    pub fn record_error(&self, provider: &str, model: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }

    /// Record reported token usage. Missing breakdowns are skipped.
    pub fn record_tokens(&self, model: &str, usage: &TokenUsage) {
        let labels = &[KeyValue::new("model", model.to_string())];
        self.tokens_used.add(*usage.total_tokens(), labels);
        if let Some(prompt) = usage.prompt_tokens() {
            self.prompt_tokens.add(*prompt, labels);
        }
        if let Some(completion) = usage.completion_tokens() {
            self.completion_tokens.add(*completion, labels);
        }
    }
}

impl Default for LlmMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}

/// Classify an error for metrics labeling.
///
/// Returns one of: "rate_limit", "auth", "network", "invalid_request",
/// "server", "malformed", "empty", "credential", "unknown".
pub fn classify_error(error: &DaihonError) -> &'static str {
    match error.kind() {
        DaihonErrorKind::Invocation(e) => match &e.kind {
            kind if kind.is_quota() => "rate_limit",
            kind if kind.is_auth() => "auth",
            InvocationErrorKind::Http { status_code, .. } if *status_code >= 500 => "server",
            InvocationErrorKind::Http { .. } => "invalid_request",
            InvocationErrorKind::Request(_) => "network",
            InvocationErrorKind::MalformedResponse(_) => "malformed",
            InvocationErrorKind::EmptyResponse => "empty",
        },
        DaihonErrorKind::Credential(_) => "credential",
        _ => "unknown",
    }
}

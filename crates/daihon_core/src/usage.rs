//! Token usage accounting.

use serde::{Deserialize, Serialize};

/// Token usage reported for a single generation call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct TokenUsage {
    /// Tokens in the prompt, when reported.
    prompt_tokens: Option<u64>,
    /// Tokens in the response, when reported.
    completion_tokens: Option<u64>,
    /// Total tokens billed for the call.
    total_tokens: u64,
}

impl TokenUsage {
    /// Usage with a prompt/completion breakdown.
    pub fn new(prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            prompt_tokens: Some(prompt_tokens),
            completion_tokens: Some(completion_tokens),
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }

    /// Usage known only as a total.
    pub fn total(total_tokens: u64) -> Self {
        Self {
            prompt_tokens: None,
            completion_tokens: None,
            total_tokens,
        }
    }

    /// Usage with every part supplied by the provider.
    pub fn from_parts(
        prompt_tokens: Option<u64>,
        completion_tokens: Option<u64>,
        total_tokens: u64,
    ) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
        }
    }
}

/// Per-call and cumulative token counters for a session.
///
/// The cumulative counter only grows; it goes back to zero only when the
/// session is reset.
///
/// # Examples
///
/// ```
/// use daihon_core::UsageCounters;
///
/// let mut counters = UsageCounters::default();
/// counters.record(10);
/// counters.record(15);
/// assert_eq!(*counters.last_call_tokens(), 15);
/// assert_eq!(*counters.cumulative_session_tokens(), 25);
/// assert_eq!(*counters.calls(), 2);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct UsageCounters {
    /// Tokens used by the most recent successful call.
    last_call_tokens: u64,
    /// Tokens used since the session started.
    cumulative_session_tokens: u64,
    /// Successful calls counted.
    calls: u64,
}

impl UsageCounters {
    /// Records one successful call.
    pub fn record(&mut self, tokens: u64) {
        self.last_call_tokens = tokens;
        self.cumulative_session_tokens = self.cumulative_session_tokens.saturating_add(tokens);
        self.calls += 1;
    }
}

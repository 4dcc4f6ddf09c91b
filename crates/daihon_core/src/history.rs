//! Generation history and replay records.

use crate::{Feature, FeatureParams};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Display format of history timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

/// One completed generation.
///
/// Created once per successful call and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationRecord {
    /// Position in the session history, starting at 1.
    sequence: usize,
    /// When the result arrived.
    timestamp: DateTime<Local>,
    /// Feature that produced the text.
    feature: Feature,
    /// Label shown in history listings.
    label: String,
    /// Generated text.
    text: String,
    /// Tokens reported for the call; `None` when the provider sent no usage.
    tokens: Option<u64>,
}

impl GenerationRecord {
    /// Creates a record.
    pub fn new(
        sequence: usize,
        timestamp: DateTime<Local>,
        feature: Feature,
        label: impl Into<String>,
        text: impl Into<String>,
        tokens: Option<u64>,
    ) -> Self {
        Self {
            sequence,
            timestamp,
            feature,
            label: label.into(),
            text: text.into(),
            tokens,
        }
    }

    /// Timestamp rendered for listings.
    pub fn display_time(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// First `max_chars` characters, with `...` appended when truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Local;
    /// use daihon_core::{Feature, GenerationRecord};
    ///
    /// let record = GenerationRecord::new(1, Local::now(), Feature::Plot, "プロット", "あいうえお", None);
    /// assert_eq!(record.preview(3), "あいう...");
    /// assert_eq!(record.preview(10), "あいうえお");
    /// ```
    pub fn preview(&self, max_chars: usize) -> String {
        match self.text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &self.text[..idx]),
            None => self.text.clone(),
        }
    }
}

/// What is needed to run the most recent generation again.
///
/// Holds data only, so it can be serialized and replayed without keeping
/// any closure or client around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ReplayState {
    /// Parameters of the attempted generation.
    params: FeatureParams,
    /// Label the generation was recorded under.
    label: String,
}

impl ReplayState {
    /// Creates a replay state.
    pub fn new(params: FeatureParams, label: impl Into<String>) -> Self {
        Self {
            params,
            label: label.into(),
        }
    }

    /// Feature of the stored parameters.
    pub fn feature(&self) -> Feature {
        self.params.feature()
    }
}

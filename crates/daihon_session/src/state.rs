//! Per-session mutable state.

use daihon_core::{Feature, GenerationRecord, ReplayState, TextStats, UsageCounters};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything a session remembers between user actions.
///
/// Starts empty: no current result, no history, no replay state and zero
/// counters. The current result is a pointer into the history, so clearing
/// it never loses a generation.
///
/// # Examples
///
/// ```
/// use chrono::Local;
/// use daihon_core::{Feature, GenerationRecord};
/// use daihon_session::SessionState;
///
/// let mut state = SessionState::new();
/// let record = GenerationRecord::new(state.next_sequence(), Local::now(), Feature::Plot, "プロット", "本文", Some(10));
/// state.append_history(record);
/// state.select_latest();
/// state.add_usage(10);
/// assert_eq!(state.current_text(), Some("本文"));
///
/// state.clear();
/// assert_eq!(state.current_text(), None);
/// assert_eq!(state.history().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    current: Option<usize>,
    history: Vec<GenerationRecord>,
    replay: Option<ReplayState>,
    usage: UsageCounters,
}

impl SessionState {
    /// Empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the initial empty state.
    pub fn reset(&mut self) {
        debug!(history = self.history.len(), "Resetting session state");
        *self = Self::default();
    }

    /// Appends a completed generation. History is never reordered.
    pub fn append_history(&mut self, record: GenerationRecord) {
        self.history.push(record);
    }

    /// Points the current result at the newest history entry.
    pub fn select_latest(&mut self) {
        self.current = self.history.len().checked_sub(1);
    }

    /// Overwrites the replay state.
    pub fn set_replay(&mut self, replay: ReplayState) {
        self.replay = Some(replay);
    }

    /// Clears the current result only; history is kept.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Counts one successful call.
    pub fn add_usage(&mut self, tokens: u64) {
        self.usage.record(tokens);
    }

    /// Sequence number the next history entry gets.
    pub fn next_sequence(&self) -> usize {
        self.history.len() + 1
    }

    /// Record shown as the current result.
    pub fn current(&self) -> Option<&GenerationRecord> {
        self.current.and_then(|i| self.history.get(i))
    }

    /// Text of the current result.
    pub fn current_text(&self) -> Option<&str> {
        self.current().map(|r| r.text().as_str())
    }

    /// Every generation in completion order.
    pub fn history(&self) -> &[GenerationRecord] {
        &self.history
    }

    /// Up to `n` most recent generations, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &GenerationRecord> {
        self.history.iter().rev().take(n)
    }

    /// Newest generation of a feature, e.g. the latest plot to turn into a
    /// script.
    pub fn latest_for(&self, feature: Feature) -> Option<&GenerationRecord> {
        self.history.iter().rev().find(|r| *r.feature() == feature)
    }

    /// State needed to regenerate.
    pub fn replay(&self) -> Option<&ReplayState> {
        self.replay.as_ref()
    }

    /// Token counters.
    pub fn usage(&self) -> &UsageCounters {
        &self.usage
    }

    /// Statistics of the current result.
    pub fn stats(&self) -> Option<TextStats> {
        self.current_text().map(TextStats::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use daihon_core::FeatureParams;

    fn record(state: &SessionState, feature: Feature, text: &str) -> GenerationRecord {
        GenerationRecord::new(
            state.next_sequence(),
            Local::now(),
            feature,
            feature.label(),
            text,
            None,
        )
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = SessionState::new();
        assert!(state.current().is_none());
        assert!(state.history().is_empty());
        assert!(state.replay().is_none());
        assert_eq!(*state.usage().cumulative_session_tokens(), 0);
        assert!(state.stats().is_none());
    }

    #[test]
    fn test_latest_for_and_recent() {
        let mut state = SessionState::new();
        for (feature, text) in [
            (Feature::Plot, "プロット1"),
            (Feature::Script, "台本"),
            (Feature::Plot, "プロット2"),
        ] {
            let r = record(&state, feature, text);
            state.append_history(r);
        }
        assert_eq!(
            state.latest_for(Feature::Plot).map(|r| r.text().as_str()),
            Some("プロット2")
        );
        assert!(state.latest_for(Feature::Critique).is_none());

        let recent: Vec<_> = state.recent(2).map(|r| *r.sequence()).collect();
        assert_eq!(recent, vec![3, 2]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = SessionState::new();
        let r = record(&state, Feature::Plot, "本文");
        state.append_history(r);
        state.select_latest();
        state.add_usage(5);
        state.set_replay(ReplayState::new(FeatureParams::empty(Feature::Plot), "プロット"));

        state.reset();
        assert_eq!(state, SessionState::new());
    }
}

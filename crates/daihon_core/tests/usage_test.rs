use chrono::{Local, TimeZone};
use daihon_core::{
    Feature, FeatureParams, GenerateResponse, GenerationRecord, ReplayState, TextStats, TokenUsage,
    UsageCounters,
};

#[test]
fn counters_start_at_zero() {
    let counters = UsageCounters::default();
    assert_eq!(*counters.last_call_tokens(), 0);
    assert_eq!(*counters.cumulative_session_tokens(), 0);
    assert_eq!(*counters.calls(), 0);
}

#[test]
fn zero_token_call_still_counts_as_call() {
    let mut counters = UsageCounters::default();
    counters.record(42);
    counters.record(0);
    assert_eq!(*counters.last_call_tokens(), 0);
    assert_eq!(*counters.cumulative_session_tokens(), 42);
    assert_eq!(*counters.calls(), 2);
}

#[test]
fn token_usage_breakdown_sums() {
    let usage = TokenUsage::new(30, 12);
    assert_eq!(*usage.total_tokens(), 42);
    assert_eq!(*usage.prompt_tokens(), Some(30));

    let response = GenerateResponse::new("ok", Some(usage));
    assert_eq!(response.reported_tokens(), Some(42));
}

#[test]
fn token_usage_total_saturates() {
    let usage = TokenUsage::new(u64::MAX, 1);
    assert_eq!(*usage.total_tokens(), u64::MAX);
}

#[test]
fn record_display_time_uses_slash_format() {
    let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap();
    let record = GenerationRecord::new(1, at, Feature::Script, "台本", "本文", Some(3));
    assert_eq!(record.display_time(), "2024/03/09 07:05");
    assert_eq!(*record.tokens(), Some(3));
}

#[test]
fn replay_state_reports_feature() {
    let replay = ReplayState::new(FeatureParams::empty(Feature::Critique), "講評");
    assert_eq!(replay.feature(), Feature::Critique);
    assert_eq!(replay.label(), "講評");
}

#[test]
fn stats_of_single_line() {
    let stats = TextStats::of("こんにちは（修正）");
    assert_eq!(*stats.characters(), 9);
    assert_eq!(*stats.lines(), 1);
    assert_eq!(*stats.paragraphs(), 1);
}

#[test]
fn stats_of_empty_text() {
    let stats = TextStats::of("");
    assert_eq!(*stats.characters(), 0);
    assert_eq!(*stats.lines(), 1);
    assert_eq!(*stats.paragraphs(), 0);
}

//! Core data types for daihon.
//!
//! This crate provides the data model shared by the template registry, the
//! generation client and the session store: feature tabs, option enums,
//! parameter records, request/response types, usage counters and the
//! history/replay records kept for a session.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod feature;
mod history;
mod options;
mod params;
mod record;
mod request;
mod stats;
mod usage;

pub use feature::Feature;
pub use history::{GenerationRecord, ReplayState, TIMESTAMP_FORMAT};
pub use options::{
    CheckLevel, Choice, CritiqueFocus, GenerationMode, Genre, PlotFormat, ScriptFormat,
    StoryboardFormat, ThreadStyle, VideoLength, Viewpoint,
};
pub use params::{
    CritiqueParams, FeatureParams, PlotParams, ProofreadParams, ScriptParams, StoryboardParams,
    ThemedVideoParams,
};
pub use record::{FieldValue, ParameterRecord};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use stats::TextStats;
pub use usage::{TokenUsage, UsageCounters};

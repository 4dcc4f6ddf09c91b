//! Daihon - prompt assembly and generation for story and script writing
//!
//! Daihon turns structured writing parameters (genre, protagonist, check
//! level, page count, ...) into Japanese prompts, sends them to Gemini and
//! keeps a session history with replay and token accounting.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use daihon::{Feature, GeminiFactory, GenerationSettings, ParameterRecord, Studio};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut studio = Studio::new(GeminiFactory::default(), GenerationSettings::default());
//!     studio.set_credential(&std::env::var("GEMINI_API_KEY")?).await?;
//!
//!     let record = ParameterRecord::new()
//!         .with("text", "今日はいい天気ですね。明日も晴れるでしょお。")
//!         .with("level", "basic");
//!     let result = studio.generate_from_record(Feature::Proofread, &record).await?;
//!     println!("{}", result.text());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `daihon_error` - Error types
//! - `daihon_core` - Parameters, records, usage counters
//! - `daihon_interface` - `TextGenerator` trait
//! - `daihon_prompts` - Template registry and prompt rendering
//! - `daihon_models` - Gemini client
//! - `daihon_session` - Session state, invoker and studio
//!
//! This crate re-exports everything for convenience and adds layered
//! configuration and logging setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;

pub use config::{DaihonConfig, SessionConfig};
pub use observability::{LoggingConfig, init_logging};

pub use daihon_core::*;
pub use daihon_error::*;
pub use daihon_interface::*;
pub use daihon_models::*;
pub use daihon_prompts::{NEW_WORK, TemplateInfo, TemplateRegistry, UNSET, render, validate};
pub use daihon_session::*;

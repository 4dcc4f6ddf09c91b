//! Prompt template registry for daihon.
//!
//! One pure template function per feature turns typed parameters into the
//! instruction text sent to the model. Templates never fail: an absent
//! optional field renders as its documented default (usually `未設定`).
//! Required fields are checked separately by [`validate`] before any call.
//!
//! # Examples
//!
//! ```
//! use daihon_core::{CheckLevel, FeatureParams, ProofreadParams};
//! use daihon_prompts::render;
//!
//! let params = FeatureParams::Proofread(
//!     ProofreadParams::default().text("こんにちわ").level(CheckLevel::Basic),
//! );
//! let prompt = render(&params);
//! assert!(prompt.contains("こんにちわ"));
//! assert!(prompt.contains(CheckLevel::Basic.instruction()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod critique;
mod layout;
pub mod plot;
pub mod proofread;
mod registry;
pub mod script;
pub mod storyboard;
mod validate;
pub mod video;

pub use layout::{NEW_WORK, UNSET};
pub use registry::{TemplateInfo, TemplateRegistry, render};
pub use validate::validate;

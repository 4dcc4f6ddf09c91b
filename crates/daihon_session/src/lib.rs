//! Session state and generation orchestration for daihon.
//!
//! - [`SessionState`] holds the current result, history, replay state and
//!   token counters of one session
//! - [`invoke`] runs one generation and records its outcome
//! - [`Studio`] ties a credential, a lazily built client and the state
//!   together, and turns every outcome into a user-facing [`Notice`]
//!
//! All mutation goes through `&mut`, so one session never has two
//! generations in flight.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod export;
mod invoke;
mod notice;
mod settings;
mod state;
mod studio;

pub use export::{EXPORT_TIMESTAMP_FORMAT, export_current, export_filename};
pub use invoke::invoke;
pub use notice::Notice;
pub use settings::{GenerationSettings, GenerationSettingsBuilder};
pub use state::SessionState;
pub use studio::{Studio, input_hint};

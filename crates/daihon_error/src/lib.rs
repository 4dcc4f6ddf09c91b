//! Error types for daihon.
//!
//! This crate provides the error taxonomy shared by every daihon crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The three conditions a user can run into during a session are:
//! - [`CredentialError`]: the API key is missing or was rejected
//! - [`InvocationError`]: the remote generation call failed or returned junk
//! - [`MissingInputError`]: a required field is empty, so no call is made
//!
//! # Examples
//!
//! ```
//! use daihon_error::{DaihonResult, MissingInputError, MissingInputErrorKind};
//!
//! fn check(theme: &str) -> DaihonResult<()> {
//!     if theme.trim().is_empty() {
//!         Err(MissingInputError::new(MissingInputErrorKind::Empty { field: "theme" }))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("").is_err());
//! assert!(check("同僚とのトラブル").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod credential;
mod error;
mod export;
mod input;
mod invocation;

pub use config::ConfigError;
pub use credential::{CredentialError, CredentialErrorKind};
pub use error::{DaihonError, DaihonErrorKind, DaihonResult};
pub use export::ExportError;
pub use input::{MissingInputError, MissingInputErrorKind};
pub use invocation::{InvocationError, InvocationErrorKind};

//! Trait definitions for daihon generation backends.
//!
//! The session layer talks to the remote model only through
//! [`TextGenerator`], and obtains one through a [`GeneratorFactory`] once the
//! user has entered an API key. Tests substitute stubs for both.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{GeneratorFactory, TextGenerator, VERIFY_PROMPT};

//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the daihon binary.

mod commands;
mod forms;
mod run;
mod studio;

pub use commands::{Cli, Commands};
pub use run::{list_templates, run_once};
pub use studio::{Console, run_studio};

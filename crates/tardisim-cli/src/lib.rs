//! # tardisim-cli
//!
//! Argument definitions and command handlers behind the `tardisim` binary.
//! Handlers return the text to print so they can be tested without a process.

pub mod args;
pub mod commands;
pub mod exit;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::execute;
pub use exit::error_message;

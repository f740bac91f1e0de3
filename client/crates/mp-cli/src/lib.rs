//! mp-cli library
//!
//! Command handlers for the `mp` binary, exported so tests can drive them
//! against an in-memory session.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod demo;
pub(crate) mod error;
pub(crate) mod handlers;
pub(crate) mod logger;
pub(crate) mod output;
pub(crate) mod theme_commands;
pub(crate) mod validate_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use handlers::{execute, execute_with};
pub use logger::initialize as initialize_logger;
pub use output::{format_json, render};
pub use theme_commands::ThemeCommands;
pub use validate_commands::ValidateCommands;

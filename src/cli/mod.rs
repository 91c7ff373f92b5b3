//! CLI layer: argument parsing, completion and command dispatch

pub mod args;
pub mod commands;
pub mod complete;
pub mod error;
pub mod output;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};

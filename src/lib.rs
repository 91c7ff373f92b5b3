//! Tag installed system packages with free-text labels.
//!
//! Tags live in a JSON file mapping package names to sorted tag lists.
//! Installation state and installs are delegated to the system package manager.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

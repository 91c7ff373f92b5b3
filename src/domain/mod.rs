//! Domain layer: the tag database and its rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod database;
pub mod error;

pub use database::TagDatabase;
pub use error::DomainError;

//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business rule violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Tagging is only allowed for packages the package manager reports as installed.
    #[error("{0} non è installato.")]
    NotInstalled(String),
}

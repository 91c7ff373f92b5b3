//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),

    /// Outcome already shown to the user; only the exit code is left.
    #[error("exit status {0}")]
    Reported(i32),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Reported(code) => *code,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(e) => match e {
                    ApplicationError::Domain(DomainError::NotInstalled(_)) => {
                        crate::exitcode::NOT_INSTALLED
                    }
                    ApplicationError::CorruptDatabase { .. } => crate::exitcode::DATAERR,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { source, .. } => {
                        if source.is::<std::io::Error>() {
                            crate::exitcode::IOERR
                        } else {
                            crate::exitcode::SOFTWARE
                        }
                    }
                },
            },
        }
    }

    /// Whether the user has already been told about this outcome.
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Reported(_))
    }
}

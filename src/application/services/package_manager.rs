//! Package manager adapter
//!
//! Delegates installation queries and installs to external commands taken
//! from configuration (`dpkg -s` and `sudo apt install -y` by default).
//! The package name is appended as the last argument.

use std::process::ExitStatus;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::PackageManagerConfig;
use crate::infrastructure::traits::CommandRunner;

/// Adapter around the system package manager.
pub struct PackageManager {
    cmd: Arc<dyn CommandRunner>,
    config: PackageManagerConfig,
}

impl PackageManager {
    pub fn new(cmd: Arc<dyn CommandRunner>, config: PackageManagerConfig) -> Self {
        Self { cmd, config }
    }

    /// Whether the package manager reports `package` as installed.
    ///
    /// True iff the query command exits with status zero. "Not found", tool
    /// errors and a command that cannot be spawned all count as not installed.
    pub fn is_installed(&self, package: &str) -> bool {
        let Some((program, args)) = command_line(&self.config.query_command, package) else {
            warn!("package_manager.query_command is empty, treating {package} as not installed");
            return false;
        };

        match self.cmd.run(program, &args) {
            Ok(output) => {
                debug!("is_installed: {program} {args:?} -> {}", output.status);
                output.status.success()
            }
            Err(e) => {
                debug!("is_installed: cannot run {program}: {e}");
                false
            }
        }
    }

    /// Install `package`, attached to the terminal so the tool may prompt.
    ///
    /// The outcome is reported but not judged: a failed or unstartable install
    /// is logged and the caller carries on. Only an empty configured command
    /// is an error.
    pub fn install(&self, package: &str) -> ApplicationResult<Option<ExitStatus>> {
        let (program, args) = command_line(&self.config.install_command, package).ok_or_else(
            || ApplicationError::Config {
                message: "package_manager.install_command is empty".to_string(),
            },
        )?;

        match self.cmd.run_interactive(program, &args) {
            Ok(status) => {
                if status.success() {
                    debug!("install: {program} {args:?} -> {status}");
                } else {
                    warn!("install of {package} exited with {status}");
                }
                Ok(Some(status))
            }
            Err(e) => {
                warn!("cannot run {program} to install {package}: {e}");
                Ok(None)
            }
        }
    }
}

/// Split a configured command into program and arguments, appending `package`.
fn command_line<'a>(command: &'a [String], package: &'a str) -> Option<(&'a str, Vec<&'a str>)> {
    let (program, prefix) = command.split_first()?;
    let mut args: Vec<&str> = prefix.iter().map(String::as_str).collect();
    args.push(package);
    Some((program.as_str(), args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_command_with_arguments_when_building_command_line_then_appends_package() {
        let command = vec!["sudo".to_string(), "apt".to_string(), "install".to_string()];

        let (program, args) = command_line(&command, "curl").unwrap();

        assert_eq!(program, "sudo");
        assert_eq!(args, vec!["apt", "install", "curl"]);
    }

    #[test]
    fn given_empty_command_when_building_command_line_then_none() {
        assert!(command_line(&[], "curl").is_none());
    }
}

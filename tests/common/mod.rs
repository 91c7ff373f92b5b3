//! Shared helpers for integration tests

#![allow(dead_code)]

use std::io;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};

use pkgtag::config::{PackageManagerConfig, Settings};
use pkgtag::infrastructure::traits::{CommandRunner, RealFileSystem};
use pkgtag::infrastructure::ServiceContainer;

/// Command runner that records invocations and answers with fixed outcomes.
#[derive(Debug, Default)]
pub struct FakeCommandRunner {
    /// Outcome of captured commands (installation queries)
    pub query_succeeds: bool,
    /// Outcome of interactive commands (installs)
    pub install_succeeds: bool,
    /// Simulate a program that cannot be started
    pub spawn_fails: bool,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeCommandRunner {
    pub fn installed() -> Self {
        Self {
            query_succeeds: true,
            install_succeeds: true,
            ..Self::default()
        }
    }

    pub fn not_installed() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            spawn_fails: true,
            ..Self::default()
        }
    }

    /// Every command line seen so far, program first.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, cmd: &str, args: &[&str]) -> io::Result<()> {
        let mut line = vec![cmd.to_string()];
        line.extend(args.iter().map(|a| a.to_string()));
        self.calls.lock().unwrap().push(line);
        if self.spawn_fails {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such program"));
        }
        Ok(())
    }
}

fn exit_status(success: bool) -> ExitStatus {
    // raw wait status: exit code lives in the high byte
    ExitStatus::from_raw(if success { 0 } else { 1 << 8 })
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        self.record(cmd, args)?;
        Ok(Output {
            status: exit_status(self.query_succeeds),
            stdout: Vec::new(),
            stderr: Vec::new(),
        })
    }

    fn run_interactive(&self, cmd: &str, args: &[&str]) -> io::Result<ExitStatus> {
        self.record(cmd, args)?;
        Ok(exit_status(self.install_succeeds))
    }
}

/// Settings pointing the database into `dir`, default package manager commands.
pub fn test_settings(dir: &Path) -> Settings {
    Settings {
        database_path: database_path(dir),
        package_manager: PackageManagerConfig::default(),
    }
}

pub fn database_path(dir: &Path) -> PathBuf {
    dir.join("data").join("pkg-tags.json")
}

/// Container with the real filesystem and the given fake runner.
pub fn container(dir: &Path, runner: Arc<FakeCommandRunner>) -> ServiceContainer {
    ServiceContainer::with_deps(test_settings(dir), Arc::new(RealFileSystem), runner)
}

//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{PackageManager, TagService, TagStore};
use crate::config::Settings;
use crate::infrastructure::traits::{CommandRunner, FileSystem, RealCommandRunner, RealFileSystem};

/// Container holding settings and the I/O boundary implementations.
///
/// Services are cheap to build and are created on demand.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(RealCommandRunner),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs, cmd }
    }

    /// Tag store bound to the configured database file.
    pub fn tag_store(&self) -> TagStore {
        TagStore::new(Arc::clone(&self.fs), self.settings.database_path.clone())
    }

    /// Package manager adapter using the configured commands.
    pub fn package_manager(&self) -> PackageManager {
        PackageManager::new(
            Arc::clone(&self.cmd),
            self.settings.package_manager.clone(),
        )
    }

    /// Service backing the CLI commands.
    pub fn tag_service(&self) -> TagService {
        TagService::new(self.tag_store(), self.package_manager())
    }
}

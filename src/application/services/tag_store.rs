//! Tag store: load/save lifecycle of the JSON tag database
//!
//! The whole database is read at the start of a command and written back in
//! full after a mutation. There is no locking: concurrent invocations race
//! and the last writer wins.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::TagDatabase;
use crate::infrastructure::traits::FileSystem;

/// Persistent tag database backed by a single JSON file.
pub struct TagStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl TagStore {
    /// Create a store for the database file at `path`.
    pub fn new(fs: Arc<dyn FileSystem>, path: PathBuf) -> Self {
        Self { fs, path }
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the database from disk.
    ///
    /// A missing file yields an empty database. An unreadable or malformed
    /// file is an error.
    pub fn load(&self) -> ApplicationResult<TagDatabase> {
        if !self.fs.exists(&self.path) {
            debug!("load: no database at {}, starting empty", self.path.display());
            return Ok(TagDatabase::new());
        }

        let content = self
            .fs
            .read_to_string(&self.path)
            .with_path_context("read tag database", &self.path)?;
        let db: TagDatabase =
            serde_json::from_str(&content).map_err(|source| ApplicationError::CorruptDatabase {
                path: self.path.clone(),
                source,
            })?;

        debug!("load: {} packages from {}", db.len(), self.path.display());
        Ok(db)
    }

    /// Write the full database, creating the parent directory if necessary.
    pub fn save(&self, db: &TagDatabase) -> ApplicationResult<()> {
        self.fs
            .ensure_parent(&self.path)
            .with_path_context("create database directory", &self.path)?;

        let mut content =
            serde_json::to_string_pretty(db).map_err(|e| ApplicationError::OperationFailed {
                context: format!("serialize tag database: {}", self.path.display()),
                source: Box::new(e),
            })?;
        content.push('\n');

        self.fs
            .write(&self.path, &content)
            .with_path_context("write tag database", &self.path)?;
        debug!("save: {} packages to {}", db.len(), self.path.display());
        Ok(())
    }
}

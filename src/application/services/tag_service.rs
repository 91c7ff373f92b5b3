//! Tag service: one use case per CLI command
//!
//! Each method loads the database fresh, applies a single change or query
//! and, when something changed, writes the database back. Nothing here
//! prints; callers decide how to present results.

use tracing::{debug, info};

use crate::application::services::{PackageManager, TagStore};
use crate::application::ApplicationResult;
use crate::domain::{DomainError, TagDatabase};

/// Use cases over the tag database and the package manager.
pub struct TagService {
    store: TagStore,
    package_manager: PackageManager,
}

impl TagService {
    pub fn new(store: TagStore, package_manager: PackageManager) -> Self {
        Self {
            store,
            package_manager,
        }
    }

    /// Install `package`, then record `tags` for it.
    ///
    /// Tags are recorded whatever the install outcome.
    pub fn install(&self, package: &str, tags: &[String]) -> ApplicationResult<Vec<String>> {
        let status = self.package_manager.install(package)?;
        debug!("install: {package} finished with {status:?}, recording tags regardless");
        self.record(package, tags)
    }

    /// Record `tags` for an already installed `package`.
    ///
    /// Fails with [`DomainError::NotInstalled`] without touching the database
    /// when the package manager does not know the package.
    pub fn tag(&self, package: &str, tags: &[String]) -> ApplicationResult<Vec<String>> {
        if !self.package_manager.is_installed(package) {
            return Err(DomainError::NotInstalled(package.to_string()).into());
        }
        self.record(package, tags)
    }

    /// Packages carrying `tag`, sorted.
    pub fn list(&self, tag: &str) -> ApplicationResult<Vec<String>> {
        Ok(self.store.load()?.packages_with_tag(tag))
    }

    /// Tags of `package`, `None` if it is not in the database.
    pub fn tags(&self, package: &str) -> ApplicationResult<Option<Vec<String>>> {
        Ok(self.store.load()?.tags_for(package))
    }

    /// Remove one tag from `package`. Returns whether anything changed.
    pub fn untag(&self, package: &str, tag: &str) -> ApplicationResult<bool> {
        self.mutate(|db| db.remove_tag(package, tag))
    }

    /// Forget `package` entirely. Returns whether anything changed.
    pub fn remove(&self, package: &str) -> ApplicationResult<bool> {
        self.mutate(|db| db.remove_package(package))
    }

    /// Known package names starting with `prefix`.
    pub fn known_packages(&self, prefix: &str) -> ApplicationResult<Vec<String>> {
        Ok(self
            .store
            .load()?
            .packages()
            .into_iter()
            .filter(|p| p.starts_with(prefix))
            .collect())
    }

    /// Known tags (across all packages) starting with `prefix`.
    pub fn known_tags(&self, prefix: &str) -> ApplicationResult<Vec<String>> {
        Ok(self
            .store
            .load()?
            .all_tags()
            .into_iter()
            .filter(|t| t.starts_with(prefix))
            .collect())
    }

    fn record(&self, package: &str, tags: &[String]) -> ApplicationResult<Vec<String>> {
        let mut db = self.store.load()?;
        db.add_tags(package, tags.iter().cloned());
        self.store.save(&db)?;

        let current = db.tags_for(package).unwrap_or_default();
        info!("{package}: {}", current.join(", "));
        Ok(current)
    }

    fn mutate(&self, change: impl FnOnce(&mut TagDatabase) -> bool) -> ApplicationResult<bool> {
        let mut db = self.store.load()?;
        let changed = change(&mut db);
        if changed {
            self.store.save(&db)?;
        } else {
            debug!("nothing to change, database left as is");
        }
        Ok(changed)
    }
}

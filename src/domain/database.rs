//! Tag database: package name to set of tags

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

type RawDatabase = BTreeMap<String, BTreeSet<String>>;

/// Mapping from package name to the tags assigned to it.
///
/// Keys and tags are ordered sets, so the JSON form always carries sorted,
/// duplicate-free arrays. A package is present only while it has at least
/// one tag; this holds for every mutation and for data read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDatabase", into = "RawDatabase")]
pub struct TagDatabase {
    packages: RawDatabase,
}

impl From<RawDatabase> for TagDatabase {
    fn from(mut packages: RawDatabase) -> Self {
        packages.retain(|_, tags| !tags.is_empty());
        Self { packages }
    }
}

impl From<TagDatabase> for RawDatabase {
    fn from(db: TagDatabase) -> Self {
        db.packages
    }
}

impl TagDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Number of tagged packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Merge `tags` into the tag set of `package`, creating the entry if needed.
    ///
    /// An empty `tags` sequence leaves the database untouched.
    pub fn add_tags<I, S>(&mut self, package: &str, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags = tags.into_iter().map(Into::<String>::into).peekable();
        if tags.peek().is_none() {
            return;
        }
        self.packages
            .entry(package.to_string())
            .or_default()
            .extend(tags);
    }

    /// Remove a single tag; drops the package once its last tag is gone.
    ///
    /// Returns `false` when the package or the tag was not present.
    pub fn remove_tag(&mut self, package: &str, tag: &str) -> bool {
        let Some(tags) = self.packages.get_mut(package) else {
            return false;
        };
        if !tags.remove(tag) {
            return false;
        }
        if tags.is_empty() {
            self.packages.remove(package);
        }
        true
    }

    /// Forget a package and all of its tags.
    pub fn remove_package(&mut self, package: &str) -> bool {
        self.packages.remove(package).is_some()
    }

    /// Sorted tags of `package`, `None` if it has no entry.
    pub fn tags_for(&self, package: &str) -> Option<Vec<String>> {
        self.packages
            .get(package)
            .map(|tags| tags.iter().cloned().collect())
    }

    /// Packages carrying `tag`, sorted by name.
    pub fn packages_with_tag(&self, tag: &str) -> Vec<String> {
        self.packages
            .iter()
            .filter(|(_, tags)| tags.contains(tag))
            .map(|(package, _)| package.clone())
            .collect()
    }

    /// All package names, sorted.
    pub fn packages(&self) -> Vec<String> {
        self.packages.keys().cloned().collect()
    }

    /// Union of the tag sets of all packages.
    pub fn all_tags(&self) -> BTreeSet<String> {
        self.packages.values().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn given_sequential_add_tags_then_stores_sorted_union() {
        let mut db = TagDatabase::new();

        db.add_tags("curl", ["net", "dev"]);
        db.add_tags("curl", ["dev", "cli", "net"]);

        assert_eq!(db.tags_for("curl"), Some(strings(&["cli", "dev", "net"])));
    }

    #[test]
    fn given_duplicate_tags_in_one_call_then_deduplicates() {
        let mut db = TagDatabase::new();

        db.add_tags("jq", ["json", "json", "cli"]);

        assert_eq!(db.tags_for("jq"), Some(strings(&["cli", "json"])));
    }

    #[test]
    fn given_no_tags_when_add_tags_then_no_entry_is_created() {
        let mut db = TagDatabase::new();

        db.add_tags("vim", Vec::<String>::new());

        assert!(db.is_empty());
        assert_eq!(db.tags_for("vim"), None);
    }

    #[test]
    fn given_last_tag_removed_then_package_disappears() {
        let mut db = TagDatabase::new();
        db.add_tags("curl", ["dev", "net"]);

        assert!(db.remove_tag("curl", "dev"));
        assert_eq!(db.tags_for("curl"), Some(strings(&["net"])));
        assert!(db.remove_tag("curl", "net"));

        assert_eq!(db.tags_for("curl"), None);
        assert!(db.packages_with_tag("net").is_empty());
        assert!(db.is_empty());
    }

    #[test]
    fn given_unknown_package_or_tag_when_remove_tag_then_noop() {
        let mut db = TagDatabase::new();
        db.add_tags("curl", ["dev"]);
        let before = db.clone();

        assert!(!db.remove_tag("wget", "dev"));
        assert!(!db.remove_tag("curl", "net"));

        assert_eq!(db, before);
    }

    #[test]
    fn given_package_when_remove_package_then_entry_is_gone() {
        let mut db = TagDatabase::new();
        db.add_tags("curl", ["dev"]);
        db.add_tags("git", ["dev"]);

        assert!(db.remove_package("curl"));
        assert!(!db.remove_package("curl"));

        assert_eq!(db.packages(), strings(&["git"]));
    }

    #[test]
    fn given_several_packages_when_packages_with_tag_then_exact_sorted_matches() {
        let mut db = TagDatabase::new();
        db.add_tags("wget", ["net"]);
        db.add_tags("curl", ["net", "dev"]);
        db.add_tags("gcc", ["dev"]);

        assert_eq!(db.packages_with_tag("net"), strings(&["curl", "wget"]));
        assert_eq!(db.packages_with_tag("dev"), strings(&["curl", "gcc"]));
        assert!(db.packages_with_tag("games").is_empty());
    }

    #[test]
    fn given_several_packages_when_all_tags_then_returns_union() {
        let mut db = TagDatabase::new();
        db.add_tags("curl", ["net", "dev"]);
        db.add_tags("gcc", ["dev", "build"]);

        let tags: Vec<_> = db.all_tags().into_iter().collect();

        assert_eq!(tags, strings(&["build", "dev", "net"]));
    }

    #[test]
    fn given_json_with_unsorted_and_empty_entries_when_deserialized_then_normalized() {
        let json = r#"{"curl": ["net", "dev", "net"], "ghost": []}"#;

        let db: TagDatabase = serde_json::from_str(json).unwrap();

        assert_eq!(db.packages(), strings(&["curl"]));
        assert_eq!(db.tags_for("curl"), Some(strings(&["dev", "net"])));
    }

    #[test]
    fn given_database_when_serialized_then_object_of_sorted_arrays() {
        let mut db = TagDatabase::new();
        db.add_tags("curl", ["net", "dev"]);

        let json = serde_json::to_string(&db).unwrap();

        assert_eq!(json, r#"{"curl":["dev","net"]}"#);
    }
}

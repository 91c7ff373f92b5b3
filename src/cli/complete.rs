//! Dynamic shell completion from the tag database
//!
//! Registered through `clap_complete`'s `CompleteEnv`, e.g.
//! `source <(COMPLETE=bash pkgtag)`. Completers only read the database and
//! yield no candidates on any error, so a broken setup never breaks the shell.
//!
//! The shell hands the words being completed after a `--` marker, e.g.
//! `pkgtag -- pkgtag --db custom.json tags c`; a `--db` among them selects
//! the database just as it would for the finished command.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap_complete::engine::CompletionCandidate;
use tracing::debug;

use crate::application::services::TagService;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::infrastructure::ServiceContainer;

/// Package names from the database matching the typed prefix.
pub fn complete_packages(current: &OsStr) -> Vec<CompletionCandidate> {
    complete_with(current, |service, prefix| service.known_packages(prefix))
}

/// Tags from all packages matching the typed prefix.
pub fn complete_tags(current: &OsStr) -> Vec<CompletionCandidate> {
    complete_with(current, |service, prefix| service.known_tags(prefix))
}

fn complete_with(
    current: &OsStr,
    query: impl FnOnce(&TagService, &str) -> ApplicationResult<Vec<String>>,
) -> Vec<CompletionCandidate> {
    let Some(prefix) = current.to_str() else {
        return Vec::new();
    };

    let result = Settings::load()
        .map(|settings| match database_override(std::env::args_os()) {
            Some(path) => settings.with_database_path(path),
            None => settings,
        })
        .map(|settings| ServiceContainer::new(settings).tag_service())
        .and_then(|service| query(&service, prefix));

    match result {
        Ok(values) => values.into_iter().map(CompletionCandidate::new).collect(),
        Err(e) => {
            debug!("completion unavailable: {e}");
            Vec::new()
        }
    }
}

/// Value of the last `--db` option among the completed command line words.
fn database_override<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = OsString>,
{
    let mut words = args.into_iter().skip_while(|a| a != "--").skip(1);
    let mut database = None;
    while let Some(word) = words.next() {
        if word == "--" {
            break;
        }
        if word == "--db" {
            database = words.next().map(PathBuf::from);
        } else if let Some(value) = word.to_str().and_then(|w| w.strip_prefix("--db=")) {
            database = Some(PathBuf::from(value));
        }
    }
    database
}

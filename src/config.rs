//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/pkgtag/pkgtag.toml`
//! 3. Environment variables: `PKGTAG_*` prefix, `__` for nesting
//! 4. `--db` on the command line (applied by the caller)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Name of the database file inside the user's local data directory.
pub const DATABASE_FILE_NAME: &str = "pkg-tags.json";

/// External commands used to talk to the package manager.
///
/// Each command is an argv prefix; the package name is appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PackageManagerConfig {
    /// Exits with status zero iff the package is installed
    pub query_command: Vec<String>,
    /// Installs the package, may prompt on the terminal
    pub install_command: Vec<String>,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            query_command: vec!["dpkg".into(), "-s".into()],
            install_command: vec!["sudo".into(), "apt".into(), "install".into(), "-y".into()],
        }
    }
}

/// Raw package manager config: `None` means "not specified, keep current".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawPackageManagerConfig {
    pub query_command: Option<Vec<String>>,
    pub install_command: Option<Vec<String>>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub database_path: Option<PathBuf>,
    pub package_manager: RawPackageManagerConfig,
}

/// Unified configuration for pkgtag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Tag database file (default: ~/.local/share/pkg-tags.json)
    pub database_path: PathBuf,
    /// Package manager commands
    pub package_manager: PackageManagerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            package_manager: PackageManagerConfig::default(),
        }
    }
}

/// Default database location in the user's local data directory.
fn default_database_path() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.data_local_dir().join(DATABASE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from("~/.local/share").join(DATABASE_FILE_NAME))
}

/// Get the XDG config directory for pkgtag.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pkgtag").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("pkgtag.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}`; unexpandable input is returned unchanged.
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Split a command line from an environment variable, honoring shell quoting.
fn parse_command(key: &str, value: &str) -> Result<Vec<String>, ApplicationError> {
    shell_words::split(value).map_err(|e| ApplicationError::Config {
        message: format!("{key}: {e}"),
    })
}

impl Settings {
    /// Load settings with layered precedence from the default global config location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `config_file` as the global config.
    ///
    /// A missing file is skipped; a file that cannot be parsed is an error.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Replace the database location (command line override).
    pub fn with_database_path(mut self, path: PathBuf) -> Self {
        self.database_path = path;
        self.expand_paths();
        self
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.database_path.to_string_lossy().as_ref());
        self.database_path = PathBuf::from(expanded);
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            database_path: overlay
                .database_path
                .clone()
                .unwrap_or_else(|| self.database_path.clone()),
            package_manager: PackageManagerConfig {
                query_command: overlay
                    .package_manager
                    .query_command
                    .clone()
                    .unwrap_or_else(|| self.package_manager.query_command.clone()),
                install_command: overlay
                    .package_manager
                    .install_command
                    .clone()
                    .unwrap_or_else(|| self.package_manager.install_command.clone()),
            },
        }
    }

    /// Apply PKGTAG_* environment variables as explicit overrides.
    ///
    /// Command lists are given as a single shell-quoted string, e.g.
    /// `PKGTAG_PACKAGE_MANAGER__INSTALL_COMMAND="sudo dnf install -y"`.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PKGTAG")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("database_path") {
            settings.database_path = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("package_manager.query_command") {
            settings.package_manager.query_command =
                parse_command("PKGTAG_PACKAGE_MANAGER__QUERY_COMMAND", &val)?;
        }
        if let Ok(val) = config.get_string("package_manager.install_command") {
            settings.package_manager.install_command =
                parse_command("PKGTAG_PACKAGE_MANAGER__INSTALL_COMMAND", &val)?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# pkgtag configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/pkgtag/pkgtag.toml
#   Env:    PKGTAG_* environment variables, e.g.
#           PKGTAG_DATABASE_PATH=~/tags.json
#           PKGTAG_PACKAGE_MANAGER__INSTALL_COMMAND="sudo dnf install -y"
#   CLI:    --db <path>

# Tag database file
# database_path = "~/.local/share/pkg-tags.json"

[package_manager]
# Command that exits 0 iff the package is installed (package name appended)
# query_command = ["dpkg", "-s"]

# Command that installs a package (package name appended)
# install_command = ["sudo", "apt", "install", "-y"]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

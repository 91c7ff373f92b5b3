//! Integration tests for Settings loading from a global config file.
//!
//! These tests point `load_from` at files in temp directories, so the
//! user's real config never takes part.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use pkgtag::application::ApplicationError;
use pkgtag::config::{PackageManagerConfig, Settings, DATABASE_FILE_NAME};

#[test]
fn given_no_config_file_when_load_then_uses_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("pkgtag.toml");

    // Act
    let settings = Settings::load_from(Some(&missing)).expect("load defaults");

    // Assert
    assert!(settings.database_path.ends_with(DATABASE_FILE_NAME));
    assert_eq!(settings.package_manager, PackageManagerConfig::default());
}

#[test]
fn given_config_file_when_load_then_overrides_specified_fields() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config_file = temp.path().join("pkgtag.toml");
    fs::write(
        &config_file,
        r#"
database_path = "/srv/tags/db.json"

[package_manager]
query_command = ["rpm", "-q"]
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(&config_file)).expect("load settings");

    // Assert
    assert_eq!(settings.database_path, PathBuf::from("/srv/tags/db.json"));
    assert_eq!(settings.package_manager.query_command, vec!["rpm", "-q"]);
    assert_eq!(
        settings.package_manager.install_command,
        PackageManagerConfig::default().install_command,
        "unspecified install_command keeps the default"
    );
}

#[test]
fn given_tilde_database_path_in_config_when_load_then_expanded() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config_file = temp.path().join("pkgtag.toml");
    fs::write(&config_file, r#"database_path = "~/tags.json""#).unwrap();

    // Act
    let settings = Settings::load_from(Some(&config_file)).expect("load settings");

    // Assert
    let home = std::env::var("HOME").expect("HOME should be set");
    assert_eq!(settings.database_path, PathBuf::from(home).join("tags.json"));
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config_file = temp.path().join("pkgtag.toml");
    fs::write(&config_file, "database_path = [").unwrap();

    // Act
    let result = Settings::load_from(Some(&config_file));

    // Assert
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_template_when_parsed_then_is_valid_config() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config_file = temp.path().join("pkgtag.toml");
    fs::write(&config_file, Settings::template()).unwrap();

    // Act
    let settings = Settings::load_from(Some(&config_file)).expect("template must parse");

    // Assert
    assert_eq!(settings.package_manager, PackageManagerConfig::default());
}

#[test]
fn given_cli_override_when_with_database_path_then_replaces_and_expands() {
    let settings = Settings::default().with_database_path(PathBuf::from("~/other.json"));

    let home = std::env::var("HOME").expect("HOME should be set");
    assert_eq!(settings.database_path, PathBuf::from(home).join("other.json"));
}

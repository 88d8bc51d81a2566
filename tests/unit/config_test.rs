//! Tests for the persisted config file

use tempfile::TempDir;
use trello::config::{Config, ConfigError};
use trello::paths;

fn profile() -> Config {
    Config {
        api_key: "0123456789abcdef".to_string(),
        api_token: "fedcba9876543210fedcba".to_string(),
        member_id: Some("m1".to_string()),
        full_name: Some("Ada Lovelace".to_string()),
        username: Some("ada".to_string()),
    }
}

#[test]
fn save_then_load_restores_everything() {
    let dir = TempDir::new().unwrap();
    let path = paths::config_file_in(dir.path());

    profile().save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();

    assert_eq!(loaded, profile());
    assert!(loaded.has_credentials());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = paths::config_file_in(&dir.path().join("nested").join("trello"));

    profile().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn missing_file_loads_as_default() {
    let dir = TempDir::new().unwrap();
    let loaded = Config::load_from(&paths::config_file_in(dir.path())).unwrap();

    assert_eq!(loaded, Config::default());
    assert!(!loaded.has_credentials());
}

#[test]
fn absent_profile_fields_are_not_written() {
    let dir = TempDir::new().unwrap();
    let path = paths::config_file_in(dir.path());
    let config = Config {
        api_key: "key".to_string(),
        api_token: "token".to_string(),
        ..Config::default()
    };

    config.save_to(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("\"api_key\": \"key\""));
    assert!(!content.contains("member_id"));
    assert!(!content.contains("username"));
}

#[test]
fn invalid_json_is_a_parse_error_naming_the_file() {
    let dir = TempDir::new().unwrap();
    let path = paths::config_file_in(dir.path());
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("parsing "));
    assert!(err.to_string().contains("config.json"));
}

#[test]
fn clear_removes_the_file() {
    let dir = TempDir::new().unwrap();
    let path = paths::config_file_in(dir.path());
    profile().save_to(&path).unwrap();

    Config::clear_at(&path).unwrap();
    assert!(!path.exists());
}

#[test]
fn clear_of_missing_file_succeeds() {
    let dir = TempDir::new().unwrap();
    Config::clear_at(&paths::config_file_in(dir.path())).unwrap();
}

#[cfg(unix)]
#[test]
fn saved_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = paths::config_file_in(dir.path());
    profile().save_to(&path).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn resave_tightens_existing_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = paths::config_file_in(dir.path());
    std::fs::write(&path, "{}").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    profile().save_to(&path).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

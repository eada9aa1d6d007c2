use tempfile::tempdir;

use crate::config::{load_config_from, resolve_api_token, save_config_to, Config};
use crate::error::MondayError;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        api_token: Some("token".to_string()),
        api_version: Some("2024-01".to_string()),
        default_board_id: Some("42".to_string()),
    };
    save_config_to(&config, &path).unwrap();

    assert_eq!(load_config_from(&path).unwrap(), config);
}

#[test]
fn test_missing_file_gives_default() {
    let dir = tempdir().unwrap();

    let config = load_config_from(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_missing_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "api_token": "abc" }"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.api_token.as_deref(), Some("abc"));
    assert!(config.default_board_id.is_none());
}

#[test]
fn test_invalid_file_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(matches!(load_config_from(&path), Err(MondayError::ConfigError(_))));
}

#[test]
fn test_environment_token_wins() {
    let config = Config {
        api_token: Some("from-file".to_string()),
        ..Config::default()
    };

    assert_eq!(
        resolve_api_token(Some("from-env".to_string()), &config).as_deref(),
        Some("from-env")
    );
    assert_eq!(resolve_api_token(None, &config).as_deref(), Some("from-file"));
    assert_eq!(
        resolve_api_token(Some("  ".to_string()), &config).as_deref(),
        Some("from-file")
    );
    assert_eq!(resolve_api_token(None, &Config::default()), None);
}

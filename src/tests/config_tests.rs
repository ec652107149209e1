use std::fs;

use tempfile::tempdir;

use crate::config::{
    base_url_for_context, first_codespace_name, load_config_from, resolve_base_url_with,
    save_config_to, Config,
};
use crate::error::OctofitError;

#[test]
fn test_config_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        base_url: Some("https://octofit.example".to_string()),
        default_format: Some("cards".to_string()),
    };
    save_config_to(&config, &path).unwrap();

    assert_eq!(load_config_from(&path), config);
}

#[test]
fn test_missing_config_is_default() {
    let dir = tempdir().unwrap();
    let config = load_config_from(&dir.path().join("absent.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_unreadable_config_is_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ this is not json").unwrap();

    assert_eq!(load_config_from(&path), Config::default());
}

#[test]
fn test_empty_fields_are_not_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config_to(&Config::default(), &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim(), "{}");
}

#[test]
fn test_unknown_format_is_rejected() {
    let mut config = Config {
        base_url: None,
        default_format: Some("cards".to_string()),
    };

    match config.set_default_format("xml") {
        Err(OctofitError::ConfigError(msg)) => {
            assert!(msg.contains("xml"));
            assert!(!msg.contains("Configuration error"));
        }
        other => panic!("Expected ConfigError, got {:?}", other),
    }
    assert_eq!(config.default_format.as_deref(), Some("cards"));

    config.set_default_format("json").unwrap();
    assert_eq!(config.output_format(), Some("json"));
}

#[test]
fn test_unknown_saved_format_does_not_block_other_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"default_format": "yaml"}"#).unwrap();

    let mut config = load_config_from(&path);
    assert_eq!(config.output_format(), None);

    config.base_url = Some("http://backend.test".to_string());
    save_config_to(&config, &path).unwrap();

    let reloaded = load_config_from(&path);
    assert_eq!(reloaded.base_url.as_deref(), Some("http://backend.test"));
    assert_eq!(reloaded.default_format.as_deref(), Some("yaml"));
}

#[test]
fn test_output_format_ignores_unknown_values() {
    let config = Config {
        base_url: None,
        default_format: Some("yaml".to_string()),
    };
    assert_eq!(config.output_format(), None);

    let config = Config {
        base_url: None,
        default_format: Some("table".to_string()),
    };
    assert_eq!(config.output_format(), Some("table"));
}

#[test]
fn test_base_url_for_codespace() {
    assert_eq!(
        base_url_for_context(Some("abc123")),
        "https://abc123-8000.app.github.dev"
    );
}

#[test]
fn test_base_url_without_context() {
    assert_eq!(base_url_for_context(None), "http://localhost:8000");
    assert_eq!(base_url_for_context(Some("")), "http://localhost:8000");
}

#[test]
fn test_base_url_precedence() {
    let config = Config {
        base_url: Some("http://from-config:8000/".to_string()),
        default_format: None,
    };

    assert_eq!(
        resolve_base_url_with(Some("http://from-flag"), Some("http://from-env"), &config, Some("abc123")),
        "http://from-flag"
    );
    assert_eq!(
        resolve_base_url_with(None, Some("http://from-env/"), &config, Some("abc123")),
        "http://from-env"
    );
    assert_eq!(
        resolve_base_url_with(None, None, &config, Some("abc123")),
        "http://from-config:8000"
    );
    assert_eq!(
        resolve_base_url_with(None, None, &Config::default(), Some("abc123")),
        "https://abc123-8000.app.github.dev"
    );
}

#[test]
fn test_blank_override_falls_through() {
    assert_eq!(
        resolve_base_url_with(Some("  "), Some(""), &Config::default(), None),
        "http://localhost:8000"
    );
}

#[test]
fn test_codespace_name_order() {
    assert_eq!(
        first_codespace_name([Some("primary".to_string()), Some("fallback".to_string())]),
        Some("primary".to_string())
    );
    assert_eq!(
        first_codespace_name([None, Some("fallback".to_string())]),
        Some("fallback".to_string())
    );
}

#[test]
fn test_empty_codespace_name_is_unset() {
    assert_eq!(
        first_codespace_name([Some(String::new()), Some("fallback".to_string())]),
        Some("fallback".to_string())
    );
    assert_eq!(first_codespace_name([Some(String::new()), None]), None);
    assert_eq!(first_codespace_name(Vec::<Option<String>>::new()), None);
}

//! Tests for loading and saving `Config` files

use keypath::{Config, Error, config::ConfigError};
use serde_json::json;
use tempfile::TempDir;

use crate::helpers::tree;

#[test]
fn test_load_reads_file_and_records_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.json");
    std::fs::write(&path, r#"{"app": {"name": "demo", "ports": [80, 443]}}"#).unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.source(), Some(path.as_path()));
    assert_eq!(config.keys(), ["app.name", "app.ports.0", "app.ports.1"]);
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.json");

    let mut config = Config::default();
    config
        .set("db.mysql.port", 3306)
        .set("db.mysql.host", "127.0.0.1")
        .set("cache", tree(json!({})))
        .set("ports", tree(json!([80, 443])));
    config.save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.ends_with('\n'));
    assert!(text.contains("\"ports\": [\n"));

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.root(), config.root());
}

#[test]
fn test_save_keeps_large_unsigned_integers_exact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("limits.json");
    std::fs::write(
        &path,
        r#"{"limits": {"max": 18446744073709551615, "min": -9223372036854775808}, "drop": 1}"#,
    )
    .unwrap();

    // Edit an unrelated key and save, as `forget --write` does
    let mut config = Config::load(&path).unwrap();
    assert_eq!(config.forget("drop"), 1);
    config.save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("18446744073709551615"));
    assert!(!text.contains("e+19") && !text.contains("e19"));

    let reloaded = Config::load(&path).unwrap();
    assert_eq!(reloaded.get_as::<u64>("limits.max").unwrap(), Some(u64::MAX));
    assert_eq!(reloaded.get_as::<i64>("limits.min").unwrap(), Some(i64::MIN));
    assert_eq!(reloaded.root(), config.root());
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(dir.path().join("absent.json")).unwrap_err();

    assert!(err.is_io_error());
    assert!(!err.is_not_found());
    match err {
        Error::Config(ConfigError::ReadFailed { path, .. }) => assert!(path.ends_with("absent.json")),
        other => panic!("Expected ReadFailed, got {other:?}"),
    }
}

#[test]
fn test_load_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"app\": ").unwrap();

    let err = Config::load(&path).unwrap_err();

    match err {
        Error::Config(ConfigError::ParseFailed { path: origin, .. }) => {
            assert!(origin.ends_with("broken.json"))
        }
        other => panic!("Expected ParseFailed, got {other:?}"),
    }
}

#[test]
fn test_save_to_missing_directory() {
    let dir = TempDir::new().unwrap();
    let err = Config::default()
        .save(dir.path().join("no").join("such").join("dir.json"))
        .unwrap_err();

    assert!(err.is_io_error());
    assert!(matches!(err, Error::Config(ConfigError::WriteFailed { .. })));
}

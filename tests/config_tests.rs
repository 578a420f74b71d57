//! Integration tests for configuration loading

use booking::prelude::*;
use std::io::Write;

#[test]
fn test_load_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
backend:
  url: https://project.supabase.co
  api_key: anon-key
  table: hotel_bookings
"#
    )
    .unwrap();

    let config = BookingConfig::from_yaml_file(file.path()).unwrap();

    assert_eq!(config.backend.url, "https://project.supabase.co");
    assert_eq!(config.backend.api_key, "anon-key");
    assert_eq!(config.backend.table, "hotel_bookings");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = BookingConfig::from_yaml_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let err = BookingConfig::from_yaml_str("backend: [not, a, map]").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_backend_section_is_parse_error() {
    let err = BookingConfig::from_yaml_str("other: 1").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_yaml_serialization_round_trips() {
    let config = BookingConfig {
        backend: BackendConfig {
            url: "http://localhost:54321".to_string(),
            api_key: "key".to_string(),
            table: "bookings".to_string(),
        },
    };

    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed = BookingConfig::from_yaml_str(&yaml).unwrap();

    assert_eq!(parsed, config);
}

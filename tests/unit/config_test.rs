//! Tests for configuration validation

use std::collections::HashMap;

use parking_slots::config::{ConfigError, LotConfig};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_default_config_is_valid() {
    let config = LotConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.initial_slots, None);
    assert!(!config.log_mutations);
}

#[test]
fn test_config_invalid_initial_slots() {
    let invalid = LotConfig {
        initial_slots: Some(0),
        ..LotConfig::default()
    };
    assert!(matches!(invalid.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_config_dump_requires_logging() {
    let invalid = LotConfig {
        dump_slot_table: true,
        ..LotConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "initial_slots": 6,
        "log_mutations": true
    }"#;

    let config = LotConfig::from_json_str(json).unwrap();
    assert_eq!(config.initial_slots, Some(6));
    assert!(config.log_mutations);
    assert!(!config.dump_slot_table);
}

#[test]
fn test_config_from_json_rejects_garbage() {
    assert!(matches!(
        LotConfig::from_json_str("{ not json"),
        Err(ConfigError::Parse(_))
    ));
    assert!(LotConfig::from_json_str(r#"{ "initial_slots": 0 }"#).is_err());
}

#[test]
fn test_config_from_lookup() {
    let config = LotConfig::from_lookup(lookup(&[
        ("PARKING_INITIAL_SLOTS", "12"),
        ("PARKING_LOG_MUTATIONS", "true"),
        ("PARKING_DUMP_SLOT_TABLE", "1"),
    ]))
    .unwrap();
    assert_eq!(
        config,
        LotConfig {
            initial_slots: Some(12),
            log_mutations: true,
            dump_slot_table: true,
        }
    );

    assert_eq!(LotConfig::from_lookup(lookup(&[])).unwrap(), LotConfig::default());
}

#[test]
fn test_config_from_lookup_bad_value() {
    let err = LotConfig::from_lookup(lookup(&[("PARKING_INITIAL_SLOTS", "many")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid value `many` for PARKING_INITIAL_SLOTS");
}

//! Integration tests for environment configuration.

use std::collections::HashMap;
use team_record_web::{AppConfig, BatchConfig};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = AppConfig::from_lookup(lookup(&[]));
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.batch, BatchConfig { extra_slots: 5 });
    assert!(config.credentials.is_none());
}

#[test]
fn values_are_read_from_lookup() {
    let config = AppConfig::from_lookup(lookup(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "9000"),
        ("STATS_SLOTS", "3"),
        ("RECORD_USER", "coach"),
        ("RECORD_PASSWORD", "secret"),
    ]));
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9000);
    assert_eq!(config.batch.extra_slots, 3);
    let credentials = config.credentials.unwrap();
    assert!(credentials.matches("coach", "secret"));
    assert!(!credentials.matches("coach", "wrong"));
}

#[test]
fn unparsable_values_fall_back_to_defaults() {
    let config = AppConfig::from_lookup(lookup(&[("PORT", "http"), ("STATS_SLOTS", "-1")]));
    assert_eq!(config.port, 8080);
    assert_eq!(config.batch.extra_slots, 5);
}

#[test]
fn password_without_user_uses_admin() {
    let config = AppConfig::from_lookup(lookup(&[("RECORD_PASSWORD", "secret")]));
    assert!(config.credentials.unwrap().matches("admin", "secret"));
}

#[test]
fn empty_password_leaves_writes_open() {
    let config = AppConfig::from_lookup(lookup(&[("RECORD_PASSWORD", "")]));
    assert!(config.credentials.is_none());
}

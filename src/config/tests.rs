//! Configuration tests
//!
//! Round-trip guards: every field written by `to_toml()` must parse back
//! into the same value. When you add a field, extend the round-trip test.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let config = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(config.theme, DEFAULT_THEME);
    assert_eq!(config.feed, FeedConfig::default());
    assert!(config.warnings.is_empty());
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.theme = "nord".to_string();
    config.feed.initial_visible = 3;
    config.feed.reveal_step = 1;
    config.feed.loading_delay_ms = 0;
    config.feed.visibility_threshold = 1.0;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_dir = PathBuf::from("/tmp/blogscope logs");
    config.logging.file_rotation = LogRotation::Never;

    let file = Config::parse_file_config(&config.to_toml()).expect("should parse");
    let parsed = Config::resolve(file, no_env);

    assert_eq!(parsed.theme, "nord");
    assert_eq!(parsed.feed, config.feed);
    assert_eq!(parsed.logging.level, "debug");
    assert!(parsed.logging.file_enabled);
    assert_eq!(parsed.logging.file_dir, PathBuf::from("/tmp/blogscope logs"));
    assert_eq!(parsed.logging.file_rotation, LogRotation::Never);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence and validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let file = Config::parse_file_config("").unwrap();
    let config = Config::resolve(file, no_env);
    assert_eq!(config.feed.initial_visible, 2);
    assert_eq!(config.feed.reveal_step, 2);
    assert_eq!(config.feed.loading_delay_ms, 1500);
    assert_eq!(config.logging.file_prefix, "blogscope");
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
theme = "light"

[feed]
loading_delay_ms = 900
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("BLOGSCOPE_THEME", "dracula"),
        ("BLOGSCOPE_LOADING_DELAY_MS", "25"),
    ]);
    let config = Config::resolve(file, env);

    assert_eq!(config.theme, "dracula");
    assert_eq!(config.feed.loading_delay_ms, 25);
}

#[test]
fn test_bad_env_delay_is_reported() {
    let env = env_from(&[("BLOGSCOPE_LOADING_DELAY_MS", "soon")]);
    let config = Config::resolve(FileConfig::default(), env);

    assert_eq!(config.feed.loading_delay_ms, 1500);
    assert_eq!(config.warnings.len(), 1);
}

#[test]
fn test_out_of_range_feed_values_are_clamped() {
    let file = Config::parse_file_config(
        r#"
[feed]
initial_visible = 0
reveal_step = 0
visibility_threshold = 1.5
"#,
    )
    .unwrap();
    let config = Config::resolve(file, no_env);

    assert_eq!(config.feed.initial_visible, 1);
    assert_eq!(config.feed.reveal_step, 1);
    assert_eq!(config.feed.visibility_threshold, 0.5);
    assert_eq!(config.warnings.len(), 3);
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(Config::parse_file_config("theme = ").is_err());
    assert!(Config::parse_file_config("[feed]\nreveal_step = \"two\"").is_err());
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}

#[test]
fn test_default_directive_scopes_to_crate() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.default_directive(), "blogscope=info");
}

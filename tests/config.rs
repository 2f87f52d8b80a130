//! Configuration system tests
//!
//! Tests for config paths and console config loading/saving.

use slidein::config::{ConsoleConfig, DEFAULT_CLOSE_DELAY_MS};
use slidein::config_paths;

// ========================================================================
// Console Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = ConsoleConfig::default();
    assert_eq!(config.close_delay_ms, DEFAULT_CLOSE_DELAY_MS);
    assert_eq!(config.close_delay_ms, 200);
    assert!(config.wide_panel_width > config.panel_width);
    assert_eq!(config.backdrop_color >> 24, 0x80);
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let config: ConsoleConfig = serde_yaml::from_str("close_delay_ms: 50\n").unwrap();
    assert_eq!(config.close_delay_ms, 50);
    assert_eq!(config.panel_width, ConsoleConfig::default().panel_width);
    assert_eq!(config.backdrop_color, ConsoleConfig::default().backdrop_color);
}

#[test]
fn test_empty_yaml_is_default() {
    let config: ConsoleConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config, ConsoleConfig::default());
}

#[test]
fn test_yaml_round_trip() {
    let config = ConsoleConfig {
        close_delay_ms: 120,
        panel_width: 520,
        wide_panel_width: 960,
        backdrop_color: 0x40102030,
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: ConsoleConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_under_config_dir() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

/// Everything touching XDG_CONFIG_HOME lives in one test so parallel
/// tests never observe a half-changed environment.
#[cfg(not(target_os = "windows"))]
#[test]
fn test_save_and_load_under_xdg_config_home() {
    let temp = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", temp.path());

    let dir = config_paths::config_dir().unwrap();
    assert_eq!(dir, temp.path().join("slidein"));

    // Missing file falls back to defaults
    assert_eq!(ConsoleConfig::load(), ConsoleConfig::default());

    let config = ConsoleConfig {
        close_delay_ms: 75,
        ..ConsoleConfig::default()
    };
    config.save().unwrap();
    assert!(dir.join("config.yaml").exists());
    assert_eq!(ConsoleConfig::load(), config);

    // Broken file falls back to defaults
    std::fs::write(dir.join("config.yaml"), "close_delay_ms: [nope").unwrap();
    assert_eq!(ConsoleConfig::load(), ConsoleConfig::default());

    let logs = config_paths::ensure_logs_dir().unwrap();
    assert!(logs.is_dir());
    assert_eq!(logs, dir.join("logs"));

    std::env::remove_var("XDG_CONFIG_HOME");
}

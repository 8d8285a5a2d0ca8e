// ==========================================
// 配置管理集成测试
// ==========================================
// 测试目标: 默认值、部分配置文件、覆写优先级、非法值
// ==========================================


use floorplan_feedback::config::{config_keys, AppConfig, ConfigError};
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;
use test_helpers::write_file;

fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.plans_dir, PathBuf::from("data/floorplans"));
    assert_eq!(config.mutation_probability, 0.3);
    assert_eq!(config.mutation_spread, 0.1);
    assert_eq!(config.open_plan_threshold, 2.5);
    assert!(config.region.is_none());
    assert!(config.seed.is_none());
    assert!(config.log_path.ends_with("feedback_log.jsonl"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "config.json",
        r#"{"region": "nigeria", "seed": 7, "mutation_probability": 0.5}"#,
    );

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.region.as_deref(), Some("nigeria"));
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.mutation_probability, 0.5);
    assert_eq!(config.mutation_spread, 0.1);
    assert_eq!(config.cost_table_path, PathBuf::from("knowledge/cost_table.json"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig::load(Some(temp_dir.path().join("absent.json").as_path())).unwrap();
    assert_eq!(config.mutation_probability, 0.3);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "config.json", "{ not json");
    assert!(matches!(
        AppConfig::from_file(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_overrides_win_over_file_values() {
    let mut config = AppConfig {
        region: Some("usa".to_string()),
        ..AppConfig::default()
    };
    config
        .apply_overrides(overrides(&[
            (config_keys::REGION, "india"),
            (config_keys::SEED, "123"),
            (config_keys::PLANS_DIR, "/srv/plans"),
            (config_keys::LOG_PATH, "  "),
        ]))
        .unwrap();

    assert_eq!(config.region.as_deref(), Some("india"));
    assert_eq!(config.seed, Some(123));
    assert_eq!(config.plans_dir, PathBuf::from("/srv/plans"));
    // 空白值不覆写
    assert_eq!(config.log_path, AppConfig::default().log_path);
}

#[test]
fn test_bad_seed_rejected() {
    let mut config = AppConfig::default();
    let err = config
        .apply_overrides(overrides(&[(config_keys::SEED, "forty-two")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValueError { ref key, .. } if key == config_keys::SEED));
}

#[test]
fn test_out_of_range_values_rejected() {
    let config = AppConfig {
        mutation_probability: 1.5,
        ..AppConfig::default()
    };
    assert!(config.validate().is_err());

    let config = AppConfig {
        mutation_spread: 1.0,
        ..AppConfig::default()
    };
    assert!(config.validate().is_err());

    let config = AppConfig {
        open_plan_threshold: f64::NAN,
        ..AppConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_snapshot_is_json() {
    let snapshot = AppConfig::default().snapshot();
    let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(value["mutation_probability"], 0.3);
}

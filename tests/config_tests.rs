use std::sync::Mutex;

use fintrack_core::config::{Config, ConfigManager};
use fintrack_core::planner::Strategy;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

fn manager_in_temp_dir() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}

#[test]
fn load_returns_defaults_when_no_file_exists() {
    let manager = manager_in_temp_dir();
    let config = manager.load().expect("load defaults");
    assert_eq!(config.currency, "USD");
    assert_eq!(config.locale, "en-US");
    assert_eq!(config.default_strategy, Strategy::Avalanche);
    assert!(config.monthly_budget.is_none());
}

#[test]
fn save_then_load_round_trips() {
    let manager = manager_in_temp_dir();
    let config = Config {
        locale: "pt-PT".into(),
        currency: "EUR".into(),
        theme: Some("dark".into()),
        default_strategy: Strategy::Snowball,
        monthly_budget: Some(650.0),
    };
    manager.save(&config).expect("save config");

    let loaded = manager.load().expect("reload config");
    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.theme.as_deref(), Some("dark"));
    assert_eq!(loaded.default_strategy, Strategy::Snowball);
    assert_eq!(loaded.monthly_budget, Some(650.0));
}

#[test]
fn save_leaves_no_temporary_file_behind() {
    let manager = manager_in_temp_dir();
    manager.save(&Config::default()).expect("save config");

    let dir = manager.path().parent().expect("config dir");
    let leftovers: Vec<_> = std::fs::read_dir(dir)
        .expect("read config dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn missing_planner_fields_fall_back_to_defaults() {
    let manager = manager_in_temp_dir();
    // A config written before the planner fields existed.
    std::fs::write(
        manager.path(),
        r#"{ "locale": "en-GB", "currency": "GBP" }"#,
    )
    .expect("write legacy config");

    let loaded = manager.load().expect("load legacy config");
    assert_eq!(loaded.currency, "GBP");
    assert_eq!(loaded.default_strategy, Strategy::Avalanche);
    assert!(loaded.monthly_budget.is_none());
}

mod common;

use common::{temp_home, write_file};
use nextstep_core::{
    config::{ConfigManager, EngineConfig, MAX_PROJECTION_YEARS},
    domain::{LifestyleTier, UserProfile},
    Engine,
};

#[test]
fn missing_file_loads_defaults() {
    let manager = ConfigManager::with_path(temp_home().join("config.json"));
    let config = manager.load().expect("defaults");
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let manager = ConfigManager::with_path(temp_home().join("nested").join("config.json"));
    let mut config = EngineConfig::default();
    config.tax.state_overrides.insert("OR".into(), 0.09);
    config.lifestyle.boujee = 3500.0;
    config.projection.years = 10;

    manager.save(&config).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, config);
    assert!(!manager.path().with_extension("json.tmp").exists());
}

#[test]
fn corrupt_file_degrades_to_defaults() {
    let path = write_file("config.json", "{ not json");
    let manager = ConfigManager::with_path(path);
    assert!(manager.load().is_err());
    assert_eq!(manager.load_or_default(), EngineConfig::default());
}

#[test]
fn out_of_range_values_are_clamped_on_load() {
    let path = write_file(
        "config.json",
        r#"{ "score": { "min_score": 400.0 }, "projection": { "years": 4294967295 } }"#,
    );
    let config = ConfigManager::with_path(path).load().expect("load config");
    assert_eq!(config.score.min_score, 100.0);
    assert_eq!(config.projection.years, MAX_PROJECTION_YEARS);

    let engine = Engine::new(config, nextstep_core::dataset::Dataset::builtin());
    let profile = UserProfile::new("UX Designer", "New York", 0.0, LifestyleTier::Boujee);
    let outlook = engine.evaluate(&profile).expect("built-in pair");
    assert!(outlook.thriving_score <= 100);
}

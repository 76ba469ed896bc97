#![deny(rust_2018_idioms)]

use config::{Config, File};
use fleet_tracker::settings::{Environment, Settings};


fn load(file: &str, environment: &str) -> Settings {
    Config::builder()
        .add_source(File::with_name(file).required(true))
        .set_override("environment", environment)
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize::<Settings>()
        .unwrap()
}

#[test]
fn test_local_settings_are_valid() {
    let settings = load("config/local.yml", "Local");
    assert_eq!(settings.environment, Environment::Local);
    assert!(settings.initial_viewport.is_some());
}

#[test]
fn test_development_settings_are_valid() {
    load("config/development.yml", "Development");
}

#[test]
fn test_production_settings_are_valid() {
    let settings = load("config/production.yml", "Production");
    assert!(!settings.seed_demo_data);
}

#[test]
fn test_test_settings_are_valid() {
    let settings = load("config/test.yml", "Test");
    assert_eq!(settings.sync_interval, std::time::Duration::from_millis(5));
}

#[test]
fn test_environment_parses_case_insensitively() {
    assert_eq!("TEST".parse::<Environment>().unwrap(), Environment::Test);
    assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
    assert!("staging".parse::<Environment>().is_err());
}

//! Unit tests for TOML configuration parsing.

use tick_stepper::config::{load_config, LimitUnit, StepperConfig};
use tick_stepper::Rpm;

/// Test parsing a complete stepper configuration from TOML.
#[test]
fn test_parse_stepper_config() {
    let toml_str = r#"
name = "pan"
steps_per_revolution = 4096
rpm = 15

[limits]
cw = 2048
ccw = -2048
unit = "steps"
"#;

    let config: StepperConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.name.as_str(), "pan");
    assert_eq!(config.steps_per_revolution, 4096);
    assert_eq!(config.rpm, 15);
    assert_eq!(config.effective_rpm(), Rpm::clamped(15));

    let limits = config.limits.expect("Limits not found");
    assert_eq!(limits.cw, 2048);
    assert_eq!(limits.ccw, -2048);
    assert_eq!(limits.unit, LimitUnit::Steps);
}

/// Test that the limit unit defaults to steps.
#[test]
fn test_limit_unit_defaults_to_steps() {
    let toml_str = r#"
steps_per_revolution = 200
rpm = 10

[limits]
cw = 100
ccw = 0
"#;

    let config: StepperConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.limits.unwrap().unit, LimitUnit::Steps);
}

/// Test parsing degree limits and their conversion to steps.
#[test]
fn test_parse_degree_limits() {
    let toml_str = r#"
steps_per_revolution = 200
rpm = 10

[limits]
cw = 180
ccw = -45
unit = "degrees"
"#;

    let config: StepperConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let limits = config
        .travel_limits()
        .expect("Limits should convert")
        .expect("Limits should be present");
    assert_eq!(limits.cw(), 100);
    assert_eq!(limits.ccw(), -25);
}

/// Test that an unknown limit unit is rejected during parsing.
#[test]
fn test_unknown_limit_unit_rejected() {
    let toml_str = r#"
steps_per_revolution = 200
rpm = 10

[limits]
cw = 180
ccw = -45
unit = "radians"
"#;

    let result: Result<StepperConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject unknown limit unit");
}

/// Test loading a configuration file from disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("tick-stepper-{}.toml", std::process::id()));
    std::fs::write(&path, "steps_per_revolution = 2048\nrpm = 8\n").unwrap();

    let config = load_config(&path).expect("Config should load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.steps_per_revolution, 2048);
    assert_eq!(config.effective_rpm().value(), 8);
}

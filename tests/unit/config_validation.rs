//! Unit tests for configuration validation.

use tick_stepper::config::{parse_config, validate_config, StepperConfig};
use tick_stepper::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
steps_per_revolution = 4096
rpm = 12

[limits]
cw = 90
ccw = -90
unit = "degrees"
"#;

    let config: StepperConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for zero steps per revolution.
#[test]
fn test_zero_steps_per_revolution() {
    let result = parse_config("steps_per_revolution = 0\nrpm = 12\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
    ));
}

/// Test validation fails for inverted limits (cw <= ccw).
#[test]
fn test_invalid_travel_limits() {
    let toml_str = r#"
steps_per_revolution = 200
rpm = 12

[limits]
cw = -90
ccw = 90
"#;

    let result = parse_config(toml_str);
    assert!(result.is_err());
}

/// Test validation fails when degree limits collapse to the same step.
#[test]
fn test_degree_limits_collapse() {
    let toml_str = r#"
steps_per_revolution = 200
rpm = 12

[limits]
cw = 1
ccw = 0
unit = "degrees"
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTravelLimits { cw: 1, ccw: 0 }))
    ));
}

/// Test that an out-of-range rpm is accepted (clamped later, not rejected).
#[test]
fn test_out_of_range_rpm_is_valid() {
    let config = parse_config("steps_per_revolution = 200\nrpm = 100\n").unwrap();
    assert_eq!(config.effective_rpm().value(), 23);
}

/// Test that malformed TOML reports a parse error.
#[test]
fn test_malformed_toml() {
    let result = parse_config("steps_per_revolution = \"many\"\n");
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

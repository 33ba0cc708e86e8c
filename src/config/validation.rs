//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{Rpm, StepperConfig};

/// Validate a stepper configuration.
///
/// Checks:
/// - Steps per revolution is non-zero
/// - Travel limits, once converted to steps, satisfy cw > ccw
///
/// An out-of-range rpm is not an error: it is clamped when the controller is built.
pub fn validate_config(config: &StepperConfig) -> Result<()> {
    if config.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            config.steps_per_revolution,
        )));
    }

    config.travel_limits()?;

    if !Rpm::in_range(config.rpm) {
        warn!(
            "configured rpm {} will be clamped to {}",
            config.rpm,
            config.effective_rpm().value()
        );
    }

    Ok(())
}

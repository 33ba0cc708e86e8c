//! Builder pattern for StepperController.

use crate::config::{LimitUnit, StepperConfig, TravelLimits, TravelLimitsConfig};
use crate::error::{ConfigError, Error, Result};

use super::coils::CoilOutput;
use super::driver::StepperController;

/// Builder for creating StepperController instances.
pub struct StepperControllerBuilder<C>
where
    C: CoilOutput,
{
    coils: Option<C>,
    steps_per_revolution: Option<u16>,
    rpm: Option<u16>,
    /// Converted to steps on build, once steps per revolution is known.
    limits: Option<TravelLimitsConfig>,
}

impl<C> Default for StepperControllerBuilder<C>
where
    C: CoilOutput,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> StepperControllerBuilder<C>
where
    C: CoilOutput,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            coils: None,
            steps_per_revolution: None,
            rpm: None,
            limits: None,
        }
    }

    /// Set the coil outputs.
    pub fn coils(mut self, coils: C) -> Self {
        self.coils = Some(coils);
        self
    }

    /// Set steps per output revolution.
    pub fn steps_per_revolution(mut self, steps: u16) -> Self {
        self.steps_per_revolution = Some(steps);
        self
    }

    /// Set speed in revolutions per minute (clamped to `[6, 23]` on build).
    pub fn rpm(mut self, rpm: u16) -> Self {
        self.rpm = Some(rpm);
        self
    }

    /// Set initial travel limits in steps.
    pub fn limits(mut self, limits: TravelLimits) -> Self {
        self.limits = Some(TravelLimitsConfig {
            cw: limits.cw(),
            ccw: limits.ccw(),
            unit: LimitUnit::Steps,
        });
        self
    }

    /// Configure from a StepperConfig.
    pub fn from_config(mut self, config: &StepperConfig) -> Self {
        self.steps_per_revolution = Some(config.steps_per_revolution);
        self.rpm = Some(config.rpm);
        if let Some(limits) = config.limits {
            self.limits = Some(limits);
        }
        self
    }

    /// Build the StepperController.
    ///
    /// # Errors
    ///
    /// Returns an error if coils, steps per revolution, or rpm are missing, if
    /// steps per revolution is 0, or if the configured limits do not satisfy
    /// `cw > ccw` once converted to steps.
    pub fn build(self) -> Result<StepperController<C>> {
        let coils = self
            .coils
            .ok_or(Error::Config(ConfigError::MissingField("coils")))?;

        let steps = self
            .steps_per_revolution
            .ok_or(Error::Config(ConfigError::MissingField("steps_per_revolution")))?;
        if steps == 0 {
            return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(steps)));
        }

        let rpm = self
            .rpm
            .ok_or(Error::Config(ConfigError::MissingField("rpm")))?;

        let limits = match self.limits {
            Some(config) => Some(config.to_limits(steps).ok_or(Error::Config(
                ConfigError::InvalidTravelLimits {
                    cw: config.cw,
                    ccw: config.ccw,
                },
            ))?),
            None => None,
        };

        let controller = StepperController::new(coils, steps, rpm);
        if let Some(limits) = limits {
            controller.set_limits(limits.cw(), limits.ccw());
        }

        Ok(controller)
    }
}

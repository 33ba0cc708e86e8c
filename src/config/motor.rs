//! Stepper configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};

use super::limits::{TravelLimits, TravelLimitsConfig};
use super::units::Rpm;

/// Complete configuration of one stepper.
#[derive(Debug, Clone, Deserialize)]
pub struct StepperConfig {
    /// Human-readable name (max 32 chars).
    #[serde(default = "default_name")]
    pub name: String<32>,

    /// Steps per output shaft revolution (4096 for a geared 28BYJ-48 in half-step mode).
    pub steps_per_revolution: u16,

    /// Speed in revolutions per minute, clamped to `[6, 23]` when the controller is built.
    pub rpm: u16,

    /// Optional virtual limit switches.
    #[serde(default)]
    pub limits: Option<TravelLimitsConfig>,
}

fn default_name() -> String<32> {
    let mut name = String::new();
    let _ = name.push_str("stepper");
    name
}

impl StepperConfig {
    /// Speed after clamping to the supported range.
    pub fn effective_rpm(&self) -> Rpm {
        Rpm::clamped(self.rpm)
    }

    /// Configured limits converted to steps, `None` if none are configured.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTravelLimits` if the converted bounds do not satisfy `cw > ccw`.
    pub fn travel_limits(&self) -> Result<Option<TravelLimits>> {
        match self.limits {
            Some(limits) => limits
                .to_limits(self.steps_per_revolution)
                .map(Some)
                .ok_or(Error::Config(ConfigError::InvalidTravelLimits {
                    cw: limits.cw,
                    ccw: limits.ccw,
                })),
            None => Ok(None),
        }
    }
}

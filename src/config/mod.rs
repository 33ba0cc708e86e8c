//! Configuration module for tick-stepper.
//!
//! Provides unit types, travel limits, and the stepper configuration loaded
//! from TOML files (with `std` feature) or built in code.

mod limits;
#[cfg(feature = "std")]
mod loader;
mod motor;
pub mod units;
mod validation;

pub use limits::{LimitUnit, TravelLimits, TravelLimitsConfig};
pub use motor::StepperConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

pub use units::{degrees_to_steps, steps_to_degrees, Rpm};

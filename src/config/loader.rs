//! Reading a [`StepperConfig`] from TOML (std only).
//!
//! Both entry points run [`validate_config`] before returning, so a loaded
//! configuration always has a non-zero step count and usable limits.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use heapless::String;

use crate::error::{ConfigError, Error, Result};

use super::validation::validate_config;
use super::StepperConfig;

/// Read and validate the stepper described by the TOML file at `path`.
///
/// # Errors
///
/// `IoError` (prefixed with the path) if the file cannot be read, otherwise
/// whatever [`parse_config`] reports.
///
/// # Example
///
/// ```rust,ignore
/// let config = tick_stepper::load_config("dial.toml")?;
/// let stepper = StepperControllerBuilder::new()
///     .coils(coils)
///     .from_config(&config)
///     .build()?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StepperConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::IoError(truncated(format_args!(
            "{}: {}",
            path.display(),
            e
        ))))
    })?;

    parse_config(&content)
}

/// Parse and validate a stepper description held in memory.
///
/// # Errors
///
/// `ParseError` for malformed TOML or missing fields, `InvalidStepsPerRevolution`
/// or `InvalidTravelLimits` for a description that parses but cannot drive a motor.
pub fn parse_config(content: &str) -> Result<StepperConfig> {
    let config: StepperConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(truncated(e.message()))))?;

    validate_config(&config)?;
    Ok(config)
}

/// Render `message` into a fixed-capacity string, cutting it at the last
/// character that fits.
fn truncated<const N: usize>(message: impl Display) -> String<N> {
    let text = message.to_string();
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

//! # tick-stepper
//!
//! Interrupt-driven, open-loop position control for 4-phase unipolar steppers
//! (28BYJ-48 on a ULN2003 board and similar), with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Tick-driven**: a periodic timer interrupt advances the motor exactly one
//!   half-step per tick toward the setpoint
//! - **Non-blocking commands**: moves, stops and limit changes return immediately
//!   and are applied atomically under a critical section
//! - **Virtual limit switches**: moves are clamped and never pass the limits
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tick_stepper::{CoilPins, StepperController};
//!
//! let coils = CoilPins::new(in1, in2, in3, in4);
//! let stepper = StepperController::init(coils, 4096, 12, &mut timer);
//!
//! // From the timer interrupt:
//! stepper.on_tick().ok();
//!
//! // From main:
//! stepper.set_limits_degree(180, -180);
//! stepper.move_to_degree(90);
//! ```
//!
//! Degree arguments are converted with `steps = degrees * spr / 360`,
//! truncated toward zero.
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables logging through the `log` facade

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, Rpm, StepperConfig, TravelLimits};
pub use error::{Error, Result};
pub use motion::{Direction, Phase, COIL_PATTERN};
pub use motor::{
    state, CoilOutput, CoilPins, MotionState, MotionStatus, StepperController,
    StepperControllerBuilder, TickPeriod, TickSource,
};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

//! Motion module for tick-stepper.
//!
//! Provides rotation direction and the fixed 8-phase coil sequence.

mod direction;
mod phase;

pub use direction::Direction;
pub use phase::{coil_levels, CoilLevels, Phase, COIL_PATTERN, RELEASED};

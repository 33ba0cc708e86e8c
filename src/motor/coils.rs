//! Coil outputs.
//!
//! The controller writes four line levels per tick through [`CoilOutput`].
//! [`CoilPins`] implements it over embedded-hal 1.0 output pins.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{MotorError, Result};
use crate::motion::CoilLevels;

/// Sink for the four coil drive lines.
pub trait CoilOutput {
    /// Drive line `i` high when `levels[i]` is true, low otherwise.
    ///
    /// Called from the tick handler; must not block.
    fn energize(&mut self, levels: CoilLevels) -> Result<()>;
}

/// Four embedded-hal output pins wired to IN1..IN4 of the driver board.
pub struct CoilPins<A, B, C, D>
where
    A: OutputPin,
    B: OutputPin,
    C: OutputPin,
    D: OutputPin,
{
    in1: A,
    in2: B,
    in3: C,
    in4: D,
}

impl<A, B, C, D> CoilPins<A, B, C, D>
where
    A: OutputPin,
    B: OutputPin,
    C: OutputPin,
    D: OutputPin,
{
    /// Wrap four pins, in line order.
    pub fn new(in1: A, in2: B, in3: C, in4: D) -> Self {
        Self { in1, in2, in3, in4 }
    }

    /// Give the pins back.
    pub fn release(self) -> (A, B, C, D) {
        (self.in1, self.in2, self.in3, self.in4)
    }
}

impl<A, B, C, D> CoilOutput for CoilPins<A, B, C, D>
where
    A: OutputPin,
    B: OutputPin,
    C: OutputPin,
    D: OutputPin,
{
    fn energize(&mut self, levels: CoilLevels) -> Result<()> {
        // Write every line even if an earlier one fails.
        let results = [
            self.in1.set_state(PinState::from(levels[0])).is_ok(),
            self.in2.set_state(PinState::from(levels[1])).is_ok(),
            self.in3.set_state(PinState::from(levels[2])).is_ok(),
            self.in4.set_state(PinState::from(levels[3])).is_ok(),
        ];

        if results.iter().all(|ok| *ok) {
            Ok(())
        } else {
            Err(MotorError::PinError.into())
        }
    }
}

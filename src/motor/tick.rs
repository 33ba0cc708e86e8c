//! Periodic tick source.
//!
//! The controller does not own a timer. It computes the step period and hands
//! it to a [`TickSource`], whose interrupt is expected to call
//! [`StepperController::on_tick`](super::StepperController::on_tick) once per period.

use crate::config::Rpm;

/// Microseconds per minute.
const MICROS_PER_MINUTE: u64 = 60_000_000;

/// Interval between two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickPeriod {
    micros: u32,
}

impl TickPeriod {
    /// Period for `rpm` at `steps_per_revolution`: `60_000_000 / (rpm * spr)` µs.
    ///
    /// `steps_per_revolution` of 0 is treated as 1.
    pub fn from_speed(rpm: Rpm, steps_per_revolution: u16) -> Self {
        let steps_per_minute = u64::from(rpm.value()) * u64::from(steps_per_revolution.max(1));
        let micros = MICROS_PER_MINUTE / steps_per_minute;
        Self {
            // At least 6 rpm * 1 spr, so at most 10 s.
            micros: micros as u32,
        }
    }

    /// Period in microseconds.
    #[inline]
    pub const fn as_micros(self) -> u32 {
        self.micros
    }

    /// Period in nanoseconds.
    #[inline]
    pub const fn as_nanos(self) -> u64 {
        self.micros as u64 * 1_000
    }
}

/// Hardware timer that calls the tick handler periodically.
pub trait TickSource {
    /// Start (or restart) periodic ticks at `period`.
    fn arm(&mut self, period: TickPeriod);
}

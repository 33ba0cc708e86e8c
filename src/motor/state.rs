//! Motion state and the per-tick step transition.
//!
//! [`MotionState`] is plain data with no I/O. The controller wraps it in a
//! critical section; everything here can be exercised directly in tests.

use crate::config::TravelLimits;
use crate::motion::{CoilLevels, Direction, Phase, RELEASED};

/// Logical motor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionStatus {
    /// No motion pending; coils released.
    Stopped,
    /// Driving toward the setpoint, one step per tick.
    Moving,
}

impl MotionStatus {
    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            MotionStatus::Stopped => "Stopped",
            MotionStatus::Moving => "Moving",
        }
    }
}

/// Position, setpoint, limits and drive phase of one motor.
///
/// Invariants:
/// - stopped implies no active phase (step mask 0)
/// - the active phase, when present, is one-hot
/// - the saved phase is always a valid one-hot phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionState {
    position: i32,
    setpoint: i32,
    limits: TravelLimits,
    phase: Option<Phase>,
    last_phase: Phase,
    stopped: bool,
}

impl MotionState {
    /// Stopped at position 0, coils released, no limits.
    pub const fn new() -> Self {
        Self {
            position: 0,
            setpoint: 0,
            limits: TravelLimits::UNBOUNDED,
            phase: None,
            last_phase: Phase::FIRST,
            stopped: true,
        }
    }

    /// Current position in steps.
    #[inline]
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Target position in steps.
    #[inline]
    pub fn setpoint(&self) -> i32 {
        self.setpoint
    }

    /// Active travel limits.
    #[inline]
    pub fn limits(&self) -> TravelLimits {
        self.limits
    }

    /// Active one-hot step mask, 0 when stopped.
    #[inline]
    pub fn step_mask(&self) -> u8 {
        self.phase.map_or(0, Phase::mask)
    }

    /// Phase the next move resumes from.
    #[inline]
    pub fn last_mask(&self) -> u8 {
        self.last_phase.mask()
    }

    /// Whether no motion is pending.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Logical state.
    #[inline]
    pub fn status(&self) -> MotionStatus {
        if self.stopped {
            MotionStatus::Stopped
        } else {
            MotionStatus::Moving
        }
    }

    /// Distance between setpoint and position.
    #[inline]
    pub fn steps_left(&self) -> u32 {
        self.setpoint.abs_diff(self.position)
    }

    /// Coil levels for the current step mask.
    #[inline]
    pub fn output(&self) -> CoilLevels {
        self.phase.map_or(RELEASED, Phase::levels)
    }

    /// Advance by one tick.
    ///
    /// Returns the coil levels to drive for this tick, taken *before* the
    /// transition. Then, if moving, steps the position one unit toward the
    /// setpoint and rotates the phase, stopping at the setpoint or on
    /// reaching a travel limit. A CW step stops at `position >= cw` and a CCW
    /// step at `position <= ccw`, so neither direction passes its bound.
    pub fn advance_one_step(&mut self) -> CoilLevels {
        let output = self.output();
        if self.stopped {
            return output;
        }

        if let Some(direction) = Direction::toward(self.position, self.setpoint) {
            self.position += direction.sign();
            let at_limit = match direction {
                Direction::Clockwise => self.limits.reached_cw(self.position),
                Direction::CounterClockwise => self.limits.reached_ccw(self.position),
            };
            if at_limit {
                self.stop();
            } else {
                self.rotate(direction);
            }
        }

        if self.setpoint == self.position {
            self.stop();
        }

        output
    }

    /// Move `steps` clockwise, clamped to the CW limit.
    ///
    /// Returns `false` (no change) if the clamped setpoint is not ahead of the position.
    pub fn command_cw(&mut self, steps: i32) -> bool {
        let setpoint = self
            .limits
            .clamp_cw(i64::from(self.position) + i64::from(steps));
        if self.position < setpoint {
            self.start(setpoint);
            true
        } else {
            false
        }
    }

    /// Move `steps` counter-clockwise, clamped to the CCW limit.
    ///
    /// Returns `false` (no change) if the clamped setpoint is not behind the position.
    pub fn command_ccw(&mut self, steps: i32) -> bool {
        let setpoint = self
            .limits
            .clamp_ccw(i64::from(self.position) - i64::from(steps));
        if self.position > setpoint {
            self.start(setpoint);
            true
        } else {
            false
        }
    }

    /// Move to an absolute position.
    ///
    /// Accepted only while stopped, with `target` strictly inside the limits
    /// and different from the current position.
    pub fn command_to(&mut self, target: i32) -> bool {
        if self.stopped && target != self.position && self.limits.strictly_contains(target) {
            self.start(target);
            true
        } else {
            false
        }
    }

    /// Request a stop on the next tick.
    ///
    /// The currently driven phase stays energized until that tick releases it.
    pub fn cancel(&mut self) {
        self.setpoint = self.position;
    }

    /// Replace the travel limits. Accepted only while stopped and with `cw > ccw`.
    pub fn set_limits(&mut self, cw: i32, ccw: i32) -> bool {
        if !self.stopped {
            return false;
        }
        match TravelLimits::new(cw, ccw) {
            Some(limits) => {
                self.limits = limits;
                true
            }
            None => false,
        }
    }

    /// Zero position and setpoint. Accepted only while stopped.
    pub fn reset_position(&mut self) -> bool {
        if self.stopped {
            self.position = 0;
            self.setpoint = 0;
            true
        } else {
            false
        }
    }

    // A move issued mid-motion keeps the phase being driven; from rest it
    // resumes at the phase saved by the last stop.
    fn start(&mut self, setpoint: i32) {
        self.setpoint = setpoint;
        self.phase = Some(self.phase.unwrap_or(self.last_phase));
        self.stopped = false;
    }

    fn rotate(&mut self, direction: Direction) {
        self.phase = self.phase.map(|phase| phase.next(direction));
    }

    fn stop(&mut self) {
        if let Some(phase) = self.phase.take() {
            self.last_phase = phase;
        }
        self.stopped = true;
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new()
    }
}

//! Software travel limits.

use serde::Deserialize;

use super::units::degrees_to_steps;

/// Unit in which configured limits are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitUnit {
    /// Limits are step counts.
    #[default]
    Steps,
    /// Limits are whole degrees, converted with the motor's steps per revolution.
    Degrees,
}

/// Travel limits as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TravelLimitsConfig {
    /// Clockwise (upper) bound.
    pub cw: i32,

    /// Counter-clockwise (lower) bound.
    pub ccw: i32,

    /// Unit of `cw` and `ccw`.
    #[serde(default)]
    pub unit: LimitUnit,
}

impl TravelLimitsConfig {
    /// Convert to step limits.
    ///
    /// Returns `None` if the converted bounds do not satisfy `cw > ccw`.
    pub fn to_limits(&self, steps_per_revolution: u16) -> Option<TravelLimits> {
        match self.unit {
            LimitUnit::Steps => TravelLimits::new(self.cw, self.ccw),
            LimitUnit::Degrees => TravelLimits::new(
                degrees_to_steps(self.cw, steps_per_revolution),
                degrees_to_steps(self.ccw, steps_per_revolution),
            ),
        }
    }
}

/// Virtual limit switches in steps.
///
/// Positions are allowed in `[ccw, cw]`; a move is stopped as soon as the
/// position reaches either bound, so it never travels past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelLimits {
    cw: i32,
    ccw: i32,
}

impl TravelLimits {
    /// No limits: the whole `i32` range.
    pub const UNBOUNDED: Self = Self {
        cw: i32::MAX,
        ccw: i32::MIN,
    };

    /// Create limits. Returns `None` unless `cw > ccw`.
    #[inline]
    pub const fn new(cw: i32, ccw: i32) -> Option<Self> {
        if cw > ccw {
            Some(Self { cw, ccw })
        } else {
            None
        }
    }

    /// Clockwise (upper) bound.
    #[inline]
    pub const fn cw(&self) -> i32 {
        self.cw
    }

    /// Counter-clockwise (lower) bound.
    #[inline]
    pub const fn ccw(&self) -> i32 {
        self.ccw
    }

    /// Clamp a candidate setpoint to the clockwise bound.
    #[inline]
    pub fn clamp_cw(&self, candidate: i64) -> i32 {
        candidate.min(i64::from(self.cw)) as i32
    }

    /// Clamp a candidate setpoint to the counter-clockwise bound.
    #[inline]
    pub fn clamp_ccw(&self, candidate: i64) -> i32 {
        candidate.max(i64::from(self.ccw)) as i32
    }

    /// Whether `position` lies strictly between the bounds.
    #[inline]
    pub fn strictly_contains(&self, position: i32) -> bool {
        position > self.ccw && position < self.cw
    }

    /// Whether a clockwise step has reached the clockwise bound.
    #[inline]
    pub fn reached_cw(&self, position: i32) -> bool {
        position >= self.cw
    }

    /// Whether a counter-clockwise step has reached the counter-clockwise bound.
    #[inline]
    pub fn reached_ccw(&self, position: i32) -> bool {
        position <= self.ccw
    }
}

impl Default for TravelLimits {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

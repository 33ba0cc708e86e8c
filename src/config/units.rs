//! Unit types and conversions.
//!
//! Speed is a clamped [`Rpm`]; angles are whole degrees converted to and from
//! steps with truncating integer arithmetic.

/// Motor speed in revolutions per minute, clamped to the safe drive range.
///
/// Below [`Rpm::MIN`] the coils stay energized long enough to overheat; above
/// [`Rpm::MAX`] the motor no longer has the torque to follow the step rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rpm(u16);

impl Rpm {
    /// Slowest supported speed.
    pub const MIN: Self = Self(6);
    /// Fastest supported speed.
    pub const MAX: Self = Self(23);

    /// Create a speed, clamping into `[MIN, MAX]`.
    #[inline]
    pub const fn clamped(rpm: u16) -> Self {
        if rpm < Self::MIN.0 {
            Self::MIN
        } else if rpm > Self::MAX.0 {
            Self::MAX
        } else {
            Self(rpm)
        }
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Whether `rpm` lies inside the supported range without clamping.
    #[inline]
    pub const fn in_range(rpm: u16) -> bool {
        rpm >= Self::MIN.0 && rpm <= Self::MAX.0
    }
}

/// Convert whole degrees to steps: `degrees * spr / 360`, truncated toward zero.
#[inline]
pub fn degrees_to_steps(degrees: i32, steps_per_revolution: u16) -> i32 {
    let steps = i64::from(degrees) * i64::from(steps_per_revolution) / 360;
    // Saturate: spr > 360 scales large angles past the i32 range.
    steps.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Convert steps to whole degrees: `steps * 360 / spr`, truncated toward zero.
///
/// Returns 0 when `steps_per_revolution` is 0.
#[inline]
pub fn steps_to_degrees(steps: i32, steps_per_revolution: u16) -> i32 {
    if steps_per_revolution == 0 {
        return 0;
    }
    let degrees = i64::from(steps) * 360 / i64::from(steps_per_revolution);
    degrees.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

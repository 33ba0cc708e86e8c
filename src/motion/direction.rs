//! Rotation direction.

/// Direction of rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise (position counts up).
    Clockwise,
    /// Counter-clockwise (position counts down).
    CounterClockwise,
}

impl Direction {
    /// Direction needed to go from `position` to `setpoint`, if they differ.
    #[inline]
    pub fn toward(position: i32, setpoint: i32) -> Option<Self> {
        match setpoint.cmp(&position) {
            core::cmp::Ordering::Greater => Some(Direction::Clockwise),
            core::cmp::Ordering::Less => Some(Direction::CounterClockwise),
            core::cmp::Ordering::Equal => None,
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

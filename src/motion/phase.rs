//! Coil energization phases.
//!
//! The motor is driven through 8 half-step phases. Phase `n` corresponds to
//! bit `n` of a one-hot step mask; each of the four coil lines is high when
//! its row of [`COIL_PATTERN`] has that bit set.

use super::direction::Direction;

/// Fixed coil pattern, one byte per output line, one bit per phase.
///
/// This is the wiring contract of the 4-phase driver board and must not change.
pub const COIL_PATTERN: [u8; 4] = [
    0b1000_0011,
    0b0011_1000,
    0b0000_1110,
    0b1110_0000,
];

/// Drive level of each of the four coil lines.
pub type CoilLevels = [bool; 4];

/// All coils off.
pub const RELEASED: CoilLevels = [false; 4];

/// Coil levels for a raw step mask.
#[inline]
pub fn coil_levels(mask: u8) -> CoilLevels {
    core::array::from_fn(|line| (COIL_PATTERN[line] & mask) != 0)
}

/// One of the 8 drive phases (index modulo 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Phase(u8);

impl Phase {
    /// Number of phases in a full electrical cycle.
    pub const COUNT: u8 = 8;

    /// Phase 0 (mask `0b0000_0001`).
    pub const FIRST: Self = Self(0);

    /// Create a phase from an index; wraps modulo 8.
    #[inline]
    pub const fn new(index: u8) -> Self {
        Self(index % Self::COUNT)
    }

    /// Create a phase from a one-hot mask. `None` unless exactly one bit is set.
    #[inline]
    pub const fn from_mask(mask: u8) -> Option<Self> {
        if mask.count_ones() == 1 {
            Some(Self(mask.trailing_zeros() as u8))
        } else {
            None
        }
    }

    /// One-hot step mask for this phase.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self.0
    }

    /// Next phase when stepping in `direction`.
    ///
    /// Clockwise moves toward the high bit and wraps to bit 0; counter-clockwise
    /// moves toward bit 0 and wraps to the high bit.
    #[inline]
    pub const fn next(self, direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => Self((self.0 + 1) % Self::COUNT),
            Direction::CounterClockwise => Self((self.0 + Self::COUNT - 1) % Self::COUNT),
        }
    }

    /// Coil levels for this phase.
    #[inline]
    pub fn levels(self) -> CoilLevels {
        coil_levels(self.mask())
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::FIRST
    }
}

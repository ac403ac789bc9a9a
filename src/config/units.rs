//! Unit types for servo positions and timing.
//!
//! Provides type-safe representations of servo angles and step intervals
//! to prevent unit confusion at compile time.

use core::fmt;

use serde::Deserialize;

use crate::error::ConfigError;

/// Servo horn angle in whole degrees.
///
/// Hobby servos accept `0..=180`; see [`Angle::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Angle(pub u16);

impl Angle {
    /// Lowest angle a servo can be commanded to.
    pub const MIN: Angle = Angle(0);

    /// Highest angle a servo can be commanded to.
    pub const MAX: Angle = Angle(180);

    /// Create a new Angle value.
    #[inline]
    pub const fn new(degrees: u16) -> Self {
        Self(degrees)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Check the angle is inside the servo range.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 <= Self::MAX.0
    }

    /// Create a checked angle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AngleOutOfRange`] above [`Angle::MAX`].
    pub fn checked(degrees: u16) -> Result<Self, ConfigError> {
        let angle = Self(degrees);
        if angle.is_valid() {
            Ok(angle)
        } else {
            Err(ConfigError::AngleOutOfRange(degrees))
        }
    }

    /// Offset by a signed number of degrees, saturating at the servo range.
    #[inline]
    pub fn offset(self, delta: i32) -> Self {
        let raw = (self.0 as i32 + delta).clamp(Self::MIN.0 as i32, Self::MAX.0 as i32);
        Self(raw as u16)
    }

    /// Clamp into `[lo, hi]`.
    #[inline]
    pub fn clamp_to(self, lo: Angle, hi: Angle) -> Self {
        Self(self.0.clamp(lo.0, hi.0))
    }
}

impl From<u16> for Angle {
    fn from(degrees: u16) -> Self {
        Self(degrees)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millis(pub u32);

impl Millis {
    /// Create a new Millis value.
    #[inline]
    pub const fn new(ms: u32) -> Self {
        Self(ms)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Check whether `elapsed` milliseconds covers this duration.
    #[inline]
    pub fn has_elapsed(self, since_ms: u64, now_ms: u64) -> bool {
        now_ms.saturating_sub(since_ms) >= self.0 as u64
    }
}

impl From<u32> for Millis {
    fn from(ms: u32) -> Self {
        Self(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_checked() {
        assert_eq!(Angle::checked(0), Ok(Angle(0)));
        assert_eq!(Angle::checked(180), Ok(Angle(180)));
        assert_eq!(Angle::checked(181), Err(ConfigError::AngleOutOfRange(181)));
    }

    #[test]
    fn test_angle_offset_saturates() {
        assert_eq!(Angle(85).offset(2), Angle(87));
        assert_eq!(Angle(75).offset(-2), Angle(73));
        assert_eq!(Angle(179).offset(5), Angle::MAX);
        assert_eq!(Angle(1).offset(-5), Angle::MIN);
    }

    #[test]
    fn test_millis_elapsed() {
        let interval = Millis(100);
        assert!(!interval.has_elapsed(0, 99));
        assert!(interval.has_elapsed(0, 100));
        // A clock that steps backwards never counts as elapsed.
        assert!(!interval.has_elapsed(500, 400));
    }
}

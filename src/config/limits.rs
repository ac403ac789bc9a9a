//! Motion limit configuration.

use super::units::{Angle, Millis};
use crate::error::ConfigError;

/// Default diverging endpoint.
pub const DEFAULT_MIN: Angle = Angle(75);

/// Default through endpoint.
pub const DEFAULT_MAX: Angle = Angle(85);

/// Default minimum time between two steps.
pub const DEFAULT_STEP_INTERVAL: Millis = Millis(100);

/// Endpoints and pacing for one turnout servo.
///
/// Immutable once handed to an actuator; reconfigure by replacing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionLimits {
    /// Diverging endpoint (lower angle).
    pub min: Angle,

    /// Through endpoint (higher angle).
    pub max: Angle,

    /// Minimum time between successive steps.
    pub step_interval: Millis,

    /// Back-off inside the endpoint written on the final approach before settling.
    pub back_step: u16,
}

impl Default for MotionLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step_interval: DEFAULT_STEP_INTERVAL,
            back_step: 0,
        }
    }
}

impl MotionLimits {
    /// Create validated limits.
    ///
    /// # Errors
    ///
    /// Returns an error if either angle is outside the servo range or
    /// `min >= max`.
    pub fn new(
        min: Angle,
        max: Angle,
        step_interval: Millis,
        back_step: u16,
    ) -> Result<Self, ConfigError> {
        let limits = Self {
            min,
            max,
            step_interval,
            back_step,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Check the limits are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min.is_valid() {
            return Err(ConfigError::AngleOutOfRange(self.min.0));
        }
        if !self.max.is_valid() {
            return Err(ConfigError::AngleOutOfRange(self.max.0));
        }
        if self.min >= self.max {
            return Err(ConfigError::InvalidLimits {
                min: self.min.0,
                max: self.max.0,
            });
        }
        Ok(())
    }

    /// Check if limits are valid.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check if a position is within limits.
    pub fn contains(&self, position: Angle) -> bool {
        position >= self.min && position <= self.max
    }

    /// Clamp a requested position to the nearest limit.
    pub fn clamp(&self, target: Angle) -> Angle {
        target.clamp_to(self.min, self.max)
    }

    /// Number of unit steps in a full throw.
    pub fn travel(&self) -> u16 {
        self.max.0.saturating_sub(self.min.0)
    }
}

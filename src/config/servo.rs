//! Turnout servo configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::limits::{MotionLimits, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP_INTERVAL};
use super::units::{Angle, Millis};
use crate::error::ConfigError;

/// Complete servo configuration from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServoConfig {
    /// Human-readable name (max 32 chars), used as the log prefix.
    pub name: String<32>,

    /// Diverging endpoint in degrees.
    #[serde(rename = "min_degrees", default = "default_min")]
    pub min: Angle,

    /// Through endpoint in degrees.
    #[serde(rename = "max_degrees", default = "default_max")]
    pub max: Angle,

    /// Minimum time between steps in milliseconds.
    #[serde(rename = "step_interval_ms", default = "default_interval")]
    pub step_interval: Millis,

    /// Back-off inside the endpoint on the final approach, in degrees.
    #[serde(default)]
    pub back_step: u16,
}

fn default_min() -> Angle {
    DEFAULT_MIN
}

fn default_max() -> Angle {
    DEFAULT_MAX
}

fn default_interval() -> Millis {
    DEFAULT_STEP_INTERVAL
}

impl ServoConfig {
    /// Build validated motion limits from this entry.
    pub fn limits(&self) -> Result<MotionLimits, ConfigError> {
        MotionLimits::new(self.min, self.max, self.step_interval, self.back_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_from_config() {
        let config = ServoConfig {
            name: String::try_from("test").unwrap(),
            min: Angle(60),
            max: Angle(100),
            step_interval: Millis(25),
            back_step: 3,
        };

        let limits = config.limits().unwrap();
        assert_eq!(limits.min, Angle(60));
        assert_eq!(limits.max, Angle(100));
        assert_eq!(limits.step_interval, Millis(25));
        assert_eq!(limits.back_step, 3);
    }

    #[test]
    fn test_invalid_limits_from_config() {
        let config = ServoConfig {
            name: String::try_from("test").unwrap(),
            min: Angle(100),
            max: Angle(60),
            step_interval: Millis(25),
            back_step: 0,
        };

        assert!(matches!(
            config.limits(),
            Err(ConfigError::InvalidLimits { min: 100, max: 60 })
        ));
    }
}

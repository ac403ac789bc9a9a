//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Every servo has `min < max` within the servo range
/// - Display names are not empty
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (key, servo) in config.servos.iter() {
        validate_servo(key.as_str(), servo)?;
    }

    Ok(())
}

fn validate_servo(key: &str, config: &super::ServoConfig) -> Result<()> {
    if config.name.is_empty() {
        return Err(Error::Config(ConfigError::EmptyName(
            heapless::String::try_from(key).unwrap_or_default(),
        )));
    }

    config.limits()?;

    Ok(())
}

//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
///
/// ```rust,ignore
/// use turnout_servo::load_config;
///
/// let config = load_config("turnouts.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncated(&e.to_string());
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = truncated(e.message());
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

// Keeps the head of long messages instead of dropping them entirely.
fn truncated(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Angle, Millis};

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[servos.turnout_1]
name = "Yard lead"
"#;

        let config = parse_config(toml).unwrap();
        let servo = config.servo("turnout_1").unwrap();
        assert_eq!(servo.min, Angle(75));
        assert_eq!(servo.max, Angle(85));
        assert_eq!(servo.step_interval, Millis(100));
        assert_eq!(servo.back_step, 0);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[servos.turnout_1]
name = "Yard lead"
min_degrees = 70
max_degrees = 95
step_interval_ms = 40
back_step = 2
"#;

        let config = parse_config(toml).unwrap();
        let limits = config.servo("turnout_1").unwrap().limits().unwrap();
        assert_eq!(limits.min, Angle(70));
        assert_eq!(limits.max, Angle(95));
        assert_eq!(limits.step_interval, Millis(40));
        assert_eq!(limits.back_step, 2);
    }

    #[test]
    fn test_parse_rejects_inverted_limits() {
        let toml = r#"
[servos.turnout_1]
name = "Yard lead"
min_degrees = 95
max_degrees = 70
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidLimits { .. }))
        ));
    }

    #[test]
    fn test_parse_error_reported() {
        let result = parse_config("[servos.turnout_1\nname = ");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/turnouts.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    }
}

//! Builder pattern for ServoActuator.

use crate::config::units::{Angle, Millis};
use crate::config::{MotionLimits, ServoConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::servo::ServoDriver;

use super::callback::OnFinished;
use super::servo_actuator::{bounded_name, ServoActuator};

/// Builder for creating ServoActuator instances.
pub struct ServoActuatorBuilder<S, H = fn()>
where
    S: ServoDriver,
    H: OnFinished,
{
    driver: Option<S>,
    name: Option<heapless::String<32>>,
    limits: MotionLimits,
    on_finished: Option<H>,
}

impl<S, H> Default for ServoActuatorBuilder<S, H>
where
    S: ServoDriver,
    H: OnFinished,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, H> ServoActuatorBuilder<S, H>
where
    S: ServoDriver,
    H: OnFinished,
{
    /// Create a new builder with the default limits.
    pub fn new() -> Self {
        Self {
            driver: None,
            name: None,
            limits: MotionLimits::default(),
            on_finished: None,
        }
    }

    /// Set the servo driver.
    pub fn driver(mut self, driver: S) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Set the servo name. Truncated to 32 bytes.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(bounded_name(name));
        self
    }

    /// Set the diverging endpoint.
    pub fn min(mut self, min: Angle) -> Self {
        self.limits.min = min;
        self
    }

    /// Set the through endpoint.
    pub fn max(mut self, max: Angle) -> Self {
        self.limits.max = max;
        self
    }

    /// Set the minimum time between steps.
    pub fn step_interval(mut self, interval: Millis) -> Self {
        self.limits.step_interval = interval;
        self
    }

    /// Set the final-approach back-off in degrees.
    pub fn back_step(mut self, degrees: u16) -> Self {
        self.limits.back_step = degrees;
        self
    }

    /// Set all limits at once.
    pub fn limits(mut self, limits: MotionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Bind the completion handler.
    pub fn on_finished(mut self, handler: H) -> Self {
        self.on_finished = Some(handler);
        self
    }

    /// Configure from a ServoConfig.
    pub fn from_servo_config(mut self, config: &ServoConfig) -> Self {
        self.name = Some(config.name.clone());
        self.limits = MotionLimits {
            min: config.min,
            max: config.max,
            step_interval: config.step_interval,
            back_step: config.back_step,
        };
        self
    }

    /// Configure from SystemConfig by servo key.
    pub fn from_config(self, config: &SystemConfig, key: &str) -> Result<Self> {
        let servo_config = config.servo(key).ok_or_else(|| {
            Error::Config(ConfigError::ServoNotFound(
                heapless::String::try_from(key).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_servo_config(servo_config))
    }

    /// Build the ServoActuator.
    ///
    /// The actuator still needs `init` before it will move.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is missing or the limits are invalid.
    pub fn build(self) -> Result<ServoActuator<S, H>> {
        let driver = self.driver.ok_or(ConfigError::Missing("driver"))?;
        self.limits.validate()?;

        let mut actuator = ServoActuator::with_limits(driver, self.limits);
        if let Some(name) = self.name {
            actuator.set_name(name.as_str());
        }
        actuator.on_finished(self.on_finished);
        Ok(actuator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::servo::MockServo;

    #[test]
    fn test_build_requires_driver() {
        let result = ServoActuatorBuilder::<MockServo>::new().build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::Missing("driver")))
        ));
    }

    #[test]
    fn test_build_rejects_inverted_limits() {
        let result = ServoActuatorBuilder::<MockServo>::new()
            .driver(MockServo::new())
            .min(Angle(100))
            .max(Angle(60))
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidLimits { min: 100, max: 60 }))
        ));
    }

    #[test]
    fn test_build_manual() {
        let actuator = ServoActuatorBuilder::<MockServo>::new()
            .driver(MockServo::new())
            .name("Yard lead")
            .min(Angle(60))
            .max(Angle(100))
            .step_interval(Millis(20))
            .back_step(2)
            .build()
            .unwrap();

        assert_eq!(actuator.name(), "Yard lead");
        assert_eq!(actuator.limits().min, Angle(60));
        assert_eq!(actuator.limits().max, Angle(100));
        assert_eq!(actuator.limits().step_interval, Millis(20));
        assert_eq!(actuator.limits().back_step, 2);
        assert!(!actuator.has_on_finished());
    }

    #[test]
    fn test_long_name_is_truncated() {
        let actuator = ServoActuatorBuilder::<MockServo>::new()
            .driver(MockServo::new())
            .name("Harbour branch double-slip turnout no. 12")
            .build()
            .unwrap();

        assert_eq!(actuator.name(), "Harbour branch double-slip turno");
    }

    #[test]
    fn test_unknown_servo_key() {
        let config = SystemConfig::default();
        let result = ServoActuatorBuilder::<MockServo>::new().from_config(&config, "missing");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ServoNotFound(_)))
        ));
    }
}

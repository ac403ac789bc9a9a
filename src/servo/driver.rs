//! Servo driver trait.

use crate::config::units::Angle;

/// Positional servo driver.
///
/// One driver owns one signal pin. The actuator takes the driver by value, so
/// a pin is never shared between two actuators.
///
/// # Example Implementation
///
/// ```rust
/// use turnout_servo::servo::ServoDriver;
/// use turnout_servo::Angle;
///
/// struct LoggingServo {
///     angle: Angle,
/// }
///
/// impl ServoDriver for LoggingServo {
///     type Error = core::convert::Infallible;
///
///     fn attach(&mut self) -> Result<(), Self::Error> {
///         Ok(())
///     }
///
///     fn write(&mut self, angle: Angle) -> Result<(), Self::Error> {
///         self.angle = angle;
///         Ok(())
///     }
///
///     fn read(&self) -> Result<Angle, Self::Error> {
///         Ok(self.angle)
///     }
/// }
/// ```
pub trait ServoDriver {
    /// Error type for driver operations.
    type Error: core::fmt::Debug;

    /// Start generating the servo signal on the bound pin.
    fn attach(&mut self) -> Result<(), Self::Error>;

    /// Command the horn to an absolute angle.
    fn write(&mut self, angle: Angle) -> Result<(), Self::Error>;

    /// Angle last commanded to the hardware.
    fn read(&self) -> Result<Angle, Self::Error>;
}

impl<T: ServoDriver + ?Sized> ServoDriver for &mut T {
    type Error = T::Error;

    fn attach(&mut self) -> Result<(), Self::Error> {
        T::attach(self)
    }

    fn write(&mut self, angle: Angle) -> Result<(), Self::Error> {
        T::write(self, angle)
    }

    fn read(&self) -> Result<Angle, Self::Error> {
        T::read(self)
    }
}

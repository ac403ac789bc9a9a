//! Servo hardware boundary.
//!
//! The actuator never touches PWM registers itself. It drives anything that
//! implements [`ServoDriver`] and reads time from a [`Clock`].
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`ServoDriver`] | attach / write angle / read angle |
//! | [`PwmServo`] | [`ServoDriver`] over an `embedded_hal::pwm::SetDutyCycle` channel |
//! | [`Clock`] | Monotonic millisecond time source |
//!
//! [`MockServo`] and [`MockClock`] stand in for hardware in tests and demos.

mod clock;
mod driver;
mod mock;
mod pwm;

pub use clock::Clock;
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use driver::ServoDriver;
pub use mock::{MockClock, MockServo, MockServoError, MOCK_HISTORY};
pub use pwm::{PulseRange, PwmServo, PwmServoError};

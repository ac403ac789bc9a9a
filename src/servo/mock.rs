//! Mock hardware for tests and desktop demos.
//!
//! | Mock | Implements | Purpose |
//! |------|------------|---------|
//! | [`MockServo`] | [`ServoDriver`] | Records every attach and write |
//! | [`MockClock`] | [`Clock`] | Controllable time source |
//!
//! # Example
//!
//! ```rust
//! use turnout_servo::servo::{MockServo, ServoDriver};
//! use turnout_servo::Angle;
//!
//! let mut servo = MockServo::new();
//! servo.attach().unwrap();
//! servo.write(Angle(80)).unwrap();
//!
//! assert!(servo.attached);
//! assert_eq!(servo.writes.as_slice(), &[Angle(80)]);
//! ```

use heapless::Vec;

use crate::config::units::Angle;

use super::clock::Clock;
use super::driver::ServoDriver;
use super::pwm::CENTER;

/// Number of writes a [`MockServo`] remembers.
pub const MOCK_HISTORY: usize = 256;

/// Error raised by a [`MockServo`] armed with `fail_writes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockServoError;

/// Mock servo driver.
///
/// Public fields expose everything the actuator did to it.
#[derive(Debug)]
pub struct MockServo {
    /// Whether `attach` was called.
    pub attached: bool,
    /// Angle the horn currently holds.
    pub angle: Angle,
    /// Every written angle, oldest first (stops recording when full).
    pub writes: Vec<Angle, MOCK_HISTORY>,
    /// Make `attach` and `write` fail.
    pub fail_writes: bool,
}

impl MockServo {
    /// Creates a detached mock servo centered at 90 degrees.
    pub fn new() -> Self {
        Self {
            attached: false,
            angle: CENTER,
            writes: Vec::new(),
            fail_writes: false,
        }
    }

    /// Creates a mock whose horn starts at a given angle.
    pub fn at(angle: Angle) -> Self {
        Self {
            angle,
            ..Self::new()
        }
    }

    /// Number of writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Most recent write, if any.
    pub fn last_write(&self) -> Option<Angle> {
        self.writes.last().copied()
    }
}

impl Default for MockServo {
    fn default() -> Self {
        Self::new()
    }
}

impl ServoDriver for MockServo {
    type Error = MockServoError;

    fn attach(&mut self) -> Result<(), MockServoError> {
        if self.fail_writes {
            return Err(MockServoError);
        }
        self.attached = true;
        Ok(())
    }

    fn write(&mut self, angle: Angle) -> Result<(), MockServoError> {
        if self.fail_writes || !self.attached {
            return Err(MockServoError);
        }
        self.angle = angle;
        let _ = self.writes.push(angle);
        Ok(())
    }

    fn read(&self) -> Result<Angle, MockServoError> {
        Ok(self.angle)
    }
}

/// Mock clock for testing.
///
/// ```rust
/// use turnout_servo::servo::{Clock, MockClock};
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.advance(100);
/// assert_eq!(clock.now_ms(), 100);
/// ```
#[derive(Debug, Default)]
pub struct MockClock {
    current_ms: u64,
}

impl MockClock {
    /// Creates a new mock clock starting at 0ms.
    pub fn new() -> Self {
        Self { current_ms: 0 }
    }

    /// Sets the current time in milliseconds.
    pub fn set(&mut self, ms: u64) {
        self.current_ms = ms;
    }

    /// Advances the clock by the given duration.
    pub fn advance(&mut self, ms: u64) {
        self.current_ms += ms;
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.current_ms
    }
}

//! PWM-backed servo driver.
//!
//! Maps angles onto a pulse width inside one PWM frame and writes the matching
//! duty cycle through `embedded_hal::pwm::SetDutyCycle`.

use embedded_hal::pwm::SetDutyCycle;

use crate::config::units::Angle;

use super::driver::ServoDriver;

/// Angle reported by [`PwmServo::read`] before the first write.
pub const CENTER: Angle = Angle(90);

/// Pulse timing of a hobby servo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseRange {
    /// Pulse width at 0 degrees, in microseconds.
    pub min_us: u32,
    /// Pulse width at 180 degrees, in microseconds.
    pub max_us: u32,
    /// PWM frame length, in microseconds (20 000 for 50 Hz).
    pub period_us: u32,
}

impl PulseRange {
    /// SG90-class micro servo: 500-2400 µs at 50 Hz.
    pub const SG90: PulseRange = PulseRange {
        min_us: 500,
        max_us: 2400,
        period_us: 20_000,
    };

    /// Pulse width for an angle, rounded to the nearest microsecond.
    pub fn pulse_us(&self, angle: Angle) -> u32 {
        let angle = angle.value().min(Angle::MAX.value()) as u32;
        let span = self.max_us.saturating_sub(self.min_us);
        let max = Angle::MAX.value() as u32;
        self.min_us + (span * angle + max / 2) / max
    }

    /// Duty cycle for a pulse width given the channel's full-scale duty.
    pub fn duty(&self, pulse_us: u32, max_duty: u16) -> u16 {
        let duty = (pulse_us as u64 * max_duty as u64 + self.period_us as u64 / 2)
            / self.period_us as u64;
        duty.min(max_duty as u64) as u16
    }
}

impl Default for PulseRange {
    fn default() -> Self {
        Self::SG90
    }
}

/// Errors from [`PwmServo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmServoError<E> {
    /// `write` called before `attach`
    Detached,
    /// The PWM channel failed
    Pwm(E),
}

/// Servo on one PWM channel.
///
/// The channel must already run at the frame rate in [`PulseRange::period_us`].
pub struct PwmServo<P> {
    channel: P,
    pulses: PulseRange,
    max_duty: Option<u16>,
    angle: Angle,
}

impl<P: SetDutyCycle> PwmServo<P> {
    /// Wrap a channel using SG90 timing.
    pub fn new(channel: P) -> Self {
        Self::with_pulses(channel, PulseRange::SG90)
    }

    /// Wrap a channel with custom pulse timing.
    pub fn with_pulses(channel: P, pulses: PulseRange) -> Self {
        Self {
            channel,
            pulses,
            max_duty: None,
            angle: CENTER,
        }
    }

    /// Pulse timing in use.
    pub fn pulses(&self) -> PulseRange {
        self.pulses
    }

    /// Whether `attach` has run.
    pub fn is_attached(&self) -> bool {
        self.max_duty.is_some()
    }

    /// Give back the PWM channel.
    pub fn release(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> ServoDriver for PwmServo<P> {
    type Error = PwmServoError<P::Error>;

    fn attach(&mut self) -> Result<(), Self::Error> {
        self.max_duty = Some(self.channel.max_duty_cycle());
        Ok(())
    }

    fn write(&mut self, angle: Angle) -> Result<(), Self::Error> {
        let max_duty = self.max_duty.ok_or(PwmServoError::Detached)?;
        let angle = angle.clamp_to(Angle::MIN, Angle::MAX);
        let duty = self.pulses.duty(self.pulses.pulse_us(angle), max_duty);
        self.channel
            .set_duty_cycle(duty)
            .map_err(PwmServoError::Pwm)?;
        self.angle = angle;
        Ok(())
    }

    fn read(&self) -> Result<Angle, Self::Error> {
        Ok(self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::pwm::{Mock, Transaction};

    #[test]
    fn test_pulse_mapping() {
        let pulses = PulseRange::SG90;
        assert_eq!(pulses.pulse_us(Angle(0)), 500);
        assert_eq!(pulses.pulse_us(Angle(90)), 1450);
        assert_eq!(pulses.pulse_us(Angle(180)), 2400);
        // Out-of-range angles pin to the end of the pulse range.
        assert_eq!(pulses.pulse_us(Angle(250)), 2400);
    }

    #[test]
    fn test_duty_scaling() {
        let pulses = PulseRange::SG90;
        // Full-scale duty equal to the period in µs maps 1:1.
        assert_eq!(pulses.duty(1450, 20_000), 1450);
        // 16-bit channel: 1500 µs of 20 ms is 7.5%.
        assert_eq!(pulses.duty(1500, 65_535), 4915);
    }

    #[test]
    fn test_write_before_attach_fails() {
        let expectations: [Transaction; 0] = [];
        let mut channel = Mock::new(&expectations);
        let mut servo = PwmServo::new(channel.clone());

        assert!(matches!(servo.write(Angle(80)), Err(PwmServoError::Detached)));
        assert_eq!(servo.read().unwrap(), CENTER);

        channel.done();
    }

    #[test]
    fn test_attach_then_write() {
        let expectations = [
            Transaction::max_duty_cycle(20_000),
            Transaction::set_duty_cycle(1292),
        ];
        let mut channel = Mock::new(&expectations);
        let mut servo = PwmServo::new(channel.clone());

        servo.attach().unwrap();
        assert!(servo.is_attached());
        servo.write(Angle(75)).unwrap();
        assert_eq!(servo.read().unwrap(), Angle(75));

        channel.done();
    }
}

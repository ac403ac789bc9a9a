//! Basic turnout control example.
//!
//! Drives one turnout servo through a throw and back on a simulated PWM
//! channel, ticking from a plain main loop.
//!
//! Run with: `cargo run --example basic_turnout`

use std::time::Duration;

use turnout_servo::{
    servo::{PwmServo, StdClock},
    Angle, Clock, Endpoint, Millis, ServoActuator, TickOutcome,
};

/// Mock PWM channel for demonstration.
struct MockPwm {
    duty: u16,
}

impl embedded_hal::pwm::ErrorType for MockPwm {
    type Error = core::convert::Infallible;
}

impl embedded_hal::pwm::SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        // 16-bit timer at 50 Hz
        u16::MAX
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}

/// Delay provider backed by the OS sleep.
struct SleepDelay;

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }
}

fn turnout_done() {
    println!("  -> turnout settled");
}

fn main() {
    println!("=== Basic Turnout Example ===\n");

    let clock = StdClock::new();
    let mut turnout: ServoActuator<_> = ServoActuator::new(PwmServo::new(MockPwm { duty: 0 }));
    turnout.set_name("demo turnout");
    turnout
        .configure_limits(Angle(70), Angle(95), Millis(20), 2)
        .expect("valid limits");
    turnout.on_finished(Some(turnout_done));

    turnout
        .init(&mut SleepDelay, clock.now_ms())
        .expect("servo attach");
    println!("Parked at {} ({})", turnout.current(), turnout.position().as_str());

    for request in [Endpoint::Max, Endpoint::Min] {
        match request {
            Endpoint::Max => turnout.move_to_through(),
            _ => turnout.move_to_diverge(),
        }
        println!("\nThrowing to {}", request.as_str());

        let mut steps = 0;
        while turnout.status() {
            match turnout.poll(&clock).expect("servo write") {
                TickOutcome::Stepped | TickOutcome::BackStep | TickOutcome::Arrived => steps += 1,
                TickOutcome::Waiting => std::thread::sleep(Duration::from_millis(1)),
                _ => {}
            }
        }

        println!(
            "Reached {} after {} steps (driver at {})",
            turnout.current(),
            steps,
            turnout.driver_angle().expect("servo read")
        );
    }

    println!("\n=== Example Complete ===");
}

//! Example: Configuration-driven turnouts.
//!
//! This example demonstrates how to:
//! - Load turnout servo limits from TOML
//! - Build actuators from named entries
//! - Drive them from one control loop on a simulated clock
//!
//! Run with: `cargo run --example config_driven --features std`

use turnout_servo::{
    error::Result,
    parse_config,
    servo::{MockClock, MockServo},
    Angle, Clock, ServoActuator, ServoActuatorBuilder,
};

const LAYOUT: &str = r#"
[servos.yard_lead]
name = "Yard lead"
min_degrees = 70
max_degrees = 95
step_interval_ms = 40
back_step = 2

[servos.siding]
name = "Siding"
step_interval_ms = 60
"#;

fn finished() {
    println!("  -> a turnout finished moving");
}

fn build(config: &turnout_servo::SystemConfig, key: &str) -> Result<ServoActuator<MockServo>> {
    ServoActuatorBuilder::<MockServo>::new()
        .from_config(config, key)?
        .driver(MockServo::new())
        .on_finished(finished)
        .build()
}

fn main() -> Result<()> {
    println!("=== Configuration-Driven Turnouts ===\n");

    let config = parse_config(LAYOUT)?;
    for key in config.servo_names() {
        let servo = config.servo(key).expect("listed key exists");
        println!(
            "{}: '{}' {}..{} every {} ms, back-step {}",
            key,
            servo.name,
            servo.min,
            servo.max,
            servo.step_interval.value(),
            servo.back_step
        );
    }

    let mut clock = MockClock::new();
    let mut yard = build(&config, "yard_lead")?;
    let mut siding = build(&config, "siding")?;

    let mut delay = embedded_hal_mock::eh1::delay::NoopDelay::new();
    yard.init(&mut delay, 0)?;
    siding.init(&mut delay, 0)?;

    yard.move_to_through();
    siding.move_to(Angle(80));

    // Each turnout keeps its own pace; the loop just keeps ticking both.
    while yard.status() || siding.status() {
        clock.advance(10);
        yard.poll(&clock)?;
        siding.poll(&clock)?;
    }

    println!(
        "\nAfter {} ms: {} at {} ({}), {} at {} ({})",
        clock.now_ms(),
        yard.name(),
        yard.current(),
        yard.position().as_str(),
        siding.name(),
        siding.current(),
        siding.position().as_str()
    );

    Ok(())
}

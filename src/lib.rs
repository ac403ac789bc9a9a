//! # turnout-servo
//!
//! Non-blocking servo actuator for model-railroad turnouts, with embedded-hal
//! 1.0 support.
//!
//! ## Features
//!
//! - **Non-blocking**: `tick()` does at most one step per call and never waits
//! - **Time-gated stepping**: the horn moves one degree per step interval
//! - **Back-step**: optional back-off inside the endpoint, then settle
//! - **Retargeting**: a new request mid-move reverses in place
//! - **Completion handler**: runs exactly once per finished move
//! - **Configuration-driven**: define turnouts in TOML files
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use turnout_servo::{ServoActuator, servo::PwmServo};
//!
//! let mut turnout: ServoActuator<_> = ServoActuator::new(PwmServo::new(pwm_channel));
//! turnout.configure_limits(Angle(70), Angle(95), Millis(40), 2)?;
//! turnout.init(&mut delay, clock.now_ms())?;
//!
//! turnout.move_to_through();
//! loop {
//!     turnout.poll(&clock)?;
//!     // ...rest of the main loop
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing, and `StdClock`
//! - `alloc`: Enables boxed completion handlers for no_std with allocator
//! - `log` (default): Logs through the `log` facade
//! - `defmt`: Logs through defmt for embedded targets (instead of `log`)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible below.
#[macro_use]
mod fmt;

// Core modules
pub mod actuator;
pub mod config;
pub mod error;
pub mod servo;

// Re-exports for ergonomic API
pub use actuator::{
    Endpoint, MotionPhase, MotionState, OnFinished, ServoActuator, ServoActuatorBuilder,
    TickOutcome,
};
pub use config::{validate_config, MotionLimits, ServoConfig, SystemConfig};
pub use error::{Error, Result};
pub use servo::{Clock, ServoDriver};

#[cfg(feature = "alloc")]
pub use actuator::BoxedHandler;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Angle, Millis};

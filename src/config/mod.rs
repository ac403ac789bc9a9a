//! Configuration module for turnout-servo.
//!
//! Provides motion limits and named servo configurations, loaded from TOML
//! files (with `std` feature) or built in code.

mod limits;
#[cfg(feature = "std")]
mod loader;
mod servo;
mod system;
pub mod units;
mod validation;

pub use limits::{MotionLimits, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP_INTERVAL};
pub use servo::ServoConfig;
pub use system::{SystemConfig, MAX_SERVOS};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Angle, Millis};

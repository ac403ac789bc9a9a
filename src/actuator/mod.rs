//! Actuator module for turnout-servo.
//!
//! Provides the non-blocking turnout servo actuator and its builder.

mod builder;
mod callback;
mod servo_actuator;
pub mod state;

pub use builder::ServoActuatorBuilder;
#[cfg(feature = "alloc")]
pub use callback::BoxedHandler;
pub use callback::OnFinished;
pub use servo_actuator::ServoActuator;
pub use state::{Endpoint, MotionPhase, MotionState, TickOutcome};

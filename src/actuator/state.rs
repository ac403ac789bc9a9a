//! Motion state of a turnout servo.
//!
//! Retargeting has to happen while a move is in flight, so the state lives in
//! plain runtime values rather than in the actuator's type.

use crate::config::units::Angle;
use crate::config::MotionLimits;

/// Which end of travel is reached or being approached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Endpoint {
    /// Intermediate position, or not yet initialized.
    #[default]
    None,
    /// Diverging route (lower limit).
    Min,
    /// Through route (upper limit).
    Max,
}

impl Endpoint {
    /// Classify a position against the limits.
    pub fn of(position: Angle, limits: &MotionLimits) -> Self {
        if position == limits.min {
            Endpoint::Min
        } else if position == limits.max {
            Endpoint::Max
        } else {
            Endpoint::None
        }
    }

    /// Returns the endpoint as a lowercase string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Endpoint::None => "none",
            Endpoint::Min => "diverge",
            Endpoint::Max => "through",
        }
    }
}

/// Coarse phase, for display/debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Resting; `tick` does nothing.
    Idle,
    /// Stepping toward the target.
    Moving,
    /// Back-step written, waiting to settle on the target.
    Settling,
}

impl MotionPhase {
    /// Get the phase name as a static string.
    pub const fn name(&self) -> &'static str {
        match self {
            MotionPhase::Idle => "Idle",
            MotionPhase::Moving => "Moving",
            MotionPhase::Settling => "Settling",
        }
    }
}

/// What one call to `tick` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Nothing to do.
    Idle,
    /// Moving, but the step interval has not elapsed.
    Waiting,
    /// Moved one unit toward the target.
    Stepped,
    /// Backed off inside the endpoint; the next step settles.
    BackStep,
    /// Reached the target; the completion handler has run.
    Arrived,
}

/// Mutable motion state, owned by one actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionState {
    /// Last in-range position written to the driver.
    pub current: Angle,
    /// Pending target; `None` when idle.
    pub target: Option<Angle>,
    /// Endpoint last reached or currently pending.
    pub endpoint: Endpoint,
    /// Clock value of the last applied step.
    pub last_step_ms: u64,
    /// Back-step angle on the driver while settling.
    pub back_off: Option<Angle>,
}

impl MotionState {
    /// Idle at a position.
    pub fn resting(current: Angle, endpoint: Endpoint, now_ms: u64) -> Self {
        Self {
            current,
            target: None,
            endpoint,
            last_step_ms: now_ms,
            back_off: None,
        }
    }

    /// Whether a move is pending.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.target.is_some()
    }

    /// Current phase.
    pub fn phase(&self) -> MotionPhase {
        match (self.target, self.back_off) {
            (None, _) => MotionPhase::Idle,
            (Some(_), Some(_)) => MotionPhase::Settling,
            (Some(_), None) => MotionPhase::Moving,
        }
    }

    /// Angle the driver was last told to hold.
    #[inline]
    pub fn commanded(&self) -> Angle {
        self.back_off.unwrap_or(self.current)
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::resting(crate::config::DEFAULT_MIN, Endpoint::None, 0)
    }
}

/// Unit step from `current` toward `target`: `-1`, `0`, or `1`.
#[inline]
pub(crate) fn direction(current: Angle, target: Angle) -> i32 {
    (target.value() as i32 - current.value() as i32).signum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Millis;

    #[test]
    fn test_endpoint_classification() {
        let limits = MotionLimits::default();
        assert_eq!(Endpoint::of(Angle(75), &limits), Endpoint::Min);
        assert_eq!(Endpoint::of(Angle(85), &limits), Endpoint::Max);
        assert_eq!(Endpoint::of(Angle(80), &limits), Endpoint::None);

        let wide = MotionLimits::new(Angle(60), Angle(100), Millis(10), 0).unwrap();
        assert_eq!(Endpoint::of(Angle(85), &wide), Endpoint::None);
    }

    #[test]
    fn test_phase() {
        let mut state = MotionState::resting(Angle(75), Endpoint::Min, 0);
        assert_eq!(state.phase(), MotionPhase::Idle);
        assert!(!state.is_moving());

        state.target = Some(Angle(85));
        assert_eq!(state.phase(), MotionPhase::Moving);

        assert_eq!(state.commanded(), Angle(75));

        state.back_off = Some(Angle(83));
        assert_eq!(state.phase(), MotionPhase::Settling);
        assert_eq!(state.commanded(), Angle(83));
    }

    #[test]
    fn test_direction() {
        assert_eq!(direction(Angle(75), Angle(85)), 1);
        assert_eq!(direction(Angle(85), Angle(75)), -1);
        assert_eq!(direction(Angle(80), Angle(80)), 0);
    }
}

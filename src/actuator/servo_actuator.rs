//! Turnout servo actuator.
//!
//! Generic over a [`ServoDriver`] and a completion handler. All motion happens
//! inside [`ServoActuator::tick`], one unit step per elapsed step interval.

use embedded_hal::delay::DelayNs;

use crate::config::units::{Angle, Millis};
use crate::config::MotionLimits;
use crate::error::{Result, ServoError};
use crate::servo::{Clock, ServoDriver};

use super::callback::OnFinished;
use super::state::{direction, Endpoint, MotionPhase, MotionState, TickOutcome};

/// Non-blocking actuator for one turnout servo.
///
/// Generic over:
/// - `S`: the servo driver, owned exclusively
/// - `H`: completion handler type (defaults to a plain `fn()`)
///
/// # Example
///
/// ```rust
/// use embedded_hal_mock::eh1::delay::NoopDelay;
/// use turnout_servo::servo::MockServo;
/// use turnout_servo::{Angle, Endpoint, ServoActuator};
///
/// let mut turnout: ServoActuator<_> = ServoActuator::new(MockServo::new());
/// turnout.init(&mut NoopDelay::new(), 0).unwrap();
///
/// turnout.move_to_through();
/// let mut now = 0;
/// while turnout.status() {
///     now += 100;
///     turnout.tick(now).unwrap();
/// }
///
/// assert_eq!(turnout.current(), Angle(85));
/// assert_eq!(turnout.position(), Endpoint::Max);
/// ```
pub struct ServoActuator<S, H = fn()>
where
    S: ServoDriver,
    H: OnFinished,
{
    /// Servo driver (owns the signal pin).
    driver: S,

    /// Endpoints and pacing.
    limits: MotionLimits,

    /// Position, target, and step timing.
    state: MotionState,

    /// Single completion handler slot.
    on_finished: Option<H>,

    /// Servo name for logging/debugging.
    name: heapless::String<32>,

    /// Set once `init` has attached the driver.
    initialized: bool,
}

impl<S, H> ServoActuator<S, H>
where
    S: ServoDriver,
    H: OnFinished,
{
    /// Bind to a driver with the default limits (75-85 degrees, 100 ms).
    pub fn new(driver: S) -> Self {
        Self::with_limits(driver, MotionLimits::default())
    }

    /// Bind to a driver with explicit limits.
    pub(crate) fn with_limits(driver: S, limits: MotionLimits) -> Self {
        Self {
            driver,
            limits,
            state: MotionState::resting(limits.min, Endpoint::None, 0),
            on_finished: None,
            name: bounded_name("servo"),
            initialized: false,
        }
    }

    /// Set the name used in log output. Truncated to 32 bytes.
    pub fn set_name(&mut self, name: &str) {
        self.name = bounded_name(name);
    }

    /// Get the servo name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Replace the limits.
    ///
    /// A move already in flight keeps heading to the target it was given.
    /// While idle, [`position`](Self::position) is reclassified against the
    /// new endpoints.
    ///
    /// # Errors
    ///
    /// Rejects `min >= max` and angles outside the servo range, leaving the
    /// previous limits in place.
    pub fn configure_limits(
        &mut self,
        min: Angle,
        max: Angle,
        step_interval: Millis,
        back_step: u16,
    ) -> Result<()> {
        let limits = MotionLimits::new(min, max, step_interval, back_step)?;
        self.set_limits(limits)
    }

    /// Replace the limits with a prebuilt value.
    ///
    /// # Errors
    ///
    /// Same as [`configure_limits`](Self::configure_limits).
    pub fn set_limits(&mut self, limits: MotionLimits) -> Result<()> {
        limits.validate()?;
        debug!(
            "{}: limits {}..{} every {} ms, back-step {}",
            self.name.as_str(),
            limits.min.value(),
            limits.max.value(),
            limits.step_interval.value(),
            limits.back_step
        );
        self.limits = limits;
        if !self.state.is_moving() {
            self.state.endpoint = Endpoint::of(self.state.current, &self.limits);
        }
        Ok(())
    }

    /// Get the limits.
    #[inline]
    pub fn limits(&self) -> &MotionLimits {
        &self.limits
    }

    /// Attach the driver and park the horn on the diverging endpoint.
    ///
    /// This is the only blocking call: after writing the endpoint it waits
    /// one step interval on `delay` so the horn is at rest before the control
    /// loop starts. Records `now_ms` as the last step time.
    ///
    /// # Errors
    ///
    /// Returns [`ServoError::Driver`] if the driver fails to attach or write.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D, now_ms: u64) -> Result<()> {
        self.driver.attach().map_err(|_| ServoError::Driver)?;

        let previous = self.driver.read().map_err(|_| ServoError::Driver)?;
        debug!(
            "{}: attached, horn reported at {}",
            self.name.as_str(),
            previous.value()
        );

        let home = self.limits.min;
        self.driver.write(home).map_err(|_| ServoError::Driver)?;
        delay.delay_ms(self.limits.step_interval.value());

        self.state = MotionState::resting(home, Endpoint::Min, now_ms);
        self.initialized = true;
        info!("{}: parked at {}", self.name.as_str(), home.value());
        Ok(())
    }

    /// Whether `init` has completed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Head for the through endpoint (upper limit).
    pub fn move_to_through(&mut self) {
        self.request(self.limits.max);
    }

    /// Head for the diverging endpoint (lower limit).
    pub fn move_to_diverge(&mut self) {
        self.request(self.limits.min);
    }

    /// Head for an arbitrary position, clamped to the limits.
    pub fn move_to(&mut self, position: Angle) {
        self.request(self.limits.clamp(position));
    }

    fn request(&mut self, target: Angle) {
        if self.state.target == Some(target) {
            return;
        }

        if !self.state.is_moving() && self.state.current == target {
            trace!("{}: already at {}", self.name.as_str(), target.value());
            self.state.endpoint = Endpoint::of(target, &self.limits);
            return;
        }

        if self.state.is_moving() {
            debug!(
                "{}: retarget {} at {}",
                self.name.as_str(),
                target.value(),
                self.state.current.value()
            );
        } else {
            debug!(
                "{}: moving {} -> {}",
                self.name.as_str(),
                self.state.current.value(),
                target.value()
            );
        }

        self.state.target = Some(target);
        self.state.endpoint = Endpoint::of(target, &self.limits);
        self.state.back_off = None;
    }

    /// Advance the motion. Call on every pass of the main loop.
    ///
    /// Returns at once when idle or when less than one step interval has
    /// passed since the last step. Otherwise writes exactly one position to
    /// the driver. On arrival the actuator goes idle and the completion
    /// handler runs once before this returns.
    ///
    /// With a back-step configured, the step that would land on the target
    /// instead writes the target backed off by `back_step` degrees, held
    /// inside the limits. The following step writes the target itself.
    ///
    /// # Errors
    ///
    /// - [`ServoError::NotInitialized`] if a move is pending before `init`
    /// - [`ServoError::Driver`] if the write fails; state is unchanged and the
    ///   step is retried on the next call
    pub fn tick(&mut self, now_ms: u64) -> Result<TickOutcome> {
        let Some(target) = self.state.target else {
            return Ok(TickOutcome::Idle);
        };

        if !self.initialized {
            return Err(ServoError::NotInitialized.into());
        }

        if !self
            .limits
            .step_interval
            .has_elapsed(self.state.last_step_ms, now_ms)
        {
            return Ok(TickOutcome::Waiting);
        }

        if self.state.back_off.is_some() {
            self.write(target)?;
            self.state.current = target;
            self.state.last_step_ms = now_ms;
            return Ok(self.arrive(target));
        }

        let dir = direction(self.state.current, target);
        let next = self.state.current.offset(dir);

        if next == target && dir != 0 && self.limits.back_step > 0 {
            let back_off = self
                .limits
                .clamp(target.offset(-dir * self.limits.back_step as i32));
            self.write(back_off)?;
            self.state.back_off = Some(back_off);
            self.state.last_step_ms = now_ms;
            trace!(
                "{}: back-step to {} before {}",
                self.name.as_str(),
                back_off.value(),
                target.value()
            );
            return Ok(TickOutcome::BackStep);
        }

        self.write(next)?;
        self.state.current = next;
        self.state.last_step_ms = now_ms;

        if next == target {
            return Ok(self.arrive(target));
        }

        trace!("{}: step to {}", self.name.as_str(), next.value());
        Ok(TickOutcome::Stepped)
    }

    /// Read the clock and [`tick`](Self::tick).
    pub fn poll<C: Clock>(&mut self, clock: &C) -> Result<TickOutcome> {
        self.tick(clock.now_ms())
    }

    fn write(&mut self, angle: Angle) -> Result<()> {
        if self.driver.write(angle).is_err() {
            warn!("{}: driver rejected {}", self.name.as_str(), angle.value());
            return Err(ServoError::Driver.into());
        }
        Ok(())
    }

    fn arrive(&mut self, target: Angle) -> TickOutcome {
        self.state.target = None;
        self.state.back_off = None;
        self.state.endpoint = Endpoint::of(target, &self.limits);
        info!(
            "{}: reached {} ({})",
            self.name.as_str(),
            target.value(),
            self.state.endpoint.as_str()
        );

        if let Some(handler) = self.on_finished.as_mut() {
            handler.on_finished();
        }

        TickOutcome::Arrived
    }

    /// `true` while a move is in progress.
    #[inline]
    pub fn status(&self) -> bool {
        self.state.is_moving()
    }

    /// Endpoint last reached, or the one being approached.
    #[inline]
    pub fn position(&self) -> Endpoint {
        self.state.endpoint
    }

    /// Rebind the completion handler. `None` clears it.
    pub fn on_finished(&mut self, handler: Option<H>) {
        self.on_finished = handler;
    }

    /// Remove the completion handler.
    pub fn clear_on_finished(&mut self) {
        self.on_finished = None;
    }

    /// Whether a completion handler is bound.
    #[inline]
    pub fn has_on_finished(&self) -> bool {
        self.on_finished.is_some()
    }

    /// Last in-range position written.
    #[inline]
    pub fn current(&self) -> Angle {
        self.state.current
    }

    /// Pending target, if moving.
    #[inline]
    pub fn target(&self) -> Option<Angle> {
        self.state.target
    }

    /// Current motion phase.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.state.phase()
    }

    /// Snapshot of the motion state.
    #[inline]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Angle the driver itself reports.
    ///
    /// # Errors
    ///
    /// Returns [`ServoError::Driver`] if the read fails.
    pub fn driver_angle(&self) -> Result<Angle> {
        Ok(self.driver.read().map_err(|_| ServoError::Driver)?)
    }

    /// Borrow the driver.
    #[inline]
    pub fn driver(&self) -> &S {
        &self.driver
    }

    /// Borrow the driver mutably.
    ///
    /// Writing through it bypasses the motion state.
    #[inline]
    pub fn driver_mut(&mut self) -> &mut S {
        &mut self.driver
    }

    /// Tear down the actuator and give the driver back.
    pub fn release(self) -> S {
        self.driver
    }
}

/// Copy `name` into a name buffer, dropping whole characters past 32 bytes.
pub(crate) fn bounded_name(name: &str) -> heapless::String<32> {
    let mut bounded = heapless::String::new();
    for c in name.chars() {
        if bounded.push(c).is_err() {
            break;
        }
    }
    bounded
}

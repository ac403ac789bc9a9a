//! Property tests for the stepping state machine.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal_mock::eh1::delay::NoopDelay;
use proptest::prelude::*;
use turnout_servo::servo::MockServo;
use turnout_servo::{Angle, BoxedHandler, Millis, ServoActuator};

type Turnout = ServoActuator<MockServo, BoxedHandler>;

fn parked(min: u16, max: u16, interval: u32, back_step: u16) -> (Turnout, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let mut turnout: Turnout = ServoActuator::new(MockServo::new());
    turnout
        .configure_limits(Angle(min), Angle(max), Millis(interval), back_step)
        .unwrap();
    turnout.on_finished(Some(Box::new(move || counter.set(counter.get() + 1))));
    turnout.init(&mut NoopDelay::new(), 0).unwrap();
    (turnout, calls)
}

/// Tick once per interval until idle or `budget` ticks spent. Returns the clock.
fn settle(turnout: &mut Turnout, mut now: u64, interval: u32, budget: usize) -> u64 {
    for _ in 0..budget {
        if !turnout.status() {
            break;
        }
        now += interval.max(1) as u64;
        turnout.tick(now).unwrap();
    }
    now
}

fn limits() -> impl Strategy<Value = (u16, u16)> {
    (0u16..180).prop_flat_map(|min| (Just(min), (min + 1)..=180))
}

proptest! {
    #[test]
    fn through_converges_with_one_callback(
        (min, max) in limits(),
        interval in 0u32..500,
        back_step in 0u16..6,
    ) {
        let (mut turnout, calls) = parked(min, max, interval, back_step);
        turnout.move_to_through();

        let travel = turnout.limits().travel() as usize;
        settle(&mut turnout, 0, interval, travel + 2);

        prop_assert!(!turnout.status());
        prop_assert_eq!(turnout.current(), Angle(max));
        prop_assert_eq!(turnout.driver().last_write(), Some(Angle(max)));
        prop_assert_eq!(calls.get(), 1);
    }

    #[test]
    fn move_to_settles_within_bounds(
        (min, max) in limits(),
        target in 0u16..400,
        back_step in 0u16..6,
    ) {
        let (mut turnout, calls) = parked(min, max, 10, back_step);
        turnout.move_to(Angle(target));
        settle(&mut turnout, 0, 10, 400);

        let expected = target.clamp(min, max);
        prop_assert_eq!(turnout.current(), Angle(expected));
        prop_assert_eq!(turnout.driver().last_write(), Some(Angle(expected)));
        prop_assert!(turnout
            .driver()
            .writes
            .iter()
            .all(|a| *a >= Angle(min) && *a <= Angle(max)));
        prop_assert_eq!(calls.get(), u32::from(expected != min));
    }

    #[test]
    fn back_step_never_leaves_limits(
        (min, max) in limits(),
        back_step in 0u16..20,
    ) {
        let (mut turnout, calls) = parked(min, max, 10, back_step);
        let budget = turnout.limits().travel() as usize + 2;

        turnout.move_to_through();
        let now = settle(&mut turnout, 0, 10, budget);
        turnout.move_to_diverge();
        settle(&mut turnout, now, 10, budget);

        prop_assert!(!turnout.status());
        prop_assert_eq!(turnout.current(), Angle(min));
        let limits = *turnout.limits();
        prop_assert!(turnout.driver().writes.iter().all(|a| limits.contains(*a)));
        prop_assert_eq!(calls.get(), 2);
    }

    #[test]
    fn ticks_inside_interval_never_step(
        interval in 2u32..1000,
        offsets in prop::collection::vec(0u32..1000, 1..20),
    ) {
        let (mut turnout, _) = parked(75, 85, interval, 0);
        turnout.move_to_through();

        let writes = turnout.driver().write_count();
        for offset in offsets {
            let now = (offset % interval) as u64;
            turnout.tick(now).unwrap();
            prop_assert_eq!(turnout.current(), Angle(75));
        }
        prop_assert_eq!(turnout.driver().write_count(), writes);
    }

    #[test]
    fn retarget_fires_once_at_final_endpoint(
        steps_before in 0usize..10,
        back_step in 0u16..4,
    ) {
        let (mut turnout, calls) = parked(75, 85, 100, back_step);
        turnout.move_to_through();

        let mut now = 0;
        for _ in 0..steps_before {
            now += 100;
            turnout.tick(now).unwrap();
        }
        prop_assert!(turnout.status());
        prop_assert_eq!(calls.get(), 0);

        turnout.move_to_diverge();
        settle(&mut turnout, now, 100, 30);

        prop_assert_eq!(turnout.current(), Angle(75));
        prop_assert_eq!(calls.get(), 1);
    }
}

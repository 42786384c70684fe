//! The central piece wiring gestures to motion.

use crate::config::{Config, MAX_BUTTONS};
use crate::event::{Events, Gesture};
use crate::input;
use crate::input::snapshot::Snapshot;
use crate::log;
use crate::mapping::{Command, Mapping};
use crate::motor::Motor;
use crate::ramp::{Ramp, State};
use crate::Millis;

/// The main store of peripheral abstraction and motion state.
///
/// This struct is the central piece of the control package. It takes
/// `Snapshot` on its input, passes it to the gesture recognizers, maps the
/// recognized gestures to motion commands and drives the velocity ramp
/// with them.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub(crate) input: input::store::Store,
    ramp: Ramp,
    mapping: [Mapping; MAX_BUTTONS],
}

impl Store {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            input: input::store::Store::new(&config),
            ramp: Ramp::new(&config),
            mapping: config.button,
        }
    }

    /// Process one tick's worth of raw input.
    ///
    /// Recognized gestures are applied to the velocity ramp through the
    /// configured mapping and returned to the caller, which owns all the
    /// remaining side effects.
    pub fn apply_input_snapshot(
        &mut self,
        snapshot: Snapshot,
        now: Millis,
        motor: &mut impl Motor,
    ) -> Events {
        let events = self.input.update(snapshot, now);
        for event in &events {
            match event.gesture {
                Gesture::ExtendedHold => {
                    log::info!("Extended hold on button={:?}", event.button);
                }
                Gesture::CriticalHold => {
                    log::info!("Critical hold on button={:?}", event.button);
                }
                _ => (),
            }
            match self.mapping[event.button].command_for(event.gesture) {
                Some(Command::RampUp) => self.ramp.ramp_up(motor, now),
                Some(Command::RampDown) => self.ramp.ramp_down(),
                None => (),
            }
        }
        events
    }

    /// Advance the velocity ramp by at most one bounded step.
    pub fn tick(&mut self, now: Millis, motor: &mut impl Motor) {
        self.ramp.update(motor, now);
    }

    /// React to the device being switched on or off by the host.
    pub fn set_motion(&mut self, on: bool, motor: &mut impl Motor, now: Millis) {
        if on {
            self.ramp.ramp_up(motor, now);
        } else {
            self.ramp.ramp_down();
        }
    }

    #[must_use]
    pub fn motion_state(&self) -> State {
        self.ramp.state()
    }

    #[must_use]
    pub fn motion_enabled(&self) -> bool {
        self.ramp.is_enabled()
    }

    /// Velocity the actuator was last commanded to.
    #[must_use]
    pub fn velocity(&self) -> i32 {
        self.ramp.velocity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::motor::testing::{Call, Spy};

    fn config() -> Config {
        let mut config = Config::default();
        // Button 1 runs the motor while held.
        config.button[1] = Mapping {
            long_press: Some(Command::RampUp),
            released: Some(Command::RampDown),
            ..Mapping::default()
        };
        config
    }

    fn run(
        store: &mut Store,
        motor: &mut Spy,
        now: &mut Millis,
        held: [bool; MAX_BUTTONS],
        duration: Millis,
    ) -> Vec<Event> {
        let mut collected = Vec::new();
        for _ in 0..duration {
            *now += 1;
            collected.extend(store.apply_input_snapshot(Snapshot { button: held }, *now, motor));
            store.tick(*now, motor);
        }
        collected
    }

    #[test]
    fn when_mapped_button_is_held_the_motor_ramps_up_to_nominal_velocity() {
        let mut store = Store::new(config());
        let mut motor = Spy::default();
        let mut now = 0;

        run(&mut store, &mut motor, &mut now, [false, true, false, false], 3_000);

        assert!(store.motion_enabled());
        assert_eq!(store.motion_state(), State::Cruising);
        assert_eq!(store.velocity(), 55_000);
        assert_eq!(motor.calls[0], Call::Enable);

        let velocities = motor.commanded_velocities();
        let mut previous = 0;
        for velocity in &velocities {
            assert!(velocity - previous <= 5_000);
            previous = *velocity;
        }
        assert_eq!(*velocities.last().unwrap(), 55_000);
    }

    #[test]
    fn when_mapped_button_is_released_the_motor_ramps_down_and_disables() {
        let mut store = Store::new(config());
        let mut motor = Spy::default();
        let mut now = 0;

        run(&mut store, &mut motor, &mut now, [false, true, false, false], 3_000);
        motor.calls.clear();
        run(&mut store, &mut motor, &mut now, [false; MAX_BUTTONS], 3_000);

        assert!(!store.motion_enabled());
        assert_eq!(store.motion_state(), State::Idle);
        assert_eq!(store.velocity(), 0);
        assert_eq!(motor.disable_count(), 1);
        assert_eq!(*motor.calls.last().unwrap(), Call::Disable);
    }

    #[test]
    fn when_gesture_has_no_mapping_it_is_only_reported() {
        let mut store = Store::new(Config::default());
        let mut motor = Spy::default();
        let mut now = 0;

        let mut events = run(&mut store, &mut motor, &mut now, [false, false, true, false], 100);
        events.extend(run(&mut store, &mut motor, &mut now, [false; MAX_BUTTONS], 1_000));

        assert!(events
            .iter()
            .any(|e| e.button == 2 && e.gesture == Gesture::ShortPress));
        assert!(motor.calls.is_empty());
        assert_eq!(store.motion_state(), State::Idle);
    }

    #[test]
    fn when_host_toggles_motion_the_ramp_follows() {
        let mut store = Store::new(config());
        let mut motor = Spy::default();
        let mut now = 0;

        store.set_motion(true, &mut motor, now);
        run(&mut store, &mut motor, &mut now, [false; MAX_BUTTONS], 2_000);
        assert_eq!(store.motion_state(), State::Cruising);
        assert_eq!(store.velocity(), 55_000);

        store.set_motion(false, &mut motor, now);
        run(&mut store, &mut motor, &mut now, [false; MAX_BUTTONS], 2_000);
        assert_eq!(store.motion_state(), State::Idle);
        assert_eq!(motor.disable_count(), 1);
    }

    #[test]
    fn when_single_action_button_fires_the_motor_spins_up_without_delay() {
        let mut config = Config::default();
        config.button[2] = Mapping {
            short_press: Some(Command::RampUp),
            long_press: Some(Command::RampUp),
            double_press: Some(Command::RampUp),
            released: Some(Command::RampDown),
        };
        let mut store = Store::new(config);
        let mut motor = Spy::default();
        let mut now = 0;

        run(&mut store, &mut motor, &mut now, [false, false, true, false], 51);

        // Enabled right at the debounced rising edge.
        assert!(store.motion_enabled());
        assert_eq!(motor.calls[..2], [Call::Enable, Call::SetVelocity(5_000)]);
    }

    #[test]
    fn when_repeats_arrive_while_ramping_the_target_stays_put() {
        let mut store = Store::new(config());
        let mut motor = Spy::default();
        let mut now = 0;

        // Held well past several repeat periods.
        run(&mut store, &mut motor, &mut now, [false, true, false, false], 2_000);

        let enables = motor.calls.iter().filter(|c| **c == Call::Enable).count();
        assert_eq!(enables, 1);
        assert_eq!(store.velocity(), 55_000);
    }
}

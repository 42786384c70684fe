//! Velocity ramp between motion commands and the actuator.

use crate::config::Config;
use crate::log;
use crate::motor::Motor;
use crate::Millis;

/// Rate limiter of actuator speed changes.
///
/// Moves the commanded velocity toward its target by fixed-size steps, no
/// more often than once per configured interval, so the actuator never sees
/// a discontinuous speed change. The motor is enabled when motion starts
/// and disabled again once the velocity ramps back to zero.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ramp {
    nominal: i32,
    step: i32,
    interval: u32,
    current: i32,
    target: i32,
    last_step_at: Millis,
    enabled: bool,
}

/// Observable phase of the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Idle,
    RampingUp,
    Cruising,
    RampingDown,
}

impl Ramp {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        debug_assert!(config.ramp_step > 0);
        Self {
            nominal: config.velocity,
            step: config.ramp_step,
            interval: config.ramp_interval,
            current: 0,
            target: 0,
            last_step_at: 0,
            enabled: false,
        }
    }

    /// Start ramping toward the nominal velocity.
    ///
    /// When issued while already ramping or cruising, only the target is
    /// updated and the motor is left alone.
    pub fn ramp_up(&mut self, motor: &mut impl Motor, now: Millis) {
        self.target = self.nominal;
        if !self.enabled {
            self.enabled = true;
            // Seeded one step above zero. Velocities between zero and the
            // first step sit in the dead zone below the motor's minimum
            // moving speed.
            self.current = if self.nominal < 0 { -self.step } else { self.step };
            self.last_step_at = now;
            motor.enable();
            motor.set_velocity(self.current);
            log::info!("Motion enabled");
        }
    }

    /// Start ramping toward zero. No-op while idle.
    pub fn ramp_down(&mut self) {
        if self.enabled {
            self.target = 0;
        }
    }

    /// Advance the commanded velocity by at most one bounded step.
    pub fn update(&mut self, motor: &mut impl Motor, now: Millis) {
        if !self.enabled || self.current == self.target {
            return;
        }
        if now.wrapping_sub(self.last_step_at) < self.interval {
            return;
        }
        self.last_step_at = now;

        self.current = if self.current < self.target {
            self.current.saturating_add(self.step).min(self.target)
        } else {
            self.current.saturating_sub(self.step).max(self.target)
        };
        motor.set_velocity(self.current);

        if self.current == 0 {
            self.enabled = false;
            motor.disable();
            log::info!("Motion disabled");
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        if !self.enabled {
            State::Idle
        } else if self.current == self.target {
            State::Cruising
        } else if self.target == 0 {
            State::RampingDown
        } else {
            State::RampingUp
        }
    }

    #[must_use]
    pub fn velocity(&self) -> i32 {
        self.current
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

//! Gesture recognition state machine of a single button.

use crate::event::Gesture;
use crate::Millis;

/// Accept a raw edge only after the level persisted this long.
const DEBOUNCE_THRESHOLD: Millis = 50;
/// Held at least this long means a long press.
const LONG_PRESS: Millis = 600;
/// A second press within this window after a short release makes a
/// double press.
const DOUBLE_PRESS: Millis = 350;
/// Cadence of the repeated long-press action on non-primary buttons.
const LONG_REPEAT: Millis = 300;
/// Hold of the primary button classified as extended on release.
const EXTENDED_HOLD: Millis = 5_000;
/// Hold of the primary button classified as critical on release.
const CRITICAL_HOLD: Millis = 10_000;

/// Gestures recognized on one button during a single update.
pub type Gestures = heapless::Vec<Gesture, 4>;

/// How presses of a button are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Behavior {
    /// Wait out the long-press and double-press windows before deciding.
    Disambiguated,
    /// Short, long and double press all trigger the same action, so it
    /// fires on the rising edge without any disambiguation delay.
    SingleAction,
}

/// Debounce and gesture state of one button.
///
/// Call `update` once per control-loop tick with the polarity-normalized
/// raw sample. The logical state flips only once a raw edge stayed stable
/// for the debounce threshold, while press durations are measured between
/// the raw edge times themselves.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    behavior: Behavior,
    primary: bool,
    raw: bool,
    edge_at: Millis,
    pressed: bool,
    pressed_at: Millis,
    long_fired: bool,
    repeat_at: Millis,
    armed_at: Option<Millis>,
}

impl Button {
    #[must_use]
    pub fn new(primary: bool, behavior: Behavior) -> Self {
        Self {
            behavior,
            primary,
            raw: false,
            edge_at: 0,
            pressed: false,
            pressed_at: 0,
            long_fired: false,
            repeat_at: 0,
            armed_at: None,
        }
    }

    /// Process one raw sample and return the gestures it completed.
    pub fn update(&mut self, down: bool, now: Millis) -> Gestures {
        let mut gestures = Gestures::new();

        if down != self.raw {
            self.raw = down;
            self.edge_at = now;
        }

        if self.raw != self.pressed && now.wrapping_sub(self.edge_at) >= DEBOUNCE_THRESHOLD {
            if self.raw {
                self.press(&mut gestures);
            } else {
                self.release(&mut gestures);
            }
        }

        if self.pressed {
            self.advance_long_press(&mut gestures, now);
        }
        self.sweep_double_press_deadline(&mut gestures, now);

        gestures
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    fn press(&mut self, gestures: &mut Gestures) {
        self.pressed = true;
        self.pressed_at = self.edge_at;
        if self.behavior == Behavior::SingleAction {
            emit(gestures, Gesture::ShortPress);
        }
    }

    fn release(&mut self, gestures: &mut Gestures) {
        let held = self.edge_at.wrapping_sub(self.pressed_at);
        let was_long = self.long_fired;
        self.pressed = false;
        self.long_fired = false;

        if self.behavior == Behavior::SingleAction {
            // The action already fired on the rising edge.
            emit(gestures, Gesture::Released);
            return;
        }

        if held < DEBOUNCE_THRESHOLD {
            // A release with no matching press record. Not a fault.
            return;
        }

        let was_armed = self.armed_at.take().is_some();
        if self.primary && held > EXTENDED_HOLD {
            if held > CRITICAL_HOLD {
                emit(gestures, Gesture::CriticalHold);
            } else {
                emit(gestures, Gesture::ExtendedHold);
            }
        } else if was_long {
            // The long-press events already represented this press, a
            // trailing short press must not fire on top of them.
        } else if was_armed {
            emit(gestures, Gesture::DoublePress);
        } else {
            // Possibly the first half of a double press. The decision is
            // deferred until the window closes.
            self.armed_at = Some(self.edge_at);
        }
        emit(gestures, Gesture::Released);
    }

    fn advance_long_press(&mut self, gestures: &mut Gestures, now: Millis) {
        if self.behavior == Behavior::SingleAction {
            return;
        }
        if !self.long_fired {
            if now.wrapping_sub(self.pressed_at) >= LONG_PRESS {
                self.long_fired = true;
                self.repeat_at = now;
                emit(gestures, Gesture::LongPressStart);
            }
        } else if !self.primary && now.wrapping_sub(self.repeat_at) >= LONG_REPEAT {
            self.repeat_at = now;
            emit(gestures, Gesture::LongPressRepeat);
        }
    }

    fn sweep_double_press_deadline(&mut self, gestures: &mut Gestures, now: Millis) {
        // A raw press blocks the sweep even before it debounces, so that a
        // second press right at the end of the window is not lost.
        if self.raw || self.pressed {
            return;
        }
        if let Some(armed_at) = self.armed_at {
            if now.wrapping_sub(armed_at) > DOUBLE_PRESS {
                self.armed_at = None;
                emit(gestures, Gesture::ShortPress);
            }
        }
    }
}

fn emit(gestures: &mut Gestures, gesture: Gesture) {
    // NOTE: This is safe, the capacity covers the most gestures a single
    // tick can produce.
    let _ = gestures.push(gesture);
}

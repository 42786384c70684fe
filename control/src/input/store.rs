//! Process all input peripherals over time.

use super::button::{Behavior, Button};
use super::snapshot::Snapshot;
use crate::config::{Config, MAX_BUTTONS};
use crate::event::{Event, Events};
use crate::Millis;

/// Stateful store of raw inputs.
///
/// This struct turns raw snapshots into debounced buttons and collects the
/// gestures they recognize. Buttons live in a fixed arena indexed by the
/// button number, button 0 being the primary one.
///
/// Note that despite the buttons being public, they should be only read
/// from.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub button: [Button; MAX_BUTTONS],
}

impl Store {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            button: core::array::from_fn(|i| {
                let behavior = if config.button[i].is_single_action() {
                    Behavior::SingleAction
                } else {
                    Behavior::Disambiguated
                };
                Button::new(i == 0, behavior)
            }),
        }
    }

    pub fn update(&mut self, snapshot: Snapshot, now: Millis) -> Events {
        let mut events = Events::new();
        for (i, button) in self.button.iter_mut().enumerate() {
            for gesture in button.update(snapshot.button[i], now) {
                // NOTE: This is safe, the capacity covers all buttons
                // finishing a press cycle in the same tick.
                let _ = events.push(Event { button: i, gesture });
            }
        }
        events
    }
}

//! Mapping of recognized gestures to motion commands.

use crate::event::Gesture;

/// Command interpreted by the velocity ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    RampUp,
    RampDown,
}

/// Gesture-to-command table of one button.
///
/// Keeping the table explicit keeps the recognizer itself a pure function
/// of its input. Extended and critical holds carry host-owned side effects
/// and are never mapped to a motion command.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mapping {
    pub short_press: Option<Command>,
    pub long_press: Option<Command>,
    pub double_press: Option<Command>,
    pub released: Option<Command>,
}

impl Mapping {
    /// Look up the command assigned to a recognized gesture.
    #[must_use]
    pub fn command_for(&self, gesture: Gesture) -> Option<Command> {
        match gesture {
            Gesture::ShortPress => self.short_press,
            Gesture::DoublePress => self.double_press,
            Gesture::LongPressStart | Gesture::LongPressRepeat => self.long_press,
            Gesture::Released => self.released,
            Gesture::ExtendedHold | Gesture::CriticalHold => None,
        }
    }

    /// Whether short, long and double press all collapse into one action.
    ///
    /// Such a button fires its action right on the rising edge. Waiting out
    /// the disambiguation windows would only delay the same outcome.
    #[must_use]
    pub fn is_single_action(&self) -> bool {
        self.short_press.is_some()
            && self.short_press == self.long_press
            && self.short_press == self.double_press
    }
}

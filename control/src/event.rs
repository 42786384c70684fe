//! Semantic gesture events passed to the host.

use heapless::Vec;

/// Semantic gesture recognized on a single button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// A single short press, confirmed after the double-press window closed.
    ShortPress,
    /// Two short presses within the double-press window.
    DoublePress,
    /// The button has been held long enough for its long-press action.
    LongPressStart,
    /// The long-press action firing again while a non-primary button
    /// remains held.
    LongPressRepeat,
    /// The primary button was released after an extended hold.
    ExtendedHold,
    /// The primary button was released after a critical hold. Supersedes
    /// `ExtendedHold`, the two are never reported for the same press.
    CriticalHold,
    /// The button was released, whatever the press meant.
    Released,
}

/// A gesture attributed to the button that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event {
    pub button: usize,
    pub gesture: Gesture,
}

/// All events collected while applying one input snapshot.
pub type Events = Vec<Event, 8>;

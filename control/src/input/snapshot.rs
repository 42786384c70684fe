//! Structures used to pass the current state of hardware peripherals.

use crate::config::MAX_BUTTONS;

/// Raw per-tick reading of all button inputs.
///
/// The snapshot is meant to be passed from the hardware binding to the
/// control package once per tick. Samples must be polarity-normalized by
/// the caller: `true` always means asserted, whatever the wiring.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub button: [bool; MAX_BUTTONS],
}

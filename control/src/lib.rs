//! Control package of the medusa kinetic-lamp module.
//!
//! It interprets raw button samples into semantic gestures and drives the
//! stepper actuator through a bounded velocity ramp, so that button gestures
//! become smooth motion commands. The package is driven by a periodic tick
//! from the host's main loop and performs no I/O of its own.
//!
//! Following is the communication within one host tick:
//!
//! ```text
//!                  [ HostLoop ]
//!                    |      A
//!        (Snapshot)  |      | (Events)
//!                    V      |
//!              [ Store {Buttons} ]
//!                    |      A
//!         (Command)  |      | (Gesture)
//!                    V      |
//!                 [ Ramp {Mapping} ] ----> [ Motor ]
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod event;
pub mod input;
mod log;
pub mod mapping;
pub mod motor;
pub mod ramp;
pub mod store;

pub use config::Config;
pub use event::{Event, Events, Gesture};
pub use input::snapshot::Snapshot;
pub use mapping::{Command, Mapping};
pub use motor::Motor;
pub use store::Store;

/// Millisecond reading of the host's monotonic clock. Wraps around.
pub type Millis = u32;

//! Two-player pong for a 128x64 monochrome panel.
//!
//! Player 1 steers with an accelerometer tilt axis and arms a temporary
//! paddle enlargement with a hard tilt spike; Player 2 steers with a
//! joystick axis and arms the enlargement with a push button.
//!
//! The crate is platform agnostic: every hardware touchpoint (inertial
//! sensor, joystick ADC, button line, panel, millisecond clock) is a trait
//! in [`ports`], so the same loop runs against real peripherals in firmware
//! and against scripted fakes in tests. The loop itself is fixed-tick
//! (40 ms target) and single-threaded; see [`game::GameLoop`].

#![cfg_attr(not(test), no_std)]

pub mod game;
pub mod input;
pub mod params;
pub mod physics;
pub mod ports;
pub mod power;
pub mod render;
pub mod state;

#[cfg(test)]
mod test_support;

pub use game::{CancelToken, GameLoop};
pub use ports::{AnalogInput, Clock, DigitalInput, InertialSensor, IoError, Screen};
pub use state::GameState;

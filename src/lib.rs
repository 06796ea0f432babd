//! Snake on a 5x5 LED matrix driven by two buttons.
//!
//! The game logic is hardware independent: the engine talks to the display,
//! the buttons, the clock and the random source through the traits in
//! [`traits`]. The RP2040 implementations live in [`hardware`] behind the
//! `rp2040` feature.

#![cfg_attr(not(test), no_std)]

#[macro_use]
pub(crate) mod fmt;

pub mod apple;
pub mod autopilot;
pub mod buttons;
pub mod config;
pub mod coordinate;
pub mod direction;
pub mod engine;
pub mod game;
pub mod matrix;
pub mod random;
pub mod snake;
pub mod traits;

#[cfg(feature = "rp2040")]
pub mod hardware;

#[cfg(test)]
pub(crate) mod testing;

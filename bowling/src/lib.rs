#![deny(missing_docs)]

//! Ten-pin bowling for VR! 🎳
//!
//! This crate holds everything about a bowling game that doesn't depend on a renderer or a headset:
//! the [`scoring`] state machine that turns pinfall into frame and game scores, and a small
//! [`hecs`] powered lane that plays the part of the pin detector and pin resetter around it.
//!
//! # Getting started
//! The quickest way in is [`Lane`], which owns a world with ten racked pins, a scorer and a
//! [`components::ScoreBoard`]:
//!
//! ```
//! use bowling::{settings::GameSettings, util::topple_pins, Lane};
//!
//! let mut lane = Lane::new(GameSettings::default());
//! topple_pins(&mut lane.world, 7);
//! let outcome = lane.throw_completed().unwrap();
//! assert_eq!(outcome.pins, 7);
//! ```
//!
//! If you already have your own physics and only need the rules, use [`scoring::Game`] or
//! [`scoring::BowlingScorer`] directly.

pub use glam;
pub use hecs;

pub use bowling_error::BowlingError;
pub use lane::{Lane, LANE_LENGTH};

mod bowling_error;
/// Components are data attached to entities on the lane
pub mod components;
/// Contexts are wrappers around state shared between systems
pub mod contexts;
mod lane;
/// The rules of ten-pin bowling
pub mod scoring;
/// Tunable values for a game
pub mod settings;
/// Systems are functions called after each throw to update the lane or the score
pub mod systems;
/// Kitchen sink utility functions
pub mod util;

/// Bowling result type
pub type BowlingResult<T> = std::result::Result<T, BowlingError>;

/// Number of pins in a full rack
pub const PIN_COUNT: u8 = 10;

/// Number of frames in a game
pub const FRAME_COUNT: usize = 10;

/// Score of a perfect game: twelve strikes in a row
pub const PERFECT_SCORE: u16 = 300;

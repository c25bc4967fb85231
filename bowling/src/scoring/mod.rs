//! Scoring works in two layers:
//!
//! - [`Game`] is the pure state machine. Feed it pin counts with [`Game::register_throw`] and it
//!   hands back a [`ThrowOutcome`] describing what happened.
//! - [`BowlingScorer`] wraps a [`Game`] together with the collaborators it talks to, a
//!   [`ScoreDisplay`] and a [`LaneResetter`], and tells them about every outcome.
//!
//! Scores are recomputed from scratch after every throw, so a strike or spare frame shows its
//! best known value until the bonus balls have been thrown.

mod calculate;
mod frame;
mod game;
mod observer;
mod scorer;
mod state;

pub use calculate::{running_totals, score_frames};
pub use frame::Frame;
pub use game::{FrameResult, Game, ResetMode, ThrowOutcome};
pub use observer::{LaneResetter, ScoreDisplay};
pub use scorer::BowlingScorer;
pub use state::{ScorerState, ThrowNumber};

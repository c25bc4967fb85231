use super::{Game, LaneResetter, ResetMode, ScoreDisplay, ThrowOutcome};
use crate::BowlingResult;

/// A [`Game`] wired up to the display and pinsetter it reports to.
///
/// The collaborators are handed in when the scorer is built rather than looked up, and every
/// accepted ball is dispatched to them before [`BowlingScorer::register_throw`] returns.
#[derive(Debug, Clone)]
pub struct BowlingScorer<D, R> {
    game: Game,
    display: D,
    resetter: R,
}

impl<D: ScoreDisplay, R: LaneResetter> BowlingScorer<D, R> {
    /// Create a scorer at the start of a fresh game
    pub fn new(display: D, resetter: R) -> Self {
        Self {
            game: Game::new(),
            display,
            resetter,
        }
    }

    /// Record a ball and tell the display and the pinsetter about it.
    ///
    /// Rejected balls are returned as errors and nobody is notified.
    pub fn register_throw(&mut self, pins: u8) -> BowlingResult<ThrowOutcome> {
        let outcome = self.game.register_throw(pins)?;

        self.display.on_frame_result(outcome.result, outcome.pins);
        if let Some(mode) = outcome.reset {
            self.resetter.request_reset(mode);
        }
        self.display.on_score_updated(
            self.game.frames(),
            outcome.total_score,
            self.game.current_frame(),
        );
        if outcome.game_over {
            self.display.on_game_over(outcome.total_score);
        }

        Ok(outcome)
    }

    /// Abandon the current game and start again with a fresh rack.
    pub fn new_game(&mut self) {
        self.game.new_game();
        self.resetter.request_reset(ResetMode::Full);
        self.display.on_game_reset();
        self.display.on_score_updated(
            self.game.frames(),
            self.game.total_score(),
            self.game.current_frame(),
        );
    }

    /// The game being scored
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The display, mutably
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// The pinsetter
    pub fn resetter(&self) -> &R {
        &self.resetter
    }

    /// The pinsetter, mutably
    pub fn resetter_mut(&mut self) -> &mut R {
        &mut self.resetter
    }
}

use super::{Frame, FrameResult, ResetMode};
use crate::FRAME_COUNT;

/// Anything that shows the player how the game is going.
///
/// [`super::BowlingScorer`] calls these in order after every accepted ball: `on_frame_result`,
/// then `on_score_updated`, then `on_game_over` if that ball finished the game.
pub trait ScoreDisplay {
    /// How the last ball went
    fn on_frame_result(&mut self, result: FrameResult, pins: u8);

    /// The full frame table, game total and 1-based current frame
    fn on_score_updated(&mut self, frames: &[Frame; FRAME_COUNT], total: u16, current_frame: u8);

    /// The tenth frame is done
    fn on_game_over(&mut self, final_total: u16);

    /// A new game has started. Called before the blank score is sent.
    fn on_game_reset(&mut self) {}
}

/// Anything that can put pins back on the deck.
pub trait LaneResetter {
    /// Prepare the deck for the next ball
    fn request_reset(&mut self, mode: ResetMode);
}

impl<T: ScoreDisplay + ?Sized> ScoreDisplay for &mut T {
    fn on_frame_result(&mut self, result: FrameResult, pins: u8) {
        (**self).on_frame_result(result, pins)
    }

    fn on_score_updated(&mut self, frames: &[Frame; FRAME_COUNT], total: u16, current_frame: u8) {
        (**self).on_score_updated(frames, total, current_frame)
    }

    fn on_game_over(&mut self, final_total: u16) {
        (**self).on_game_over(final_total)
    }

    fn on_game_reset(&mut self) {
        (**self).on_game_reset()
    }
}

impl<T: LaneResetter + ?Sized> LaneResetter for &mut T {
    fn request_reset(&mut self, mode: ResetMode) {
        (**self).request_reset(mode)
    }
}

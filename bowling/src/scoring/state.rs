use serde::{Deserialize, Serialize};

use super::{Frame, ResetMode};
use crate::FRAME_COUNT;

/// Which ball of the frame is being bowled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThrowNumber {
    /// Opening ball of a frame
    First,
    /// Second ball, against whatever the first left standing (or a fresh rack in the tenth)
    Second,
    /// Bonus ball, only ever bowled in the tenth frame after a strike or spare
    Third,
}

impl ThrowNumber {
    /// 1-based ball number
    pub fn number(self) -> u8 {
        match self {
            ThrowNumber::First => 1,
            ThrowNumber::Second => 2,
            ThrowNumber::Third => 3,
        }
    }
}

/// Where the game is up to: frame 1..=10 × ball 1..=3, or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScorerState {
    /// Waiting for the given ball of the given (1-based) frame
    Ready {
        /// 1-based frame number
        frame: u8,
        /// The next ball to be bowled in that frame
        throw: ThrowNumber,
    },
    /// The tenth frame is complete. Only a new game leaves this state.
    GameOver,
}

impl Default for ScorerState {
    fn default() -> Self {
        ScorerState::Ready {
            frame: 1,
            throw: ThrowNumber::First,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Transition {
    pub next: ScorerState,
    pub reset: Option<ResetMode>,
}

impl ScorerState {
    /// The transition table. `scored` is the frame with the ball already recorded, `standing_after`
    /// is what's left on the deck once the pins have settled.
    pub(crate) fn next(
        frame: u8,
        throw: ThrowNumber,
        scored: &Frame,
        standing_after: u8,
    ) -> Transition {
        let deck_cleared = standing_after == 0;
        let is_last_frame = usize::from(frame) == FRAME_COUNT;

        match (is_last_frame, throw) {
            // Frames 1-9: a strike or the second ball ends the frame
            (false, ThrowNumber::First) if !deck_cleared => {
                Transition::stay(frame, ThrowNumber::Second, deck_cleared)
            }
            (false, _) => Transition {
                next: ScorerState::Ready {
                    frame: frame + 1,
                    throw: ThrowNumber::First,
                },
                reset: Some(ResetMode::Full),
            },

            // Tenth frame: the second ball is always bowled
            (true, ThrowNumber::First) => {
                Transition::stay(frame, ThrowNumber::Second, deck_cleared)
            }
            (true, ThrowNumber::Second) if scored.is_strike || scored.is_spare => {
                Transition::stay(frame, ThrowNumber::Third, deck_cleared)
            }
            (true, _) => Transition {
                next: ScorerState::GameOver,
                reset: None,
            },
        }
    }
}

impl Transition {
    fn stay(frame: u8, throw: ThrowNumber, deck_cleared: bool) -> Self {
        let reset = if deck_cleared {
            ResetMode::Full
        } else {
            ResetMode::PartialKnockedOnly
        };

        Transition {
            next: ScorerState::Ready { frame, throw },
            reset: Some(reset),
        }
    }
}

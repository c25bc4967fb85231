use serde::{Deserialize, Serialize};

use super::{running_totals, score_frames, state::Transition, Frame, ScorerState, ThrowNumber};
use crate::{BowlingError, BowlingResult, FRAME_COUNT, PIN_COUNT};

/// How a throw went, as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameResult {
    /// Ten pins with the first ball on a fresh rack
    Strike,
    /// The last standing pins of a rack fell
    Spare,
    /// Nothing fell since the rack was set
    Gutter,
    /// Anything else
    Open,
}

impl FrameResult {
    /// `rack_total` is every pin knocked down since the deck was last fully re-racked, including
    /// this ball.
    pub(crate) fn classify(fresh_rack: bool, pins: u8, rack_total: u8) -> Self {
        if fresh_rack && pins == PIN_COUNT {
            FrameResult::Strike
        } else if !fresh_rack && rack_total == PIN_COUNT {
            FrameResult::Spare
        } else if rack_total == 0 {
            FrameResult::Gutter
        } else {
            FrameResult::Open
        }
    }
}

/// What the pinsetter should do before the next ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResetMode {
    /// Sweep the deck and set a fresh rack of ten
    Full,
    /// Sweep away only the pins that fell; standing pins stay where they are
    PartialKnockedOnly,
}

/// Everything that happened as a result of a single ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowOutcome {
    /// 1-based frame the ball was bowled in
    pub frame: u8,
    /// Which ball of that frame it was
    pub throw: ThrowNumber,
    /// Pins knocked down by this ball
    pub pins: u8,
    /// Strike, spare, gutter or open
    pub result: FrameResult,
    /// The reset the lane needs before the next ball. `None` once the game is over.
    pub reset: Option<ResetMode>,
    /// This ball finished its frame
    pub frame_complete: bool,
    /// This ball finished the game
    pub game_over: bool,
    /// Game total after this ball
    pub total_score: u16,
}

/// A single game of ten-pin bowling.
///
/// All ten frames exist from the start. [`Game::register_throw`] is the only thing that moves the
/// game forward, and a rejected throw leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: [Frame; FRAME_COUNT],
    state: ScorerState,
    standing_pins: u8,
    fresh_rack: bool,
    total_score: u16,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            frames: Default::default(),
            state: Default::default(),
            standing_pins: PIN_COUNT,
            fresh_rack: true,
            total_score: 0,
        }
    }
}

impl Game {
    /// Frame 1, ball 1, nothing scored
    pub fn new() -> Self {
        Default::default()
    }

    /// Throw away the current game, however far along it is, and start again from frame 1.
    pub fn new_game(&mut self) {
        *self = Self::new();
    }

    /// Record a ball that knocked down `pins` pins.
    ///
    /// Fails with [`BowlingError::InvalidState`] once the game is over and with
    /// [`BowlingError::InvalidThrow`] if more pins fell than were standing.
    pub fn register_throw(&mut self, pins: u8) -> BowlingResult<ThrowOutcome> {
        let (frame, throw) = match self.state {
            ScorerState::GameOver => return Err(BowlingError::InvalidState),
            ScorerState::Ready { frame, throw } => (frame, throw),
        };

        if pins > self.standing_pins {
            return Err(BowlingError::InvalidThrow {
                pins,
                standing: self.standing_pins,
            });
        }

        let standing_after = self.standing_pins - pins;
        let rack_total = PIN_COUNT - standing_after;
        let result = match FrameResult::classify(self.fresh_rack, pins, rack_total) {
            // The ball after a tenth frame strike is a bonus ball, never a gutter
            FrameResult::Gutter if self.is_tenth_frame_bonus(frame, throw) => FrameResult::Open,
            result => result,
        };

        let scored = &mut self.frames[usize::from(frame) - 1];
        scored.record(throw, pins);
        let Transition { next, reset } = ScorerState::next(frame, throw, scored, standing_after);

        match reset {
            Some(ResetMode::PartialKnockedOnly) => {
                self.standing_pins = standing_after;
                self.fresh_rack = false;
            }
            _ => {
                self.standing_pins = PIN_COUNT;
                self.fresh_rack = true;
            }
        }

        let frame_complete = match next {
            ScorerState::Ready { frame: next_frame, .. } => next_frame != frame,
            ScorerState::GameOver => true,
        };
        self.state = next;
        let total_score = self.calculate_total_score();

        Ok(ThrowOutcome {
            frame,
            throw,
            pins,
            result,
            reset,
            frame_complete,
            game_over: self.is_game_over(),
            total_score,
        })
    }

    fn is_tenth_frame_bonus(&self, frame: u8, throw: ThrowNumber) -> bool {
        usize::from(frame) == FRAME_COUNT
            && throw == ThrowNumber::Second
            && self.frames[FRAME_COUNT - 1].is_strike
    }

    /// Recompute every frame's score and the game total from the balls recorded so far.
    ///
    /// Safe to call at any time; calling it twice in a row changes nothing.
    pub fn calculate_total_score(&mut self) -> u16 {
        let scores = score_frames(&self.frames);
        for (frame, score) in self.frames.iter_mut().zip(scores) {
            frame.score = score;
        }
        self.total_score = scores.iter().sum();
        self.total_score
    }

    /// All ten frames
    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    /// A single frame by its 1-based number
    pub fn frame(&self, number: u8) -> Option<&Frame> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|index| self.frames.get(index))
    }

    /// Cumulative score through each started frame
    pub fn running_totals(&self) -> [Option<u16>; FRAME_COUNT] {
        running_totals(&self.frames)
    }

    /// 1-based frame being bowled. Stays at 10 once the game is over.
    pub fn current_frame(&self) -> u8 {
        match self.state {
            ScorerState::Ready { frame, .. } => frame,
            ScorerState::GameOver => FRAME_COUNT as u8,
        }
    }

    /// The ball about to be bowled. Once the game is over, the last ball that was bowled.
    pub fn current_throw(&self) -> ThrowNumber {
        match self.state {
            ScorerState::Ready { throw, .. } => throw,
            ScorerState::GameOver if self.frames[FRAME_COUNT - 1].third_throw.is_some() => {
                ThrowNumber::Third
            }
            ScorerState::GameOver => ThrowNumber::Second,
        }
    }

    /// Pins on the deck for the next ball
    pub fn standing_pins(&self) -> u8 {
        self.standing_pins
    }

    /// Is the deck a full rack nobody has bowled at yet?
    pub fn is_fresh_rack(&self) -> bool {
        self.fresh_rack
    }

    /// Game total as of the last ball
    pub fn total_score(&self) -> u16 {
        self.total_score
    }

    /// Has the tenth frame been completed?
    pub fn is_game_over(&self) -> bool {
        self.state == ScorerState::GameOver
    }

    /// Where the game is up to
    pub fn state(&self) -> ScorerState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PERFECT_SCORE;

    fn play(game: &mut Game, throws: &[u8]) -> Vec<ThrowOutcome> {
        throws
            .iter()
            .map(|pins| game.register_throw(*pins).unwrap())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let game = Game::new();
        assert_eq!(game.current_frame(), 1);
        assert_eq!(game.current_throw(), ThrowNumber::First);
        assert_eq!(game.total_score(), 0);
        assert_eq!(game.standing_pins(), PIN_COUNT);
        assert!(game.is_fresh_rack());
        assert!(!game.is_game_over());
        assert!(game.frames().iter().all(|f| *f == Frame::default()));
    }

    #[test]
    fn test_all_gutters() {
        let mut game = Game::new();
        let outcomes = play(&mut game, &[0; 20]);
        assert!(game.is_game_over());
        assert_eq!(game.total_score(), 0);
        assert!(outcomes.iter().all(|o| o.result == FrameResult::Gutter));
        assert!(outcomes.last().unwrap().game_over);
    }

    #[test]
    fn test_perfect_game() {
        let mut game = Game::new();
        let outcomes = play(&mut game, &[10; 12]);
        assert!(game.is_game_over());
        assert_eq!(game.total_score(), PERFECT_SCORE);
        assert!(game.frames().iter().all(|f| f.score == 30));
        assert!(outcomes.iter().all(|o| o.result == FrameResult::Strike));
    }

    #[test]
    fn test_spare_then_three() {
        let mut game = Game::new();
        let mut throws = vec![5, 5, 3];
        throws.extend([0; 17]);
        play(&mut game, &throws);
        assert!(game.is_game_over());
        assert_eq!(game.frame(1).unwrap().score, 13);
        assert_eq!(game.frame(2).unwrap().score, 3);
        assert_eq!(game.total_score(), 16);
    }

    #[test]
    fn test_frames_one_to_nine() {
        let mut game = Game::new();

        let outcome = game.register_throw(10).unwrap();
        assert_eq!(outcome.result, FrameResult::Strike);
        assert_eq!(outcome.reset, Some(ResetMode::Full));
        assert!(outcome.frame_complete);
        assert_eq!(game.current_frame(), 2);
        assert_eq!(game.current_throw(), ThrowNumber::First);

        let outcome = game.register_throw(3).unwrap();
        assert_eq!(outcome.result, FrameResult::Open);
        assert_eq!(outcome.reset, Some(ResetMode::PartialKnockedOnly));
        assert!(!outcome.frame_complete);
        assert_eq!(game.current_throw(), ThrowNumber::Second);
        assert_eq!(game.standing_pins(), 7);

        let outcome = game.register_throw(7).unwrap();
        assert_eq!(outcome.result, FrameResult::Spare);
        assert_eq!(outcome.reset, Some(ResetMode::Full));
        assert!(game.frame(2).unwrap().is_spare);
        assert_eq!(game.current_frame(), 3);

        game.register_throw(0).unwrap();
        let outcome = game.register_throw(0).unwrap();
        assert_eq!(outcome.result, FrameResult::Gutter);
        assert_eq!(outcome.total_score, 30);
    }

    #[test]
    fn test_missed_first_ball_then_all_ten_is_a_spare() {
        let mut game = Game::new();
        let first = game.register_throw(0).unwrap();
        assert_eq!(first.result, FrameResult::Gutter);
        assert_eq!(first.reset, Some(ResetMode::PartialKnockedOnly));
        assert_eq!(game.standing_pins(), PIN_COUNT);
        assert!(!game.is_fresh_rack());

        let second = game.register_throw(10).unwrap();
        assert_eq!(second.result, FrameResult::Spare);
        assert!(game.frame(1).unwrap().is_spare);
        assert!(!game.frame(1).unwrap().is_strike);
    }

    #[test]
    fn test_tenth_frame_triple_strike() {
        let mut game = Game::new();
        play(&mut game, &[0; 18]);
        assert_eq!(game.current_frame(), 10);

        let outcome = game.register_throw(10).unwrap();
        assert_eq!(outcome.result, FrameResult::Strike);
        assert_eq!(outcome.reset, Some(ResetMode::Full));
        assert!(!outcome.game_over);
        assert_eq!(game.current_throw(), ThrowNumber::Second);

        let outcome = game.register_throw(10).unwrap();
        assert_eq!(outcome.result, FrameResult::Strike);
        assert_eq!(outcome.reset, Some(ResetMode::Full));
        assert_eq!(game.current_throw(), ThrowNumber::Third);

        let outcome = game.register_throw(10).unwrap();
        assert!(outcome.game_over);
        assert_eq!(outcome.reset, None);
        assert_eq!(game.frame(10).unwrap().score, 30);
        assert_eq!(game.current_throw(), ThrowNumber::Third);
    }

    #[test]
    fn test_open_tenth_frame_ends_game() {
        let mut game = Game::new();
        play(&mut game, &[0; 18]);

        let outcome = game.register_throw(4).unwrap();
        assert_eq!(outcome.reset, Some(ResetMode::PartialKnockedOnly));
        assert_eq!(game.standing_pins(), 6);

        let outcome = game.register_throw(3).unwrap();
        assert!(outcome.game_over);
        assert!(outcome.frame_complete);
        assert_eq!(outcome.reset, None);
        assert_eq!(game.frame(10).unwrap().score, 7);
        assert_eq!(game.frame(10).unwrap().third_throw, None);
        assert_eq!(game.current_frame(), 10);
        assert_eq!(game.current_throw(), ThrowNumber::Second);
    }

    #[test]
    fn test_tenth_frame_strike_then_partial_rack() {
        let mut game = Game::new();
        play(&mut game, &[0; 18]);
        play(&mut game, &[10]);

        let outcome = game.register_throw(4).unwrap();
        assert_eq!(outcome.result, FrameResult::Open);
        assert_eq!(outcome.reset, Some(ResetMode::PartialKnockedOnly));
        assert_eq!(game.standing_pins(), 6);

        // Only six pins are left for the bonus ball
        assert_eq!(
            game.register_throw(7),
            Err(BowlingError::InvalidThrow {
                pins: 7,
                standing: 6
            })
        );

        let outcome = game.register_throw(6).unwrap();
        assert_eq!(outcome.result, FrameResult::Spare);
        assert!(outcome.game_over);
        assert_eq!(game.frame(10).unwrap().score, 20);
    }

    #[test]
    fn test_tenth_frame_strike_then_miss_is_open() {
        let mut game = Game::new();
        play(&mut game, &[0; 18]);
        play(&mut game, &[10]);

        let outcome = game.register_throw(0).unwrap();
        assert_eq!(outcome.result, FrameResult::Open);
        assert!(!outcome.game_over);
        assert_eq!(game.current_throw(), ThrowNumber::Third);

        let outcome = game.register_throw(0).unwrap();
        assert_eq!(outcome.result, FrameResult::Gutter);
        assert!(outcome.game_over);
        assert_eq!(game.total_score(), 10);
    }

    #[test]
    fn test_tenth_frame_spare_earns_fresh_rack() {
        let mut game = Game::new();
        play(&mut game, &[0; 18]);
        play(&mut game, &[6]);

        let outcome = game.register_throw(4).unwrap();
        assert_eq!(outcome.result, FrameResult::Spare);
        assert_eq!(outcome.reset, Some(ResetMode::Full));
        assert_eq!(game.standing_pins(), PIN_COUNT);

        let outcome = game.register_throw(10).unwrap();
        assert_eq!(outcome.result, FrameResult::Strike);
        assert!(outcome.game_over);
        assert_eq!(game.total_score(), 20);
    }

    #[test]
    fn test_invalid_throws_leave_state_untouched() {
        let mut game = Game::new();
        game.register_throw(6).unwrap();
        let before = game.clone();

        assert_eq!(
            game.register_throw(11),
            Err(BowlingError::InvalidThrow {
                pins: 11,
                standing: 4
            })
        );
        assert_eq!(
            game.register_throw(5),
            Err(BowlingError::InvalidThrow {
                pins: 5,
                standing: 4
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_eleven_is_never_valid() {
        let mut game = Game::new();
        assert_eq!(
            game.register_throw(11),
            Err(BowlingError::InvalidThrow {
                pins: 11,
                standing: 10
            })
        );
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_throw_after_game_over() {
        let mut game = Game::new();
        play(&mut game, &[1; 20]);
        assert!(game.is_game_over());
        let before = game.clone();

        assert_eq!(game.register_throw(3), Err(BowlingError::InvalidState));
        assert_eq!(game.register_throw(0), Err(BowlingError::InvalidState));
        assert_eq!(game, before);
        assert!(game.is_game_over());
    }

    #[test]
    fn test_new_game_mid_frame() {
        let mut game = Game::new();
        play(&mut game, &[10, 10, 4]);
        game.new_game();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut game = Game::new();
        play(&mut game, &[10, 9, 1, 5]);
        let first = game.calculate_total_score();
        let frames = *game.frames();
        let second = game.calculate_total_score();
        assert_eq!(first, second);
        assert_eq!(&frames, game.frames());
    }

    #[test]
    fn test_completed_games_total_is_sum_of_frames() {
        let games: [&[u8]; 5] = [
            &[0; 20],
            &[10; 12],
            &[9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9],
            &[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1],
            &[3, 4, 10, 5, 5, 10, 10, 2, 3, 0, 10, 6, 2, 10, 10, 4, 6],
        ];

        for throws in games {
            let mut game = Game::new();
            play(&mut game, throws);
            assert!(game.is_game_over(), "{throws:?} should finish the game");
            let sum: u16 = game.frames().iter().map(|f| f.score).sum();
            assert_eq!(sum, game.total_score());
            assert!(game.total_score() <= PERFECT_SCORE);
        }
    }

    #[test]
    fn test_known_totals() {
        let mut game = Game::new();
        play(
            &mut game,
            &[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1],
        );
        assert_eq!(game.total_score(), 167);
        assert_eq!(
            game.running_totals(),
            [
                Some(20),
                Some(39),
                Some(48),
                Some(66),
                Some(74),
                Some(84),
                Some(90),
                Some(120),
                Some(148),
                Some(167)
            ]
        );

        let mut game = Game::new();
        play(
            &mut game,
            &[9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9, 1, 9],
        );
        assert_eq!(game.total_score(), 190);
    }
}

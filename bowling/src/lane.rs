use glam::Vec3;
use hecs::{Entity, World};

use crate::{
    components::{add_pins_to_world, ScoreBoard},
    contexts::LaneContext,
    scoring::{BowlingScorer, ThrowOutcome},
    settings::GameSettings,
    systems::{lane_reset_system, throw_completed_system},
    util::standing_pin_count,
    BowlingResult,
};

/// Standard lane length from the foul line to the head pin, in metres
pub const LANE_LENGTH: f32 = 18.29;

/// One bowling lane: the pins, the scorer and the score board above it.
pub struct Lane {
    /// Holds the pins
    pub world: World,
    /// Scores the game and queues resets for the deck
    pub scorer: BowlingScorer<ScoreBoard, LaneContext>,
    /// Settings the lane was built with
    pub settings: GameSettings,
    /// The ten pins, in pin number order
    pub pins: Vec<Entity>,
}

impl Lane {
    /// Rack ten pins at the end of the lane and get ready for the first ball.
    pub fn new(settings: GameSettings) -> Self {
        let mut world = World::default();
        let pins = add_pins_to_world(&mut world, Vec3::new(0., 0., -LANE_LENGTH), &settings);
        let scorer = BowlingScorer::new(
            ScoreBoard::new(settings.target_score),
            LaneContext::default(),
        );

        Self {
            world,
            scorer,
            settings,
            pins,
        }
    }

    /// Call once the ball has stopped and the pins have settled.
    pub fn throw_completed(&mut self) -> BowlingResult<ThrowOutcome> {
        throw_completed_system(&mut self.world, &mut self.scorer, &self.settings)
    }

    /// Abandon the current game, re-rack and start again.
    pub fn new_game(&mut self) {
        self.scorer.new_game();
        lane_reset_system(&mut self.world, self.scorer.resetter_mut());
    }

    /// The score board
    pub fn score_board(&self) -> &ScoreBoard {
        self.scorer.display()
    }

    /// Pins on the deck that haven't been counted as down
    pub fn standing_pins(&self) -> u8 {
        standing_pin_count(&self.world)
    }
}

use hecs::{CommandBuffer, Entity, World};
use log::{debug, warn};

use crate::{
    components::KnockedDown,
    contexts::LaneContext,
    scoring::{BowlingScorer, ScoreDisplay, ThrowOutcome},
    settings::GameSettings,
    systems::{lane_reset_system, pin_detector_system},
    BowlingResult,
};

/// Throw completed system
/// Call once the ball has stopped and the pins have had time to settle. It:
/// - counts the pins knocked down since the last reset
/// - scores the ball, which tells the display and queues the next reset
/// - applies that reset to the deck
///
/// A rejected ball is logged and handed back. The pins it marked as down are unmarked again, so
/// the deck reads as it did before the ball and no reset is applied.
pub fn throw_completed_system<D: ScoreDisplay>(
    world: &mut World,
    scorer: &mut BowlingScorer<D, LaneContext>,
    settings: &GameSettings,
) -> BowlingResult<ThrowOutcome> {
    let already_down = knocked_down_pins(world);
    let pins = pin_detector_system(world, settings);

    let outcome = match scorer.register_throw(pins) {
        Ok(outcome) => outcome,
        Err(error) => {
            warn!("[BOWLING_LANE] Ball with {pins} pins was rejected: {error}");
            let mut command_buffer = CommandBuffer::new();
            for entity in knocked_down_pins(world) {
                if !already_down.contains(&entity) {
                    command_buffer.remove_one::<KnockedDown>(entity);
                }
            }
            command_buffer.run_on(world);
            return Err(error);
        }
    };

    debug!(
        "[BOWLING_LANE] Frame {} ball {}: {} pins, {:?}, total {}",
        outcome.frame,
        outcome.throw.number(),
        outcome.pins,
        outcome.result,
        outcome.total_score
    );

    lane_reset_system(world, scorer.resetter_mut());
    Ok(outcome)
}

fn knocked_down_pins(world: &mut World) -> Vec<Entity> {
    world
        .query_mut::<()>()
        .with::<&KnockedDown>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect()
}

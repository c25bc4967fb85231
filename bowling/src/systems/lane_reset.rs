use hecs::{CommandBuffer, World};
use log::debug;

use crate::{
    components::{KnockedDown, LocalTransform, Pin, Visible},
    contexts::LaneContext,
    scoring::ResetMode,
};

/// Applies the reset the scorer asked for, if any, then clears the request.
///
/// - [`ResetMode::Full`] puts all ten pins back on their spots, upright.
/// - [`ResetMode::PartialKnockedOnly`] sweeps the knocked down pins off the deck and straightens
///   the standing ones where they were racked.
pub fn lane_reset_system(world: &mut World, lane_context: &mut LaneContext) {
    let Some(mode) = lane_context.pending_reset.take() else {
        return;
    };

    let mut command_buffer = CommandBuffer::new();
    for (entity, (pin, transform, knocked_down, visible)) in world.query_mut::<(
        &Pin,
        &mut LocalTransform,
        Option<&KnockedDown>,
        Option<&Visible>,
    )>() {
        match (mode, knocked_down.is_some()) {
            (ResetMode::Full, knocked_down) => {
                *transform = pin.rest;
                if knocked_down {
                    command_buffer.remove::<(KnockedDown,)>(entity);
                }
                if visible.is_none() {
                    command_buffer.insert(entity, (Visible {},));
                }
            }
            (ResetMode::PartialKnockedOnly, true) => {
                if visible.is_some() {
                    command_buffer.remove::<(Visible,)>(entity);
                }
            }
            (ResetMode::PartialKnockedOnly, false) => {
                *transform = pin.rest;
            }
        }
    }
    command_buffer.run_on(world);

    debug!("[BOWLING_LANE] Applied {mode:?} reset");
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::{
        components::add_pins_to_world, settings::GameSettings, systems::pin_detector_system,
    };

    fn on_deck(world: &World) -> Vec<u8> {
        let mut numbers: Vec<u8> = world
            .query::<&Pin>()
            .with::<&Visible>()
            .iter()
            .map(|(_, pin)| pin.number)
            .collect();
        numbers.sort();
        numbers
    }

    #[test]
    fn test_lane_reset_system() {
        let mut world = World::default();
        let settings = GameSettings::default();
        let pins = add_pins_to_world(&mut world, Vec3::new(0., 0., -18.), &settings);
        let mut lane_context = LaneContext::default();

        // Nothing requested, nothing happens
        world.get::<&mut LocalTransform>(pins[0]).unwrap().rotation = Quat::from_rotation_x(1.5);
        lane_reset_system(&mut world, &mut lane_context);
        assert_ne!(
            world.get::<&LocalTransform>(pins[0]).unwrap().rotation,
            Quat::IDENTITY
        );

        // Knock over pin 1, nudge pin 2
        assert_eq!(pin_detector_system(&mut world, &settings), 1);
        world.get::<&mut LocalTransform>(pins[1]).unwrap().translation.x += 0.05;

        lane_context.pending_reset = Some(ResetMode::PartialKnockedOnly);
        lane_reset_system(&mut world, &mut lane_context);
        assert!(lane_context.pending_reset.is_none());
        assert_eq!(on_deck(&world), (2..=10).collect::<Vec<_>>());
        assert_eq!(
            *world.get::<&LocalTransform>(pins[1]).unwrap(),
            world.get::<&Pin>(pins[1]).unwrap().rest
        );
        assert_eq!(pin_detector_system(&mut world, &settings), 0);

        lane_context.pending_reset = Some(ResetMode::Full);
        lane_reset_system(&mut world, &mut lane_context);
        assert_eq!(on_deck(&world), (1..=10).collect::<Vec<_>>());
        for pin in pins {
            assert!(world.get::<&KnockedDown>(pin).is_err());
            assert_eq!(
                *world.get::<&LocalTransform>(pin).unwrap(),
                world.get::<&Pin>(pin).unwrap().rest
            );
        }
    }
}

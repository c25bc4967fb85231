use std::f32::consts::FRAC_PI_2;

use glam::Quat;
use hecs::World;

use crate::components::{KnockedDown, LocalTransform, Pin, Visible};

/// Tip the lowest numbered `count` standing pins flat onto the deck, as if a ball had hit them.
///
/// Stands in for the physics simulation when replaying a game or testing. Returns how many pins
/// actually went over, which is less than `count` if there weren't enough standing.
pub fn topple_pins(world: &mut World, count: u8) -> u8 {
    let mut standing = world
        .query_mut::<&Pin>()
        .with::<&Visible>()
        .without::<&KnockedDown>()
        .into_iter()
        .map(|(entity, pin)| (pin.number, entity))
        .collect::<Vec<_>>();
    standing.sort_unstable_by_key(|(number, _)| *number);

    let mut toppled = 0;
    for (_, entity) in standing.into_iter().take(count.into()) {
        if let Ok(mut transform) = world.get::<&mut LocalTransform>(entity) {
            transform.rotation = Quat::from_rotation_x(FRAC_PI_2) * transform.rotation;
            toppled += 1;
        }
    }

    toppled
}

/// Pins on the deck that the detector hasn't counted as down
pub fn standing_pin_count(world: &World) -> u8 {
    let standing = world
        .query::<&Pin>()
        .with::<&Visible>()
        .without::<&KnockedDown>()
        .iter()
        .count();
    u8::try_from(standing).unwrap_or(u8::MAX)
}

use hecs::{CommandBuffer, World};
use log::debug;

use crate::{
    components::{KnockedDown, LocalTransform, Pin, Visible},
    settings::GameSettings,
};

/// Pin detector system
/// Walks through each pin on the deck and:
/// - marks it as knocked down if it is leaning past the knockdown angle
/// - counts how many pins on the deck are down
///
/// Swept pins are no longer on the deck, so the count is always "pins down since the last reset".
/// Run this once the pins have settled after a ball.
pub fn pin_detector_system(world: &mut World, settings: &GameSettings) -> u8 {
    let knockdown_angle = settings.knockdown_angle();
    let mut command_buffer = CommandBuffer::new();

    for (entity, (pin, transform)) in world
        .query_mut::<(&Pin, &LocalTransform)>()
        .with::<&Visible>()
        .without::<&KnockedDown>()
    {
        if transform.tilt() > knockdown_angle {
            debug!("[BOWLING_LANE] Pin {} is down", pin.number);
            command_buffer.insert(entity, (KnockedDown,));
        }
    }
    command_buffer.run_on(world);

    let knocked_down = world
        .query_mut::<&Pin>()
        .with::<(&Visible, &KnockedDown)>()
        .into_iter()
        .count();

    debug!("[BOWLING_LANE] {knocked_down} pins down since the last reset");
    u8::try_from(knocked_down).unwrap_or(u8::MAX)
}

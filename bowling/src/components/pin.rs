use glam::Vec3;
use hecs::{Entity, World};

use super::{LocalTransform, Visible};
use crate::{settings::GameSettings, PIN_COUNT};

/// A component added to each of the ten pins on the lane.
///
/// Pins are numbered the standard way, looking down the lane from the foul line:
///
/// ```text
///   7  8  9  10
///     4  5  6
///       2  3
///         1
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pin {
    /// 1..=10
    pub number: u8,
    /// Where the pinsetter puts this pin when the deck is reset
    pub rest: LocalTransform,
}

/// Marks a pin the detector has counted as down since the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnockedDown;

/// Rack ten pins in a triangle with the head pin at `head_pin_position`.
///
/// Rows run away from the bowler along -Z, `row_spacing` apart, and each row is centred on the
/// head pin with its pins `pin_spacing` apart. Returns the entities in pin number order.
pub fn add_pins_to_world(
    world: &mut World,
    head_pin_position: Vec3,
    settings: &GameSettings,
) -> Vec<Entity> {
    let mut pins = Vec::with_capacity(PIN_COUNT.into());
    let mut number = 1;

    for row in 0..4u8 {
        let pins_in_row = row + 1;
        let start_x = -f32::from(row) * settings.pin_spacing / 2.;
        let z = -f32::from(row) * settings.row_spacing;

        for column in 0..pins_in_row {
            let x = start_x + f32::from(column) * settings.pin_spacing;
            let translation = head_pin_position + Vec3::new(x, 0., z);
            let rest = LocalTransform::from_translation(translation);
            pins.push(world.spawn((Pin { number, rest }, rest, Visible {})));
            number += 1;
        }
    }

    pins
}

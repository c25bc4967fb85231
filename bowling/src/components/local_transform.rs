use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The entity's position and orientation on the lane.
///
/// Whatever simulates the pins (a physics engine, or [`crate::util::topple_pins`] in tests) writes
/// here, and [`crate::systems::pin_detector_system`] reads it back to decide which pins fell.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl LocalTransform {
    /// An upright transform at `translation`
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// The entity's local up axis, in lane space
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Angle in radians between the entity's up axis and straight up
    pub fn tilt(&self) -> f32 {
        self.up().angle_between(Vec3::Y)
    }
}

#![allow(missing_docs)]
pub mod local_transform;
pub mod pin;
pub mod score_board;
pub mod visible;

pub use local_transform::LocalTransform;
pub use pin::{add_pins_to_world, KnockedDown, Pin};
pub use score_board::ScoreBoard;
pub use visible::Visible;

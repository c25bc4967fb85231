#![allow(missing_docs)]
pub mod lane_reset;
pub mod pin_detector;
pub mod throw_completed;

pub use lane_reset::lane_reset_system;
pub use pin_detector::pin_detector_system;
pub use throw_completed::throw_completed_system;

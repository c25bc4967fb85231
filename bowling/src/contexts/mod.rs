#![allow(missing_docs)]
pub mod lane_context;

pub use lane_context::LaneContext;

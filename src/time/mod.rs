//! Frame/time conversion helpers

pub mod frames;

pub use frames::{frame_to_timestamp, INPUT_RATE_HZ};

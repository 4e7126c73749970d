//! Capture log parsing
//!
//! Turns the plain-text "User Data" dump produced by the capture rig into
//! per-channel frame/value series:
//! - Section scanning with frame sample extraction
//! - `ParsedLog` session files (parse once, merge later)

pub mod log;
pub mod section;

pub use log::{ParsedLog, CHANNEL_LEFT_ARM, CHANNEL_RIGHT_ARM, CHANNEL_ROTATION, STANDARD_CHANNELS};
pub use section::{parse_section, FrameSeries};

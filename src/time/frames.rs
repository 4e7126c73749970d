//! Frame-index time conversions
//!
//! Capture logs are sampled at a fixed 50 Hz. All derivative math and
//! resampling in this crate assumes that rate.

/// Fixed sample rate of the capture logs (frames per second).
pub const INPUT_RATE_HZ: f64 = 50.0;

/// Format a frame index as a `m:ss` timestamp at the input rate.
pub fn frame_to_timestamp(frame: usize) -> String {
    let total_seconds = frame as f64 / INPUT_RATE_HZ;
    let minutes = (total_seconds / 60.0).floor() as u64;
    let seconds = (total_seconds % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, seconds)
}

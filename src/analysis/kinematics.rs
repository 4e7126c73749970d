//! Derivative Statistics
//!
//! Speed and acceleration are finite differences over the evaluated frame
//! sequence at the fixed 50 Hz input rate, divided by 6 to convert from
//! raw servo units to the rig's mechanical units. That factor comes from
//! the rig's gearing and must not change.

use crate::parse::FrameSeries;
use crate::time::INPUT_RATE_HZ;
use serde::{Deserialize, Serialize};

/// Speed and acceleration thresholds for one channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelLimits {
    /// Maximum allowed speed (units/second)
    pub speed: f64,
    /// Maximum allowed acceleration (units/second squared)
    pub accel: f64,
}

/// A single frame where a derivative exceeded its limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExceedanceEvent {
    /// Index into the evaluated frame sequence
    pub frame: usize,
    /// Derivative magnitude at that frame
    pub magnitude: f64,
}

/// Result of analyzing one channel
#[derive(Debug, Clone, PartialEq)]
pub struct StatsResult {
    /// Largest observed speed
    pub max_speed: f64,
    /// Largest observed acceleration
    pub max_accel: f64,
    /// Frame index of the speed peak (first occurrence on ties)
    pub max_speed_frame: usize,
    /// Frame index of the acceleration peak (first occurrence on ties)
    pub max_accel_frame: usize,
    /// Frames whose speed exceeded the limit
    pub exceeded_speed: Vec<ExceedanceEvent>,
    /// Frames whose acceleration exceeded the limit
    pub exceeded_accel: Vec<ExceedanceEvent>,
}

/// Compute derivative statistics for one channel.
///
/// `frames` is the ascending frame-index sequence to evaluate; it may be
/// a subset or superset of the series' own keys, and missing keys read
/// as 0. Speed uses positions i >= 1, acceleration i >= 2, so short
/// inputs simply produce empty event lists. Inputs are not mutated.
pub fn calculate_stats(
    series: &FrameSeries,
    frames: &[usize],
    limits: &ChannelLimits,
) -> StatsResult {
    let values: Vec<f64> = frames
        .iter()
        .map(|f| series.get(f).copied().unwrap_or(0.0))
        .collect();
    let dt = 1.0 / INPUT_RATE_HZ;

    let mut max_speed = 0.0;
    let mut max_accel = 0.0;
    let mut max_speed_frame = 0;
    let mut max_accel_frame = 0;
    let mut exceeded_speed = Vec::new();
    let mut exceeded_accel = Vec::new();

    for i in 1..values.len() {
        let speed = ((values[i] - values[i - 1]) / dt).abs() / 6.0;
        if speed > max_speed {
            max_speed = speed;
            max_speed_frame = i;
        }
        if speed > limits.speed {
            exceeded_speed.push(ExceedanceEvent {
                frame: i,
                magnitude: speed,
            });
        }
    }

    for i in 2..values.len() {
        let accel = ((values[i] - 2.0 * values[i - 1] + values[i - 2]) / (dt * dt)).abs() / 6.0;
        if accel > max_accel {
            max_accel = accel;
            max_accel_frame = i;
        }
        if accel > limits.accel {
            exceeded_accel.push(ExceedanceEvent {
                frame: i,
                magnitude: accel,
            });
        }
    }

    StatsResult {
        max_speed,
        max_accel,
        max_speed_frame,
        max_accel_frame,
        exceeded_speed,
        exceeded_accel,
    }
}

//! Kinematic analysis of channel series
//!
//! Computes first- and second-derivative extremes over a frame series,
//! flags frames that exceed configured speed/acceleration limits, and
//! coalesces flagged frames into contiguous intervals for reporting.

pub mod intervals;
pub mod kinematics;

pub use intervals::{group_frames_into_intervals, Interval};
pub use kinematics::{calculate_stats, ExceedanceEvent, StatsResult};

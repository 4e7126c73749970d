//! # Choreo Lab
//!
//! Analyzes textual motion-capture logs from the animatronic capture rig
//! and exports choreography CSVs for the show assembly tools.
//!
//! ## Overview
//!
//! A capture log is a plain-text dump of "User Data" sections, one per
//! channel (structure rotation plus the two arms), each holding per-frame
//! samples at 50 Hz. This library extracts those series, checks them
//! against per-channel speed/acceleration limits, and serializes
//! resampled single-log or merged multi-performer tables as CSV.
//!
//! ## Quick Start
//!
//! ```
//! use choreo_lab::parse::ParsedLog;
//! use choreo_lab::analysis::{calculate_stats, group_frames_into_intervals};
//! use choreo_lab::analysis::kinematics::ChannelLimits;
//!
//! let text = "User Data: Rotation\nFrame 0: 0.0\nFrame 1: 12.0\n";
//! let log = ParsedLog::from_text("show1.txt", text);
//!
//! let limits = ChannelLimits { speed: 50.0, accel: 1000.0 };
//! let series = log.channel("Rotation").expect("section present");
//! let stats = calculate_stats(series, &log.frames, &limits);
//! let intervals = group_frames_into_intervals(&stats.exceeded_speed);
//! assert_eq!(intervals.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! - [`parse`]: "User Data" section scanning and `ParsedLog` sessions
//! - [`analysis`]: derivative statistics and exceedance intervals
//! - [`resample`]: pair-averaging and rate-floor resampling policies
//! - [`export`]: CSV serialization and the multi-performer merge
//! - [`time`]: frame/timestamp conversion at the fixed 50 Hz rate
//! - [`app`]: CLI and configuration management
//!
//! ## Pipeline
//!
//! ```text
//! raw text ──▶ parse ──▶ ParsedLog ──┬──▶ analysis ──▶ stats/intervals
//!                                    └──▶ resample ──▶ export ──▶ CSV bytes
//! ```
//!
//! Every stage is a pure function over in-memory data; the only side
//! effect is writing the final byte stream. Gaps in the input degrade to
//! documented defaults (absent section, zero sample, blank cell) so an
//! export always completes.

pub mod analysis;
pub mod app;
pub mod export;
pub mod parse;
pub mod resample;
pub mod time;

// Re-export commonly used types
pub use analysis::{calculate_stats, group_frames_into_intervals, Interval, StatsResult};
pub use export::{create_full_choreography, csv_bytes, ChoreographyMapping, CsvTable};
pub use parse::{parse_section, FrameSeries, ParsedLog};
pub use resample::ResamplePolicy;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

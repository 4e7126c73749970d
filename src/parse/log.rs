//! Parsed Log Sessions
//!
//! A `ParsedLog` is one capture file's extraction result: the file
//! identifier, the ascending list of frame indices observed, and the
//! per-channel series. It is built once per file and never mutated by
//! the analysis or export stages.

use super::section::{parse_section, FrameSeries};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Structure rotation channel name as it appears in the log.
pub const CHANNEL_ROTATION: &str = "Rotation";
/// Left arm channel name.
pub const CHANNEL_LEFT_ARM: &str = "Left Arm";
/// Right arm channel name.
pub const CHANNEL_RIGHT_ARM: &str = "Right Arm";

/// The three channels every performer log is expected to carry.
pub const STANDARD_CHANNELS: [&str; 3] = [CHANNEL_ROTATION, CHANNEL_LEFT_ARM, CHANNEL_RIGHT_ARM];

/// One capture file's extraction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedLog {
    /// Source file identifier (used to match choreography mapping entries)
    pub file_name: String,
    /// Frame indices observed across all channels, ascending, deduplicated
    pub frames: Vec<usize>,
    /// Channel name to sample series
    pub channels: BTreeMap<String, FrameSeries>,
}

impl ParsedLog {
    /// Parse the standard channels out of raw log text.
    ///
    /// Channels absent from the text are simply not inserted; an input
    /// with no recognizable sections yields an empty (but valid) log.
    pub fn from_text(file_name: impl Into<String>, text: &str) -> Self {
        let mut channels = BTreeMap::new();
        let mut frame_set = BTreeSet::new();

        for name in STANDARD_CHANNELS {
            if let Some(series) = parse_section(text, name) {
                frame_set.extend(series.keys().copied());
                channels.insert(name.to_string(), series);
            }
        }

        Self {
            file_name: file_name.into(),
            frames: frame_set.into_iter().collect(),
            channels,
        }
    }

    /// Look up a channel's series by name.
    pub fn channel(&self, name: &str) -> Option<&FrameSeries> {
        self.channels.get(name)
    }

    /// Sample at a specific frame of a channel, 0 when missing.
    pub fn sample(&self, name: &str, frame: usize) -> f64 {
        self.channels
            .get(name)
            .and_then(|s| s.get(&frame))
            .copied()
            .unwrap_or(0.0)
    }

    /// Number of samples recorded for the rotation channel.
    ///
    /// The merged choreography export is sized by the longest rotation
    /// series across all logs.
    pub fn rotation_len(&self) -> usize {
        self.channel(CHANNEL_ROTATION).map_or(0, |s| s.len())
    }

    /// Save the session as pretty JSON.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a previously saved session.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let log = serde_json::from_str(&json)?;
        Ok(log)
    }
}

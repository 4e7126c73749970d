//! Multi-Performer Choreography Merge
//!
//! Combines several parsed logs into one synchronized table, one
//! 3-column block per module. Module indices in the mapping are 1-based
//! and signed: a negative index mirrors that performer's motion (arm
//! columns swapped, rotation sign flipped). Every gap degrades to blank
//! cells or zero so a batch export always completes.

use super::csv::{Cell, CsvTable};
use crate::parse::{ParsedLog, CHANNEL_LEFT_ARM, CHANNEL_RIGHT_ARM, CHANNEL_ROTATION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Fixed output name for the merged export.
pub const MERGED_CSV_NAME: &str = "full_choreography.csv";

/// One mapping entry: which modules a log file drives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Log file identifier, matched against `ParsedLog::file_name`
    pub file: String,
    /// Signed 1-based module indices; negative means mirrored
    pub modules: Vec<i32>,
}

/// Ordered association from log file to module indices.
///
/// Entry order is walk order: output column blocks appear in the order
/// the entries (and their module lists) are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoreographyMapping {
    /// Mapping entries in walk order
    pub entries: Vec<MappingEntry>,
}

impl ChoreographyMapping {
    /// Load a mapping from a JSON file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let mapping = serde_json::from_str(&json)?;
        Ok(mapping)
    }

    /// Walk all (file, module) pairs in order.
    fn walk(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries
            .iter()
            .flat_map(|e| e.modules.iter().map(move |&m| (e.file.as_str(), m)))
    }
}

/// Build the merged choreography table.
///
/// Column labels encode the module's block position for the downstream
/// tools: module index m (sign stripped) owns columns (m-1)*3 through
/// (m-1)*3+2. Frame count is the largest Rotation sample count across
/// the logs; rows are decimated by pair averaging, and mirroring is
/// applied after averaging. A mapping entry without a matching log
/// yields blank cells for that block; missing samples read as 0.
///
/// Lookups use raw frame numbers, so capture series are assumed to be
/// contiguous from frame 0 (the rig records every frame). A sparse
/// series contributes zeros at the frames it skipped.
pub fn create_full_choreography(
    logs: &[ParsedLog],
    mapping: &ChoreographyMapping,
) -> CsvTable {
    let mut headers = Vec::new();
    for (_, module) in mapping.walk() {
        let block = (module.unsigned_abs().saturating_sub(1) as usize) * 3;
        headers.push(block.to_string());
        headers.push((block + 1).to_string());
        headers.push((block + 2).to_string());
    }

    let frame_count = logs.iter().map(ParsedLog::rotation_len).max().unwrap_or(0);

    let mut table = CsvTable::new(headers);

    let mut pos = 0;
    while pos < frame_count {
        let mut row = Vec::with_capacity(table.headers.len());

        for (file, module) in mapping.walk() {
            let log = match logs.iter().find(|l| l.file_name == file) {
                Some(l) => l,
                None => {
                    warn!(file, "no parsed log for mapping entry, emitting blanks");
                    row.extend([Cell::Empty, Cell::Empty, Cell::Empty]);
                    continue;
                }
            };

            // Pair-averaging decimation: frame 0 as-is, then the
            // midpoint of each even frame and its predecessor.
            let avg = |channel: &str| -> f64 {
                if pos == 0 {
                    log.sample(channel, 0)
                } else {
                    (log.sample(channel, pos) + log.sample(channel, pos - 1)) / 2.0
                }
            };

            // Mirroring applies after averaging.
            let mirror = if module < 0 { -1.0 } else { 1.0 };
            let rotation = mirror * avg(CHANNEL_ROTATION);
            let left = avg(CHANNEL_LEFT_ARM);
            // Right arm servos are mounted opposite: always negated.
            let right = -avg(CHANNEL_RIGHT_ARM);

            if module < 0 {
                row.extend([Cell::Num(rotation), Cell::Num(right), Cell::Num(left)]);
            } else {
                row.extend([Cell::Num(rotation), Cell::Num(left), Cell::Num(right)]);
            }
        }

        table.push_row(row);
        pos += 2;
    }

    table
}

//! CSV Serialization
//!
//! Cells are comma-joined and rows newline-joined with no trailing
//! newline. No quoting or escaping is performed: every cell is numeric,
//! empty, or a plain ASCII label, and the downstream tools expect the
//! output byte-for-byte. Embedded commas in text cells would corrupt the
//! row, so don't put any there.

use crate::parse::{ParsedLog, CHANNEL_LEFT_ARM, CHANNEL_RIGHT_ARM, CHANNEL_ROTATION};
use crate::resample::ResamplePolicy;
use std::fmt;

/// A single CSV cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Rendered as an empty field
    Empty,
    /// Rendered via f64 Display (1.0 prints as "1")
    Num(f64),
    /// Rendered verbatim
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Num(v) => write!(f, "{}", v),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Header row plus data rows, produced fresh per export call
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    /// Column labels
    pub headers: Vec<String>,
    /// Data rows; every row is as wide as the header
    pub rows: Vec<Vec<Cell>>,
}

impl CsvTable {
    /// Create an empty table with the given header.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a data row. Row width must equal header width.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len(), "row width != header width");
        self.rows.push(row);
    }
}

/// Serialize a table to CSV bytes.
pub fn csv_bytes(table: &CsvTable) -> Vec<u8> {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(table.headers.join(","));
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(Cell::to_string).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n").into_bytes()
}

/// Derive the output CSV name from a source log name.
///
/// Strips a trailing `.txt` (case-insensitive) and appends `.csv`.
pub fn csv_file_name(source: &str) -> String {
    let stem = match source.len().checked_sub(4).and_then(|i| source.get(i..)) {
        Some(ext) if ext.eq_ignore_ascii_case(".txt") => &source[..source.len() - 4],
        _ => source,
    };
    format!("{}.csv", stem)
}

/// Build the single-log export table.
///
/// Headers are the fixed column labels `0,1,2`; each row carries the
/// Rotation, Left Arm and Right Arm values for one output frame after
/// resampling with the given policy. Missing samples read as 0.
pub fn build_log_table(log: &ParsedLog, policy: ResamplePolicy) -> CsvTable {
    let empty = crate::parse::FrameSeries::new();
    let channel = |name: &str| log.channel(name).unwrap_or(&empty);

    let rotation = policy.resample(channel(CHANNEL_ROTATION), &log.frames);
    let left = policy.resample(channel(CHANNEL_LEFT_ARM), &log.frames);
    let right = policy.resample(channel(CHANNEL_RIGHT_ARM), &log.frames);

    let mut table = CsvTable::new(vec!["0".into(), "1".into(), "2".into()]);
    for i in 0..rotation.len() {
        table.push_row(vec![
            Cell::Num(rotation[i]),
            Cell::Num(left.get(i).copied().unwrap_or(0.0)),
            Cell::Num(right.get(i).copied().unwrap_or(0.0)),
        ]);
    }
    table
}

//! "User Data" Section Scanning
//!
//! A capture log is a flat text dump containing blocks of the form
//!
//! ```text
//! User Data: Rotation
//!   Frame 0: 12.5
//!   Frame 1: -3.0e-1
//! ```
//!
//! Each block runs until the next `User Data:` header, a `NULL OBJECTS`
//! sentinel, or the end of the file.

use regex::Regex;
use std::collections::BTreeMap;

/// Per-channel sample series: frame index to value.
///
/// Keys are unique and ordered; frame indices need not be contiguous.
pub type FrameSeries = BTreeMap<usize, f64>;

/// Extract one named channel's frame/value series from raw log text.
///
/// The header match is case-insensitive. Returns `None` when no matching
/// section header exists. Within the section, samples are collected
/// left-to-right; if a frame index repeats, the last occurrence wins.
///
/// Pure function of its two inputs.
pub fn parse_section(text: &str, section_name: &str) -> Option<FrameSeries> {
    let header = Regex::new(&format!(
        r"(?i)User Data: {}",
        regex::escape(section_name)
    ))
    .ok()?;
    let start = header.find(text)?.end();

    // Section runs until the next header, the sentinel, or end of text.
    let terminator = Regex::new(r"(?i)User Data:|NULL OBJECTS").expect("static pattern");
    let end = terminator
        .find(&text[start..])
        .map(|m| start + m.start())
        .unwrap_or(text.len());

    let frame_re =
        Regex::new(r"Frame (\d+): (-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)").expect("static pattern");

    let mut frames = FrameSeries::new();
    for caps in frame_re.captures_iter(&text[start..end]) {
        let frame: usize = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        let value: f64 = match caps[2].parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        // Last write wins on duplicate frame indices.
        frames.insert(frame, value);
    }

    Some(frames)
}

//! Exceedance Interval Coalescing
//!
//! Limit reports are easier to read as frame ranges than as individual
//! frames, so runs of adjacent exceedance events are merged into
//! intervals carrying the worst magnitude seen in the run.

use super::kinematics::ExceedanceEvent;

/// One contiguous run of exceedance events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// First frame of the run
    pub start: usize,
    /// Last frame of the run (inclusive)
    pub end: usize,
    /// Largest magnitude observed over the run's member frames
    pub peak: f64,
}

/// Group exceedance events into contiguous frame intervals.
///
/// Events are sorted by frame ascending (stable); consecutive-by-one
/// frames merge into one interval, a gap of 2 or more starts a new one.
/// Empty input yields an empty output.
pub fn group_frames_into_intervals(events: &[ExceedanceEvent]) -> Vec<Interval> {
    if events.is_empty() {
        return Vec::new();
    }

    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.frame);

    let mut intervals = Vec::new();
    let mut start = sorted[0].frame;
    let mut prev = sorted[0].frame;
    let mut peak = sorted[0].magnitude;

    for event in &sorted[1..] {
        if event.frame == prev + 1 {
            prev = event.frame;
            if event.magnitude > peak {
                peak = event.magnitude;
            }
        } else {
            intervals.push(Interval { start, end: prev, peak });
            start = event.frame;
            prev = event.frame;
            peak = event.magnitude;
        }
    }

    intervals.push(Interval { start, end: prev, peak });
    intervals
}

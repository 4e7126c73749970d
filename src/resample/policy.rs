//! Resampling Policies

use crate::parse::FrameSeries;
use crate::time::INPUT_RATE_HZ;
use serde::{Deserialize, Serialize};

/// Name of a resampling policy, for config files and CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Halve the rate by averaging adjacent sample pairs
    PairAveraging,
    /// Convert to an arbitrary rate by nearest-floor sample lookup
    RateFloor,
}

/// A concrete resampling strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResamplePolicy {
    /// Keep position 0 as-is; every even position thereafter emits the
    /// average of that sample and its immediate predecessor; odd
    /// positions are dropped.
    PairAveraging,
    /// Output frame count is floor(duration_seconds * target_rate); each
    /// output frame takes the source sample at
    /// floor(i / target_rate * 50) directly. Floor lookup only, no
    /// interpolation.
    RateFloor {
        /// Target output rate (frames per second)
        target_rate: f64,
    },
}

impl ResamplePolicy {
    /// Build a policy from its config/CLI representation.
    pub fn from_kind(kind: PolicyKind, target_rate: f64) -> Self {
        match kind {
            PolicyKind::PairAveraging => Self::PairAveraging,
            PolicyKind::RateFloor => Self::RateFloor { target_rate },
        }
    }

    /// Resample one channel over the evaluated frame sequence.
    ///
    /// Returns one value per output frame, in increasing output-frame
    /// order. A frame index without a recorded sample reads as 0.
    pub fn resample(&self, series: &FrameSeries, frames: &[usize]) -> Vec<f64> {
        let value = |pos: usize| -> f64 {
            frames
                .get(pos)
                .and_then(|f| series.get(f))
                .copied()
                .unwrap_or(0.0)
        };

        match *self {
            Self::PairAveraging => {
                let mut out = Vec::with_capacity(frames.len() / 2 + 1);
                let mut pos = 0;
                while pos < frames.len() {
                    if pos == 0 {
                        out.push(value(0));
                    } else {
                        out.push((value(pos) + value(pos - 1)) / 2.0);
                    }
                    pos += 2;
                }
                out
            }
            Self::RateFloor { target_rate } => {
                if frames.is_empty() || target_rate <= 0.0 {
                    return Vec::new();
                }
                let duration_secs = frames.len() as f64 / INPUT_RATE_HZ;
                let count = (duration_secs * target_rate).floor() as usize;
                (0..count)
                    .map(|i| {
                        let src = (i as f64 / target_rate * INPUT_RATE_HZ).floor() as usize;
                        value(src)
                    })
                    .collect()
            }
        }
    }
}

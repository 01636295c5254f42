//! Parameters configuring a ridge detection run.

use crate::hessian::{CandidateFilter, Polarity};
use serde::{Deserialize, Serialize};

/// Options for [`RidgeDetector`](super::RidgeDetector).
///
/// - `width`: expected ridge width in pixels; the Gaussian scale is
///   `width / sqrt(3)`.
/// - `polarity`: which curvature sign counts as a ridge.
/// - `lower_threshold`: minimum eigen magnitude for a candidate (0 disables).
/// - `min_points`: polylines shorter than this are dropped after tracing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RidgeOptions {
    pub width: f64,
    pub polarity: Polarity,
    pub lower_threshold: f64,
    pub min_points: usize,
}

impl Default for RidgeOptions {
    fn default() -> Self {
        Self {
            width: 3.0,
            polarity: Polarity::Bright,
            lower_threshold: 0.0,
            min_points: 1,
        }
    }
}

impl RidgeOptions {
    pub fn with_width(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn candidate_filter(&self) -> CandidateFilter {
        CandidateFilter {
            polarity: self.polarity,
            lower_threshold: self.lower_threshold,
        }
    }
}

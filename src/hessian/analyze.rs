//! Per-pixel ridge classification from Gaussian derivatives.
//!
//! For each pixel the dominant eigenvector `n` of the Hessian is the ridge
//! normal. A second order Taylor expansion of the intensity along `n` has its
//! extremum at `t = -(∇I·n) / (nᵀ H n)`; the pixel is a ridge candidate when
//! the point `t·n` lies inside its own footprint (`|px|, |py| < 0.5`).
use super::derivatives::{DerivativeField, DerivativeSample};
use super::eigen::symmetric_eigen2;
use crate::metadata::{MetadataField, PixelMetadata};
use log::debug;
use nalgebra::Vector2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Curvatures at or below this magnitude are treated as flat.
pub const DEGENERATE_CURVATURE: f64 = 1e-9;

/// Which sign of the dominant curvature counts as a ridge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Bright lines on a darker background (negative dominant eigenvalue).
    #[default]
    Bright,
    /// Dark lines on a brighter background (positive dominant eigenvalue).
    Dark,
    /// Both.
    Any,
}

impl Polarity {
    #[inline]
    pub fn accepts(self, eigenvalue: f64) -> bool {
        match self {
            Polarity::Bright => eigenvalue < 0.0,
            Polarity::Dark => eigenvalue > 0.0,
            Polarity::Any => true,
        }
    }
}

/// Extra conditions a pixel must meet besides the sub-pixel test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateFilter {
    pub polarity: Polarity,
    /// Minimum `|eigenvalue|`; zero disables the check.
    pub lower_threshold: f64,
}

impl CandidateFilter {
    /// Accept every pixel that passes the sub-pixel test.
    pub fn unfiltered() -> Self {
        Self {
            polarity: Polarity::Any,
            lower_threshold: 0.0,
        }
    }
}

/// Classify one pixel. `None` means "not a ridge candidate".
pub fn analyze_pixel(s: &DerivativeSample, filter: &CandidateFilter) -> Option<PixelMetadata> {
    let eigen = symmetric_eigen2(s.ixx, s.ixy, s.iyy)?;
    let n = eigen.dominant_vector;
    let (nx, ny) = (n.x, n.y);

    let denominator = s.ixx * nx * nx + 2.0 * s.ixy * nx * ny + s.iyy * ny * ny;
    if !denominator.is_finite() || denominator.abs() <= DEGENERATE_CURVATURE {
        return None;
    }
    let t = -(s.ix * nx + s.iy * ny) / denominator;
    if !t.is_finite() {
        return None;
    }
    let offset = Vector2::new(t * nx, t * ny);
    if offset.x.abs() >= 0.5 || offset.y.abs() >= 0.5 {
        return None;
    }

    let magnitude = eigen.dominant_value.abs();
    if !filter.polarity.accepts(eigen.dominant_value) || magnitude < filter.lower_threshold {
        return None;
    }
    Some(PixelMetadata::candidate(magnitude, n, offset))
}

/// Run [`analyze_pixel`] over the whole raster, one row per rayon task.
pub fn analyze_field(derivatives: &DerivativeField, filter: &CandidateFilter) -> MetadataField {
    let start = Instant::now();
    let (w, h) = (derivatives.width(), derivatives.height());
    let mut field = MetadataField::new(w, h);
    if w == 0 || h == 0 {
        return field;
    }
    field
        .records_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, record) in row.iter_mut().enumerate() {
                let sample = derivatives.sample(y * w + x);
                *record = analyze_pixel(&sample, filter).unwrap_or_else(PixelMetadata::empty);
            }
        });
    debug!(
        "analyze_field {}x{} candidates={} in {:.3} ms",
        w,
        h,
        field.candidate_count(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    field
}

#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod tracer;

// Pipeline stages, public for tools and tests.
pub mod angle;
pub mod filters;
pub mod hessian;
pub mod metadata;
pub mod octant;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{detect_ridges, detect_ridges_raster, RidgeDetector, RidgeOptions};
pub use crate::diagnostics::DetectionReport;
pub use crate::error::RidgeError;
pub use crate::hessian::Polarity;
pub use crate::tracer::{CancellationToken, Polyline, RidgePoint};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use ridge_detector::prelude::*;
///
/// # fn main() -> Result<(), RidgeError> {
/// let (w, h) = (64usize, 48usize);
/// let img = ImageF64::from_fn(w, h, |_, y| if (20..=22).contains(&y) { 1.0 } else { 0.0 });
///
/// let det = RidgeDetector::new(RidgeOptions::with_width(3.0));
/// let report = det.detect_with_report(&img)?;
/// println!("polylines={} total_ms={:.3}", report.polylines.len(), report.timing.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF64, ImageU8, RasterView};
    pub use crate::{
        detect_ridges, Polarity, Polyline, RidgeDetector, RidgeError, RidgeOptions, RidgePoint,
    };
}

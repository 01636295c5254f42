//! Ridge detector driving the pipeline end-to-end.
//!
//! Overview
//! - Derives the Gaussian scale `sigma = width / sqrt(3)` and builds the five
//!   derivative rasters (Ix, Iy, Ixx, Ixy, Iyy).
//! - Analyzes every pixel's Hessian into a [`MetadataField`] of normals,
//!   sub-pixel offsets and candidate flags.
//! - Traces the field into polylines, strongest seed first, consuming pixels
//!   as they are emitted.
//!
//! Typical usage:
//! ```no_run
//! use ridge_detector::{RidgeDetector, RidgeOptions};
//! use ridge_detector::image::ImageF64;
//!
//! # fn example(image: ImageF64) -> Result<(), ridge_detector::RidgeError> {
//! let detector = RidgeDetector::new(RidgeOptions::with_width(3.0));
//! for line in detector.detect(&image)? {
//!     println!("{} points", line.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod options;

pub use options::RidgeOptions;

use crate::diagnostics::{DetectionReport, TimingBreakdown};
use crate::error::RidgeError;
use crate::hessian::{analyze_field, build_derivative_field, sigma_for_width};
use crate::image::{ImageF64, RasterView};
use crate::metadata::MetadataField;
use crate::tracer::{CancellationToken, Polyline, RidgeTracer};
use log::debug;
use std::time::Instant;

/// Hessian ridge detector with octant-guided tracing.
#[derive(Clone, Debug, Default)]
pub struct RidgeDetector {
    options: RidgeOptions,
    cancel: Option<CancellationToken>,
}

impl RidgeDetector {
    pub fn new(options: RidgeOptions) -> Self {
        Self {
            options,
            cancel: None,
        }
    }

    /// Attach a token checked by the tracer before each seed.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run derivatives and per-pixel analysis only.
    pub fn analyze(&self, image: &ImageF64) -> Result<MetadataField, RidgeError> {
        let sigma = sigma_for_width(self.options.width)?;
        let derivatives = build_derivative_field(image, sigma)?;
        Ok(analyze_field(&derivatives, &self.options.candidate_filter()))
    }

    /// Detect ridges and return the polylines.
    pub fn detect(&self, image: &ImageF64) -> Result<Vec<Polyline>, RidgeError> {
        Ok(self.detect_with_report(image)?.polylines)
    }

    /// Detect ridges in a shape-tagged buffer; rejects anything not 2D.
    pub fn detect_raster(&self, raster: RasterView<'_>) -> Result<Vec<Polyline>, RidgeError> {
        let image = raster.to_image()?;
        self.detect(&image)
    }

    /// Detect ridges and return the polylines with counts and stage timings.
    pub fn detect_with_report(&self, image: &ImageF64) -> Result<DetectionReport, RidgeError> {
        let (width, height) = (image.w, image.h);
        let sigma = sigma_for_width(self.options.width)?;
        debug!(
            "RidgeDetector::detect start w={} h={} width={} sigma={:.4}",
            width, height, self.options.width, sigma
        );
        let total_start = Instant::now();

        let deriv_start = Instant::now();
        let derivatives = build_derivative_field(image, sigma)?;
        let deriv_ms = elapsed_ms(deriv_start);

        let analyze_start = Instant::now();
        let mut field = analyze_field(&derivatives, &self.options.candidate_filter());
        drop(derivatives);
        let candidate_count = field.candidate_count();
        let analyze_ms = elapsed_ms(analyze_start);

        let trace_start = Instant::now();
        let mut tracer = RidgeTracer::new(&mut field);
        if let Some(token) = &self.cancel {
            tracer = tracer.with_cancellation(token.clone());
        }
        let traced = tracer.trace()?;
        let trace_ms = elapsed_ms(trace_start);

        let traced_count = traced.len();
        let polylines: Vec<Polyline> = traced
            .into_iter()
            .filter(|line| line.len() >= self.options.min_points)
            .collect();

        let mut timing = TimingBreakdown::with_total(elapsed_ms(total_start));
        timing.push("derivatives", deriv_ms);
        timing.push("analysis", analyze_ms);
        timing.push("tracing", trace_ms);

        debug!(
            "RidgeDetector::detect done candidates={} traced={} kept={} total={:.3} ms",
            candidate_count,
            traced_count,
            polylines.len(),
            timing.total_ms
        );

        Ok(DetectionReport {
            width,
            height,
            sigma,
            candidate_count,
            traced_count,
            polylines,
            timing,
        })
    }
}

/// Detect ridges of the given width with default options otherwise.
pub fn detect_ridges(image: &ImageF64, width: f64) -> Result<Vec<Polyline>, RidgeError> {
    RidgeDetector::new(RidgeOptions::with_width(width)).detect(image)
}

/// [`detect_ridges`] for a shape-tagged buffer.
pub fn detect_ridges_raster(
    raster: RasterView<'_>,
    width: f64,
) -> Result<Vec<Polyline>, RidgeError> {
    RidgeDetector::new(RidgeOptions::with_width(width)).detect_raster(raster)
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

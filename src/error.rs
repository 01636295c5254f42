use crate::filters::MAX_SIGMA;
use std::fmt;

/// Errors surfaced by the ridge detection entry points.
///
/// Numerical degeneracies inside the per-pixel analysis are never reported
/// here; such pixels are simply not ridge candidates.
#[derive(Clone, Debug, PartialEq)]
pub enum RidgeError {
    /// The input raster is not two-dimensional.
    Dimensionality { found: usize },
    /// A pixel buffer does not match the declared raster shape.
    SizeMismatch { expected: usize, actual: usize },
    /// The line width is not finite and positive, or its Gaussian scale
    /// exceeds [`crate::filters::MAX_SIGMA`].
    InvalidWidth(f64),
    /// The Gaussian scale is not finite and positive, or exceeds
    /// [`crate::filters::MAX_SIGMA`].
    InvalidSigma(f64),
    /// A cancellation token fired while tracing.
    Cancelled,
}

impl fmt::Display for RidgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensionality { found } => {
                write!(f, "ridge detection requires a 2D raster, got {found} dimensions")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} pixels, got {actual}")
            }
            Self::InvalidWidth(width) => write!(
                f,
                "line width must be finite, positive and at most {:.0}, got {width}",
                MAX_SIGMA * 3f64.sqrt()
            ),
            Self::InvalidSigma(sigma) => write!(
                f,
                "gaussian sigma must be finite, positive and at most {MAX_SIGMA}, got {sigma}"
            ),
            Self::Cancelled => write!(f, "ridge tracing was cancelled"),
        }
    }
}

impl std::error::Error for RidgeError {}

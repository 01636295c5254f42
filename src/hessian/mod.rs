//! Hessian-based ridge evidence.
//!
//! - [`derivatives`]: Gaussian derivative rasters Ix, Iy, Ixx, Ixy, Iyy.
//! - [`eigen`]: closed-form 2x2 symmetric eigen decomposition.
//! - [`analyze`]: per-pixel normal, sub-pixel offset and candidate test,
//!   assembled into a [`crate::metadata::MetadataField`].
//!
//! Derivatives and analysis are parallel over rows; the returned field is
//! complete before any tracing starts.

pub mod analyze;
pub mod derivatives;
pub mod eigen;

pub use analyze::{analyze_field, analyze_pixel, CandidateFilter, Polarity, DEGENERATE_CURVATURE};
pub use derivatives::{build_derivative_field, sigma_for_width, DerivativeField, DerivativeSample};
pub use eigen::{symmetric_eigen2, SymmetricEigen2};

//! Octant-guided ridge tracing over a [`crate::metadata::MetadataField`].

pub mod cancel;
pub mod polyline;
pub mod trace;

pub use cancel::CancellationToken;
pub use polyline::{Polyline, RidgePoint};
pub use trace::RidgeTracer;

//! Gaussian smoothing and derivative-of-Gaussian filtering.
//!
//! The ridge analysis only ever needs separable filters: a 2D derivative of
//! order `(ox, oy)` is a 1D pass along rows with the order-`ox` kernel
//! followed by a 1D pass along columns with the order-`oy` kernel. Borders
//! clamp to the image extents (replicate).

pub mod convolve;
pub mod gaussian;

pub use convolve::{convolve_cols, convolve_rows, convolve_separable, SeparableFilter};
pub use gaussian::{DerivativeOrder, GaussianKernel1D, MAX_SIGMA};

use crate::error::RidgeError;
use crate::image::ImageF64;

/// Derivative-of-Gaussian filter `(image, sigma, order_x, order_y)`.
///
/// Output has the input's extent. Fails for a non-finite, non-positive or
/// larger than [`MAX_SIGMA`] `sigma`.
pub fn gaussian_derivative(
    image: &ImageF64,
    sigma: f64,
    order_x: DerivativeOrder,
    order_y: DerivativeOrder,
) -> Result<ImageF64, RidgeError> {
    let kernel = GaussianKernel1D::new(sigma)?;
    Ok(convolve_separable(
        image,
        &kernel.filter(order_x),
        &kernel.filter(order_y),
    ))
}

//! Shape-tagged raster buffers.
//!
//! Callers that hold generic n-dimensional buffers (e.g. volumes, stacks or
//! single planes exported from other tools) hand them over as a
//! [`RasterView`]. Ridge tracing is only defined for planes, so conversion
//! rejects anything that is not exactly two-dimensional.
use super::ImageF64;
use crate::error::RidgeError;

/// Borrowed n-dimensional buffer in row-major order, first axis fastest
/// varying (`shape = [width, height, ...]`).
#[derive(Clone, Copy, Debug)]
pub struct RasterView<'a> {
    pub shape: &'a [usize],
    pub data: &'a [f64],
}

impl<'a> RasterView<'a> {
    pub fn new(shape: &'a [usize], data: &'a [f64]) -> Self {
        Self { shape, data }
    }

    pub fn num_dimensions(&self) -> usize {
        self.shape.len()
    }

    /// Copy into an owned 2D image, validating dimensionality and length.
    pub fn to_image(&self) -> Result<ImageF64, RidgeError> {
        let &[w, h] = self.shape else {
            return Err(RidgeError::Dimensionality {
                found: self.num_dimensions(),
            });
        };
        ImageF64::from_vec(w, h, self.data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_three_dimensional_shape() {
        let data = vec![0.0; 8];
        let err = RasterView::new(&[2, 2, 2], &data).to_image().unwrap_err();
        assert_eq!(err, RidgeError::Dimensionality { found: 3 });
    }

    #[test]
    fn rejects_one_dimensional_shape() {
        let data = vec![0.0; 4];
        let err = RasterView::new(&[4], &data).to_image().unwrap_err();
        assert_eq!(err, RidgeError::Dimensionality { found: 1 });
    }

    #[test]
    fn accepts_plane() {
        let data: Vec<f64> = (0..6).map(|v| v as f64).collect();
        let img = RasterView::new(&[3, 2], &data).to_image().unwrap();
        assert_eq!((img.w, img.h), (3, 2));
        assert_eq!(img.get(0, 1), 3.0);
    }

    #[test]
    fn reports_length_mismatch() {
        let data = vec![0.0; 5];
        let err = RasterView::new(&[3, 2], &data).to_image().unwrap_err();
        assert_eq!(
            err,
            RidgeError::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }
}

use super::{ImageF64, ImageView};

/// Borrowed 8-bit grayscale view with an explicit row stride.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Convert to an owned float raster with intensities scaled into `[0, 1]`.
    pub fn to_f64(&self) -> ImageF64 {
        let mut data = Vec::with_capacity(self.w * self.h);
        for row in self.rows() {
            data.extend(row.iter().map(|&v| v as f64 / 255.0));
        }
        ImageF64 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data,
        }
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

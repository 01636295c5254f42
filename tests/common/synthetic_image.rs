use ridge_detector::image::{ImageF64, ImageU8};

/// Dark image with full-width bright horizontal bands.
///
/// Each band is `(center_row, thickness)` and covers
/// `center_row - thickness / 2 ..= center_row + thickness / 2`.
pub fn horizontal_bands_u8(width: usize, height: usize, bands: &[(usize, usize)]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![0u8; width * height];
    for &(center, thickness) in bands {
        assert!(thickness > 0, "band thickness must be positive");
        let half = thickness / 2;
        for y in center.saturating_sub(half)..=(center + half).min(height - 1) {
            img[y * width..(y + 1) * width].fill(255);
        }
    }
    img
}

/// Dark image with a bright full-height vertical band.
pub fn vertical_band_u8(width: usize, height: usize, center: usize, thickness: usize) -> Vec<u8> {
    let half = thickness / 2;
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in center.saturating_sub(half)..=(center + half).min(width - 1) {
            img[y * width + x] = 255;
        }
    }
    img
}

/// Bright band along the main diagonal, `half_width` pixels either side.
pub fn diagonal_band_u8(size: usize, half_width: f64) -> Vec<u8> {
    let mut img = vec![0u8; size * size];
    for y in 0..size {
        for x in 0..size {
            let d = (x as f64 - y as f64).abs() / std::f64::consts::SQRT_2;
            if d <= half_width {
                img[y * size + x] = 255;
            }
        }
    }
    img
}

/// Converts a tightly packed 8-bit buffer into a unit-range float image.
pub fn to_image(width: usize, height: usize, buffer: &[u8]) -> ImageF64 {
    let view = ImageU8 {
        w: width,
        h: height,
        stride: width,
        data: buffer,
    };
    view.to_f64()
}

/// Photometric negative of a unit-range image.
pub fn inverted(image: &ImageF64) -> ImageF64 {
    ImageF64::from_fn(image.w, image.h, |x, y| 1.0 - image.get(x, y))
}

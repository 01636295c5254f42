//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG into an owned 8-bit gray buffer.
//! - `save_grayscale_f64`: write an `ImageF64` to a grayscale PNG.
//! - `render_overlay`: paint traced polylines over a dimmed copy of the input.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF64, ImageU8, ImageView};
use crate::tracer::Polyline;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayImageU8::new(width, height, data))
}

/// Save a float image to a grayscale PNG, mapping `[0, 1]` to `[0, 255]`.
pub fn save_grayscale_f64(image: &ImageF64, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Rescale an image linearly so its finite range maps onto `[0, 1]`.
pub fn normalize_unit(image: &ImageF64) -> ImageF64 {
    let mut out = image.clone();
    let Some((lo, hi)) = image.min_max() else {
        return out;
    };
    let span = hi - lo;
    for v in &mut out.data {
        *v = if span > 0.0 && v.is_finite() {
            (*v - lo) / span
        } else {
            0.0
        };
    }
    out
}

/// Dim the (normalized) input to half intensity and paint every polyline
/// point at full intensity.
pub fn render_overlay(image: &ImageF64, polylines: &[Polyline]) -> ImageF64 {
    let mut out = normalize_unit(image);
    for v in &mut out.data {
        *v *= 0.5;
    }
    for line in polylines {
        for p in line.points() {
            let (x, y) = (p.x as usize, p.y as usize);
            if x < out.w && y < out.h {
                out.set(x, y, 1.0);
            }
        }
    }
    out
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

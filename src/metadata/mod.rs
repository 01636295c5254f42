//! Per-pixel ridge evidence aligned 1:1 with the input raster.
//!
//! The field is produced once per detection run by the Hessian analysis and
//! then handed, by exclusive borrow, to the tracer, which consumes records as
//! it visits them. Consumed and non-candidate pixels hold the all-zero
//! sentinel record, so `is_candidate == false` always implies
//! `eigen_magnitude == 0`.
use crate::image::ImageF64;
use nalgebra::Vector2;

/// Ridge evidence for one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelMetadata {
    /// Absolute value of the dominant Hessian eigenvalue.
    pub eigen_magnitude: f64,
    /// Unit normal across the ridge; the sign is arbitrary.
    pub normal: Vector2<f64>,
    /// Offset from the pixel centre to the ridge centre along the normal.
    pub subpixel_offset: Vector2<f64>,
    pub is_candidate: bool,
}

impl PixelMetadata {
    /// Sentinel record stored for non-candidate and consumed pixels.
    pub fn empty() -> Self {
        Self {
            eigen_magnitude: 0.0,
            normal: Vector2::zeros(),
            subpixel_offset: Vector2::zeros(),
            is_candidate: false,
        }
    }

    pub fn candidate(
        eigen_magnitude: f64,
        normal: Vector2<f64>,
        subpixel_offset: Vector2<f64>,
    ) -> Self {
        Self {
            eigen_magnitude,
            normal,
            subpixel_offset,
            is_candidate: true,
        }
    }
}

impl Default for PixelMetadata {
    fn default() -> Self {
        Self::empty()
    }
}

/// Row-major raster of [`PixelMetadata`].
#[derive(Clone, Debug)]
pub struct MetadataField {
    width: usize,
    height: usize,
    records: Vec<PixelMetadata>,
}

impl MetadataField {
    /// A field with no candidates.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            records: vec![PixelMetadata::empty(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx % self.width, idx / self.width)
    }

    /// Resolve signed coordinates, returning `None` outside the raster.
    #[inline]
    pub fn checked_coords(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            None
        } else {
            Some((x as usize, y as usize))
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &PixelMetadata {
        &self.records[self.index(x, y)]
    }

    #[inline]
    pub fn record(&self, idx: usize) -> &PixelMetadata {
        &self.records[idx]
    }

    pub(crate) fn records_mut(&mut self) -> &mut [PixelMetadata] {
        &mut self.records
    }

    /// Store a record; non-candidate records are normalized to the sentinel.
    pub fn set(&mut self, x: usize, y: usize, record: PixelMetadata) {
        let idx = self.index(x, y);
        self.records[idx] = if record.is_candidate {
            record
        } else {
            PixelMetadata::empty()
        };
    }

    #[inline]
    pub fn is_candidate(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_candidate
    }

    /// Zero the record at `(x, y)`. Returns whether it was still a candidate.
    pub fn consume(&mut self, x: usize, y: usize) -> bool {
        let idx = self.index(x, y);
        self.consume_index(idx)
    }

    pub fn consume_index(&mut self, idx: usize) -> bool {
        let was_candidate = self.records[idx].is_candidate;
        self.records[idx] = PixelMetadata::empty();
        was_candidate
    }

    pub fn candidate_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_candidate).count()
    }

    /// Candidate indices ordered by decreasing eigen magnitude; equal
    /// magnitudes keep row-major order.
    pub fn candidates_by_magnitude(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.records.len())
            .filter(|&i| self.records[i].is_candidate)
            .collect();
        order.sort_by(|&a, &b| {
            self.records[b]
                .eigen_magnitude
                .total_cmp(&self.records[a].eigen_magnitude)
                .then(a.cmp(&b))
        });
        order
    }

    /// Eigen magnitudes as an image (zero for non-candidates).
    pub fn magnitude_image(&self) -> ImageF64 {
        ImageF64 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: self.records.iter().map(|r| r.eigen_magnitude).collect(),
        }
    }
}

use crate::image::{ImageF64, ImageView};
use rayon::prelude::*;

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps in left-to-right order; the length is odd and the
    /// centre tap sits at `taps().len() / 2`.
    fn taps(&self) -> &[f64];

    fn radius(&self) -> usize {
        self.taps().len() / 2
    }
}

/// Filter every row: `out[x] = sum_u taps[r + u] * row[clamp(x - u)]`.
pub fn convolve_rows(src: &ImageF64, filter: &dyn SeparableFilter) -> ImageF64 {
    let mut out = ImageF64::new(src.w, src.h);
    if src.is_empty() {
        return out;
    }
    let taps = filter.taps();
    let radius = filter.radius();
    let w = src.w;
    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, dst)| convolve_line(src.row(y), taps, radius, dst));
    out
}

/// Filter every column with the same convention as [`convolve_rows`].
///
/// Works on whole rows at a time so the inner loop stays contiguous.
pub fn convolve_cols(src: &ImageF64, filter: &dyn SeparableFilter) -> ImageF64 {
    let mut out = ImageF64::new(src.w, src.h);
    if src.is_empty() {
        return out;
    }
    let taps = filter.taps();
    let radius = filter.radius();
    let (w, h) = (src.w, src.h);
    out.data.par_chunks_mut(w).enumerate().for_each(|(y, dst)| {
        let centre = taps[radius];
        for (d, &s) in dst.iter_mut().zip(src.row(y)) {
            *d = centre * s;
        }
        for j in 1..=radius {
            let above = src.row(clamp_index(y as isize - j as isize, h));
            let below = src.row(clamp_index(y as isize + j as isize, h));
            let (k_above, k_below) = (taps[radius + j], taps[radius - j]);
            for x in 0..w {
                dst[x] += k_above * above[x] + k_below * below[x];
            }
        }
    });
    out
}

/// Row pass with `fx` followed by a column pass with `fy`.
pub fn convolve_separable(
    src: &ImageF64,
    fx: &dyn SeparableFilter,
    fy: &dyn SeparableFilter,
) -> ImageF64 {
    convolve_cols(&convolve_rows(src, fx), fy)
}

/// Symmetric pairs are accumulated together so an antisymmetric kernel
/// maps a constant signal to exactly zero.
fn convolve_line(signal: &[f64], taps: &[f64], radius: usize, out: &mut [f64]) {
    let n = signal.len();
    for (i, out_i) in out.iter_mut().enumerate() {
        let mut acc = taps[radius] * signal[i];
        for j in 1..=radius {
            let left = signal[clamp_index(i as isize - j as isize, n)];
            let right = signal[clamp_index(i as isize + j as isize, n)];
            acc += taps[radius + j] * left + taps[radius - j] * right;
        }
        *out_i = acc;
    }
}

#[inline]
fn clamp_index(idx: isize, upper: usize) -> usize {
    if idx < 0 {
        0
    } else {
        (idx as usize).min(upper - 1)
    }
}

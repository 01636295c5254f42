use super::convolve::SeparableFilter;
use crate::error::RidgeError;

/// Largest accepted Gaussian scale. Keeps the tap count (`6σ + 1`) bounded
/// well below allocation and `usize` overflow limits.
pub const MAX_SIGMA: f64 = 4096.0;

/// Order of a 1D Gaussian derivative kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DerivativeOrder {
    /// Plain Gaussian smoothing.
    Smooth,
    First,
    Second,
}

/// Sampled 1D Gaussian and its first two derivatives.
///
/// Conventions:
/// - `radius = ceil(3*sigma)`, minimum 1.
/// - `g` is normalized such that `sum(g) == 1` (up to rounding).
/// - `dg[i] = -(x/sigma^2) * g[i]`, exactly antisymmetric.
/// - `d2g[i] = ((x^2 - sigma^2)/sigma^4) * g[i]`, shifted by a multiple of
///   `g` so that `sum(d2g) ~= 0` despite truncation. Without the shift a
///   constant image would show a spurious second derivative.
#[derive(Debug, Clone)]
pub struct GaussianKernel1D {
    pub sigma: f64,
    pub radius: usize,
    pub g: Vec<f64>,
    pub dg: Vec<f64>,
    pub d2g: Vec<f64>,
}

impl GaussianKernel1D {
    pub fn new(sigma: f64) -> Result<Self, RidgeError> {
        if !sigma.is_finite() || sigma <= 0.0 || sigma > MAX_SIGMA {
            return Err(RidgeError::InvalidSigma(sigma));
        }

        let radius = ((3.0 * sigma).ceil() as usize).max(1);
        let len = 2 * radius + 1;
        let sigma2 = sigma * sigma;
        let offset = |i: usize| i as f64 - radius as f64;

        let mut g: Vec<f64> = (0..len)
            .map(|i| (-(offset(i) * offset(i)) / (2.0 * sigma2)).exp())
            .collect();
        let sum_g: f64 = g.iter().sum();
        for gi in &mut g {
            *gi /= sum_g;
        }

        let dg: Vec<f64> = (0..len).map(|i| -(offset(i) / sigma2) * g[i]).collect();

        let mut d2g: Vec<f64> = (0..len)
            .map(|i| ((offset(i) * offset(i) - sigma2) / (sigma2 * sigma2)) * g[i])
            .collect();
        let sum_d2g: f64 = d2g.iter().sum();
        for (d, &gi) in d2g.iter_mut().zip(&g) {
            *d -= sum_d2g * gi;
        }

        Ok(Self {
            sigma,
            radius,
            g,
            dg,
            d2g,
        })
    }

    pub fn taps(&self, order: DerivativeOrder) -> &[f64] {
        match order {
            DerivativeOrder::Smooth => &self.g,
            DerivativeOrder::First => &self.dg,
            DerivativeOrder::Second => &self.d2g,
        }
    }

    /// Borrow one of the kernels as a separable filter.
    pub fn filter(&self, order: DerivativeOrder) -> KernelTaps<'_> {
        KernelTaps {
            taps: self.taps(order),
        }
    }
}

/// Borrowed view of one kernel of a [`GaussianKernel1D`].
#[derive(Clone, Copy, Debug)]
pub struct KernelTaps<'a> {
    taps: &'a [f64],
}

impl SeparableFilter for KernelTaps<'_> {
    #[inline]
    fn taps(&self) -> &[f64] {
        self.taps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernels_have_expected_moments() {
        let k = GaussianKernel1D::new(1.7).unwrap();
        assert_eq!(k.radius, 6);
        assert_eq!(k.g.len(), 13);

        let sum_g: f64 = k.g.iter().sum();
        assert!((sum_g - 1.0).abs() < 1e-12);

        let sum_dg: f64 = k.dg.iter().sum();
        assert!(sum_dg.abs() < 1e-12);
        for i in 1..=k.radius {
            assert_eq!(k.dg[k.radius + i], -k.dg[k.radius - i]);
        }

        let sum_d2g: f64 = k.d2g.iter().sum();
        assert!(sum_d2g.abs() < 1e-12);
        // Second moment of the second derivative approximates 2.
        let m2: f64 = k
            .d2g
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let x = i as f64 - k.radius as f64;
                x * x * v
            })
            .sum();
        assert!((m2 - 2.0).abs() < 0.1, "m2={m2}");
    }

    #[test]
    fn rejects_bad_sigma() {
        assert_eq!(
            GaussianKernel1D::new(0.0).unwrap_err(),
            RidgeError::InvalidSigma(0.0)
        );
        assert!(GaussianKernel1D::new(f64::NAN).is_err());
        assert!(GaussianKernel1D::new(-1.0).is_err());
    }

    #[test]
    fn rejects_oversized_sigma() {
        assert_eq!(
            GaussianKernel1D::new(1e20).unwrap_err(),
            RidgeError::InvalidSigma(1e20)
        );
        assert!(GaussianKernel1D::new(MAX_SIGMA * 2.0).is_err());
        let k = GaussianKernel1D::new(MAX_SIGMA).unwrap();
        assert_eq!(k.radius, 3 * MAX_SIGMA as usize);
    }

    #[test]
    fn small_sigma_keeps_minimum_radius() {
        let k = GaussianKernel1D::new(0.1).unwrap();
        assert_eq!(k.radius, 1);
        assert_eq!(k.taps(DerivativeOrder::Second).len(), 3);
    }
}

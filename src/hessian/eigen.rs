//! Closed-form eigen decomposition of symmetric 2x2 matrices.
//!
//! For `H = [[a, b], [b, c]]` the eigenvalues are `m ± d` with
//! `m = (a + c) / 2` and `d = hypot((a - c) / 2, b)`. No iteration and no
//! allocation, so the per-pixel analysis stays deterministic.
use nalgebra::{Matrix2, Vector2};

/// Dominant eigenpair of a symmetric 2x2 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymmetricEigen2 {
    /// Eigenvalue with the larger absolute value.
    pub dominant_value: f64,
    /// Unit eigenvector of `dominant_value`. Its sign is arbitrary.
    pub dominant_vector: Vector2<f64>,
}

/// Decompose the symmetric matrix `[[a, b], [b, c]]`.
///
/// Returns `None` when any entry is not finite. When both eigenvalues have
/// the same magnitude the larger (algebraic) one is reported as dominant.
pub fn symmetric_eigen2(a: f64, b: f64, c: f64) -> Option<SymmetricEigen2> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return None;
    }
    let mean = 0.5 * (a + c);
    let radius = (0.5 * (a - c)).hypot(b);
    let upper = mean + radius;
    let lower = mean - radius;
    let dominant_value = if lower.abs() > upper.abs() {
        lower
    } else {
        upper
    };

    // Both rows of (H - λI) are orthogonal to the eigenvector; use the
    // better conditioned one.
    let from_first = Vector2::new(dominant_value - c, b);
    let from_second = Vector2::new(b, dominant_value - a);
    let v = if from_first.norm_squared() >= from_second.norm_squared() {
        from_first
    } else {
        from_second
    };
    let norm = v.norm();
    let dominant_vector = if norm > 0.0 && norm.is_finite() {
        v / norm
    } else {
        // H is a multiple of the identity: every direction is an eigenvector.
        Vector2::new(1.0, 0.0)
    };

    Some(SymmetricEigen2 {
        dominant_value,
        dominant_vector,
    })
}

/// Convenience wrapper reading the upper triangle of `m`.
pub fn symmetric_eigen2_matrix(m: &Matrix2<f64>) -> Option<SymmetricEigen2> {
    symmetric_eigen2(m[(0, 0)], m[(0, 1)], m[(1, 1)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::SymmetricEigen;

    fn check_against_nalgebra(a: f64, b: f64, c: f64) {
        let m = Matrix2::new(a, b, b, c);
        let ours = symmetric_eigen2_matrix(&m).expect("finite matrix");
        let reference = SymmetricEigen::new(m);
        let idx = if reference.eigenvalues[0].abs() >= reference.eigenvalues[1].abs() {
            0
        } else {
            1
        };
        let ref_value = reference.eigenvalues[idx];
        assert!(
            (ours.dominant_value.abs() - ref_value.abs()).abs() < 1e-9,
            "a={a} b={b} c={c}: {} vs {}",
            ours.dominant_value,
            ref_value
        );
        let ref_vec = reference.eigenvectors.column(idx).into_owned();
        let alignment = ours.dominant_vector.dot(&ref_vec).abs();
        if (reference.eigenvalues[0].abs() - reference.eigenvalues[1].abs()).abs() > 1e-9 {
            assert!(alignment > 1.0 - 1e-9, "a={a} b={b} c={c}: alignment={alignment}");
        }
        assert!((ours.dominant_vector.norm() - 1.0).abs() < 1e-12);
        // Residual of the eigen equation.
        let residual = m * ours.dominant_vector - ours.dominant_vector * ours.dominant_value;
        assert!(residual.norm() < 1e-9, "a={a} b={b} c={c}: residual={residual}");
    }

    #[test]
    fn matches_nalgebra_on_assorted_matrices() {
        let cases = [
            (2.0, 0.0, -1.0),
            (-3.0, 0.5, 0.2),
            (0.1, -0.7, 0.4),
            (-1.0, 1e-3, -1.2),
            (5.0, 4.0, 5.0),
            (0.0, 1.0, 0.0),
            (-0.25, -0.1, -2.5),
        ];
        for (a, b, c) in cases {
            check_against_nalgebra(a, b, c);
        }
    }

    #[test]
    fn diagonal_matrix_picks_axis() {
        let e = symmetric_eigen2(0.0, 0.0, -4.0).unwrap();
        assert_eq!(e.dominant_value, -4.0);
        assert_eq!(e.dominant_vector.x, 0.0);
        assert_eq!(e.dominant_vector.y.abs(), 1.0);
    }

    #[test]
    fn isotropic_matrix_has_unit_vector() {
        let e = symmetric_eigen2(2.0, 0.0, 2.0).unwrap();
        assert_eq!(e.dominant_value, 2.0);
        assert_eq!(e.dominant_vector, Vector2::new(1.0, 0.0));
        let zero = symmetric_eigen2(0.0, 0.0, 0.0).unwrap();
        assert_eq!(zero.dominant_value, 0.0);
        assert_eq!(zero.dominant_vector.norm(), 1.0);
    }

    #[test]
    fn non_finite_entries_are_rejected() {
        assert!(symmetric_eigen2(f64::NAN, 0.0, 1.0).is_none());
        assert!(symmetric_eigen2(1.0, f64::INFINITY, 1.0).is_none());
    }
}

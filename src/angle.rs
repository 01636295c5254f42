//! Angle utilities for normal vectors, in degrees.

/// Direction of `(x, y)` in degrees, in `[0, 360)`.
///
/// Vertical vectors map exactly to 90 and 270; the zero vector maps to 0.
#[inline]
pub fn angle_deg(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        return if y > 0.0 {
            90.0
        } else if y < 0.0 {
            270.0
        } else {
            0.0
        };
    }
    let mut deg = y.atan2(x).to_degrees();
    if deg < 0.0 {
        deg += 360.0;
    }
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

/// Absolute difference of the directions of two vectors, in degrees.
///
/// No wraparound: directions at 1 and 359 degrees differ by 358.
#[inline]
pub fn angle_diff_deg(a: (f64, f64), b: (f64, f64)) -> f64 {
    (angle_deg(a.0, a.1) - angle_deg(b.0, b.1)).abs()
}

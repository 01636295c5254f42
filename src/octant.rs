//! Eight-way direction quantization.
//!
//! Octant labels run 1..=8 counterclockwise in image coordinates (y grows
//! downward), each covering a 45 degree sector centered on a king-move
//! neighbor offset. Label 1 points along +x.

use crate::angle::angle_deg;

/// A direction label in `1..=8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Octant(u8);

const OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Octant {
    /// Ring-reduce any integer onto `1..=8` (0 becomes 8, 9 becomes 1).
    #[inline]
    pub fn from_label(label: i32) -> Self {
        Octant(((label - 1).rem_euclid(8) + 1) as u8)
    }

    /// Octant of the direction of `(x, y)`.
    pub fn of_vector(x: f64, y: f64) -> Self {
        let a = angle_deg(x, y);
        let raw = ((a - 22.5) / 45.0).ceil().max(0.0) as i32 + 1;
        Octant::from_label(raw)
    }

    #[inline]
    pub fn label(self) -> u8 {
        self.0
    }

    /// Rotate by `steps` octants (45 degrees each), counterclockwise for
    /// positive steps.
    #[inline]
    pub fn rotate(self, steps: i32) -> Self {
        Octant::from_label(self.0 as i32 + steps)
    }

    /// Unit king-move offset `(dx, dy)` for this direction.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        OFFSETS[(self.0 - 1) as usize]
    }

    /// Number of 45 degree steps between two octants, in `0..=4`.
    #[inline]
    pub fn ring_distance(self, other: Octant) -> u8 {
        let d = (self.0 as i32 - other.0 as i32).rem_euclid(8);
        d.min(8 - d) as u8
    }
}

/// Octant label of `(x, y)`, in `1..=8`.
#[inline]
pub fn octant(x: f64, y: f64) -> u8 {
    Octant::of_vector(x, y).label()
}

/// Neighbor offset for an octant label, ring-reducing out-of-range labels.
#[inline]
pub fn octant_coords(label: i32) -> (i32, i32) {
    Octant::from_label(label).offset()
}

use serde::{Deserialize, Serialize};

/// One traced ridge pixel.
///
/// `x`, `y` are integer pixel coordinates; `subpixel_offset` is the
/// displacement along the ridge normal at which the directional derivative
/// vanishes, kept separate from the lattice position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RidgePoint {
    pub x: u32,
    pub y: u32,
    pub subpixel_offset: [f64; 2],
}

impl RidgePoint {
    pub fn new(x: u32, y: u32, subpixel_offset: [f64; 2]) -> Self {
        Self {
            x,
            y,
            subpixel_offset,
        }
    }

    /// Pixel position with the sub-pixel offset applied.
    #[inline]
    pub fn refined(&self) -> [f64; 2] {
        [
            self.x as f64 + self.subpixel_offset[0],
            self.y as f64 + self.subpixel_offset[1],
        ]
    }
}

/// Ordered chain of ridge points. A snapshot of one tracing run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<RidgePoint>,
}

impl Polyline {
    pub fn from_points(points: Vec<RidgePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[RidgePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Integer coordinates in order.
    pub fn coords(&self) -> Vec<(u32, u32)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Sum of Euclidean distances between consecutive refined points.
    pub fn arc_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| {
                let a = w[0].refined();
                let b = w[1].refined();
                (b[0] - a[0]).hypot(b[1] - a[1])
            })
            .sum()
    }
}

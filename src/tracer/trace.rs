use super::cancel::CancellationToken;
use super::polyline::{Polyline, RidgePoint};
use crate::angle::angle_diff_deg;
use crate::error::RidgeError;
use crate::metadata::{MetadataField, PixelMetadata};
use crate::octant::Octant;
use log::debug;
use nalgebra::Vector2;
use std::cmp::Ordering;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TraceState {
    SeekSeed,
    Extend { seed: usize },
    Done,
}

/// One pending extension step: the pixel to search from, the heading used to
/// pick its three forward neighbors and the evidence it arrived with.
#[derive(Clone, Copy, Debug)]
struct TraceFrame {
    idx: usize,
    heading: Octant,
    normal: Vector2<f64>,
    offset: Vector2<f64>,
}

/// Walks a [`MetadataField`] into polylines, consuming every pixel it emits.
///
/// Seeds are taken in order of decreasing eigen magnitude (row-major order on
/// ties). From each seed the tracer extends in the two along-ridge octants,
/// `octant(normal) - 2` first and `octant(normal) + 2` second, and emits
/// `reverse(first) + seed + second`.
pub struct RidgeTracer<'a> {
    field: &'a mut MetadataField,
    cancel: Option<CancellationToken>,
}

impl<'a> RidgeTracer<'a> {
    pub fn new(field: &'a mut MetadataField) -> Self {
        Self {
            field,
            cancel: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Trace until no candidates remain.
    ///
    /// Cancellation is checked before each seed; a cancelled run returns
    /// [`RidgeError::Cancelled`] and leaves the field partially consumed.
    pub fn trace(mut self) -> Result<Vec<Polyline>, RidgeError> {
        let start = Instant::now();
        let order = self.field.candidates_by_magnitude();
        let mut cursor = 0usize;
        let mut polylines = Vec::new();
        let mut state = TraceState::SeekSeed;

        loop {
            state = match state {
                TraceState::SeekSeed => {
                    if self.cancel.as_ref().is_some_and(|t| t.is_cancelled()) {
                        debug!(
                            "RidgeTracer::trace cancelled after {} polylines",
                            polylines.len()
                        );
                        return Err(RidgeError::Cancelled);
                    }
                    while cursor < order.len() && !self.field.record(order[cursor]).is_candidate {
                        cursor += 1;
                    }
                    match order.get(cursor) {
                        Some(&seed) => TraceState::Extend { seed },
                        None => TraceState::Done,
                    }
                }
                TraceState::Extend { seed } => {
                    polylines.push(self.extend(seed));
                    TraceState::SeekSeed
                }
                TraceState::Done => break,
            };
        }

        debug!(
            "RidgeTracer::trace seeds={} polylines={} points={} in {:.3} ms",
            order.len(),
            polylines.len(),
            polylines.iter().map(Polyline::len).sum::<usize>(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(polylines)
    }

    fn extend(&mut self, seed: usize) -> Polyline {
        let record = *self.field.record(seed);
        let heading = Octant::of_vector(record.normal.x, record.normal.y);

        let backward = self.walk(seed, heading.rotate(-2), &record);
        let forward = self.walk(seed, heading.rotate(2), &record);
        self.field.consume_index(seed);

        let mut points = Vec::with_capacity(backward.len() + forward.len() + 1);
        points.extend(backward.into_iter().rev());
        points.push(self.point(seed, &record));
        points.extend(forward);
        Polyline::from_points(points)
    }

    /// Extend from `start` along `heading` until no forward neighbor is a
    /// candidate. Uses an explicit frame stack so path length is bounded only
    /// by the number of candidates.
    fn walk(&mut self, start: usize, heading: Octant, record: &PixelMetadata) -> Vec<RidgePoint> {
        let mut points = Vec::new();
        let mut stack = vec![TraceFrame {
            idx: start,
            heading,
            normal: record.normal,
            offset: record.subpixel_offset,
        }];

        while let Some(frame) = stack.pop() {
            let best = self.best_neighbor(&frame);
            self.field.consume_index(frame.idx);
            let Some((idx, next)) = best else {
                break;
            };
            points.push(self.point(idx, &next));
            stack.push(TraceFrame {
                idx,
                heading: next_heading(&next.normal, frame.heading),
                normal: next.normal,
                offset: next.subpixel_offset,
            });
        }
        points
    }

    /// Lowest-salience candidate among the neighbors at `heading - 1`,
    /// `heading` and `heading + 1`; the earlier one wins ties.
    fn best_neighbor(&self, frame: &TraceFrame) -> Option<(usize, PixelMetadata)> {
        let (x, y) = self.field.coords(frame.idx);
        let mut best: Option<(usize, PixelMetadata)> = None;
        let mut best_salience = f64::INFINITY;

        for step in [-1, 0, 1] {
            let (dx, dy) = frame.heading.rotate(step).offset();
            let Some((nx, ny)) = self
                .field
                .checked_coords(x as isize + dx as isize, y as isize + dy as isize)
            else {
                continue;
            };
            let candidate = self.field.get(nx, ny);
            if !candidate.is_candidate {
                continue;
            }
            let salience = (candidate.subpixel_offset - frame.offset).norm()
                + angle_diff_deg(
                    (candidate.normal.x, candidate.normal.y),
                    (frame.normal.x, frame.normal.y),
                );
            if salience < best_salience {
                best_salience = salience;
                best = Some((self.field.index(nx, ny), *candidate));
            }
        }
        best
    }

    fn point(&self, idx: usize, record: &PixelMetadata) -> RidgePoint {
        let (x, y) = self.field.coords(idx);
        RidgePoint::new(
            x as u32,
            y as u32,
            [record.subpixel_offset.x, record.subpixel_offset.y],
        )
    }
}

/// Heading for the next step: the along-ridge octant of the new normal that
/// is closest to the current heading. Keeps the current heading when both
/// are equally far.
fn next_heading(normal: &Vector2<f64>, current: Octant) -> Octant {
    let across = Octant::of_vector(normal.x, normal.y);
    let (a, b) = (across.rotate(-2), across.rotate(2));
    match a.ring_distance(current).cmp(&b.ring_distance(current)) {
        Ordering::Less => a,
        Ordering::Greater => b,
        Ordering::Equal => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn rec(mag: f64, normal: (f64, f64), offset: (f64, f64)) -> PixelMetadata {
        PixelMetadata::candidate(
            mag,
            Vector2::new(normal.0, normal.1).normalize(),
            Vector2::new(offset.0, offset.1),
        )
    }

    #[test]
    fn straight_run_is_one_polyline() {
        let mut field = MetadataField::new(7, 5);
        for x in 0..7 {
            let mag = if x == 3 { 2.0 } else { 1.0 };
            field.set(x, 2, rec(mag, (0.0, 1.0), (0.0, 0.1)));
        }
        let lines = RidgeTracer::new(&mut field).trace().expect("trace");
        assert_eq!(lines.len(), 1);
        let coords = lines[0].coords();
        let expected: Vec<(u32, u32)> = (0..7).rev().map(|x| (x, 2)).collect();
        assert_eq!(coords, expected);
        assert_eq!(field.candidate_count(), 0);
    }

    #[test]
    fn ties_go_to_lower_octant_neighbor() {
        let mut field = MetadataField::new(5, 5);
        field.set(2, 2, rec(5.0, (0.0, 1.0), (0.0, 0.0)));
        field.set(3, 1, rec(1.0, (0.0, 1.0), (0.0, 0.0)));
        field.set(3, 3, rec(1.0, (0.0, 1.0), (0.0, 0.0)));
        let lines = RidgeTracer::new(&mut field).trace().expect("trace");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].coords(), vec![(3, 1), (2, 2)]);
        assert_eq!(lines[1].coords(), vec![(3, 3)]);
    }

    #[test]
    fn salience_prefers_consistent_normal() {
        let mut field = MetadataField::new(5, 5);
        field.set(2, 2, rec(5.0, (0.0, 1.0), (0.0, 0.0)));
        field.set(3, 1, rec(1.0, (1.0, 1.0), (0.0, 0.0)));
        field.set(3, 3, rec(1.0, (0.0, 1.0), (0.0, 0.0)));
        let lines = RidgeTracer::new(&mut field).trace().expect("trace");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].coords(), vec![(3, 3), (2, 2)]);
        assert_eq!(lines[1].coords(), vec![(3, 1)]);
    }

    #[test]
    fn seeds_follow_magnitude_then_row_major() {
        let mut field = MetadataField::new(9, 9);
        field.set(8, 8, rec(1.0, (0.0, 1.0), (0.0, 0.0)));
        field.set(0, 0, rec(1.0, (0.0, 1.0), (0.0, 0.0)));
        field.set(4, 4, rec(3.0, (0.0, 1.0), (0.0, 0.0)));
        let lines = RidgeTracer::new(&mut field).trace().expect("trace");
        let seeds: Vec<(u32, u32)> = lines.iter().map(|l| l.coords()[0]).collect();
        assert_eq!(seeds, vec![(4, 4), (0, 0), (8, 8)]);
    }

    #[test]
    fn consumed_pixels_match_emitted_points() {
        let (w, h) = (24usize, 18usize);
        let mut field = MetadataField::new(w, h);
        let mut state = 0x2545_f491u32;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        };
        for y in 0..h {
            for x in 0..w {
                if next() % 3 == 0 {
                    continue;
                }
                let angle = (next() % 360) as f64;
                let mag = 1.0 + (next() % 7) as f64;
                let offset = ((next() % 9) as f64 / 20.0 - 0.2, 0.1);
                field.set(x, y, rec(mag, (angle.to_radians().cos(), angle.to_radians().sin()), offset));
            }
        }
        let before: HashSet<(u32, u32)> = (0..w * h)
            .filter(|&i| field.record(i).is_candidate)
            .map(|i| ((i % w) as u32, (i / w) as u32))
            .collect();

        let lines = RidgeTracer::new(&mut field).trace().expect("trace");

        let mut emitted = HashSet::new();
        for line in &lines {
            assert!(!line.is_empty());
            for p in line.points() {
                assert!(emitted.insert((p.x, p.y)), "duplicate point {:?}", (p.x, p.y));
            }
        }
        assert_eq!(emitted, before);
        assert_eq!(field.candidate_count(), 0);
    }

    #[test]
    fn cancelled_token_stops_before_first_seed() {
        let mut field = MetadataField::new(3, 3);
        field.set(1, 1, rec(1.0, (0.0, 1.0), (0.0, 0.0)));
        let token = CancellationToken::new();
        token.cancel();
        let result = RidgeTracer::new(&mut field).with_cancellation(token).trace();
        assert_eq!(result, Err(RidgeError::Cancelled));
        assert!(field.is_candidate(1, 1));
    }

    #[test]
    fn empty_field_yields_nothing() {
        let mut field = MetadataField::new(4, 4);
        let lines = RidgeTracer::new(&mut field).trace().expect("trace");
        assert!(lines.is_empty());
    }

    #[test]
    fn heading_follows_turning_normal() {
        let east = Octant::from_label(1);
        // Normal rotated to 45 degrees: along-ridge octants are 8 and 4.
        let turned = next_heading(&Vector2::new(1.0, 1.0).normalize(), east);
        assert_eq!(turned.label(), 8);
        // Normal along the heading itself: both candidates are 2 steps away.
        let kept = next_heading(&Vector2::new(1.0, 0.0), east);
        assert_eq!(kept, east);
    }
}

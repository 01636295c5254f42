use crate::diagnostics::TimingBreakdown;
use crate::tracer::Polyline;
use serde::Serialize;

/// Result produced by [`RidgeDetector::detect_with_report`](crate::RidgeDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub width: usize,
    pub height: usize,
    /// Gaussian scale derived from the ridge width.
    pub sigma: f64,
    /// Candidates present after analysis, before tracing.
    pub candidate_count: usize,
    /// Polylines traced before the `min_points` filter.
    pub traced_count: usize,
    pub polylines: Vec<Polyline>,
    pub timing: TimingBreakdown,
}

impl DetectionReport {
    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(Polyline::len).sum()
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{}x{} sigma={:.3} candidates={} polylines={} (traced {}) points={} total={:.3} ms",
            self.width,
            self.height,
            self.sigma,
            self.candidate_count,
            self.polylines.len(),
            self.traced_count,
            self.point_count(),
            self.timing.total_ms
        );
        for label in ["derivatives", "analysis", "tracing"] {
            if let Some(ms) = self.timing.stage_ms(label) {
                out.push_str(&format!(" {label}={ms:.3}"));
            }
        }
        out
    }

    /// Longest polyline by refined arc length.
    pub fn longest(&self) -> Option<&Polyline> {
        self.polylines
            .iter()
            .max_by(|a, b| a.arc_length().total_cmp(&b.arc_length()))
    }
}

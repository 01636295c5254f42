//! Reports and timings returned alongside detection results.

pub mod report;
pub mod timing;

pub use report::DetectionReport;
pub use timing::{StageTiming, TimingBreakdown};

//! Structured per-frame diagnostics.
//!
//! Everything here is `Serialize` so the demo binary can dump a full JSON
//! report of a replay run. The trace mirrors the frame pipeline: input
//! descriptor, reconcile counts, projection visibility, hit-test samples and
//! a per-stage timing breakdown.

use crate::registry::ReconcileSummary;
use crate::types::FrameResult;
use serde::Serialize;

/// Timing entry for a single pipeline stage.
#[derive(Clone, Debug, Serialize)]
pub struct StageTiming {
    pub stage: &'static str,
    pub elapsed_ms: f64,
}

/// Aggregated stage timings for one frame.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, stage: &'static str, elapsed_ms: f64) {
        self.stages.push(StageTiming { stage, elapsed_ms });
    }
}

/// Frame inputs as seen by the session.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct InputDescriptor {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub trackables: usize,
    pub pending_taps: usize,
}

/// Registry reconcile outcome plus the resulting entry count.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ReconcileStage {
    pub elapsed_ms: f64,
    #[serde(flatten)]
    pub summary: ReconcileSummary,
    pub entries: usize,
}

/// Screen-space projection outcome for the frame.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ProjectionStage {
    pub elapsed_ms: f64,
    /// Entries with a valid on-screen rectangle.
    pub visible: usize,
    /// Entries skipped as degenerate (behind camera, zero w).
    pub culled: usize,
}

/// One hit-test evaluation.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct HitTestSample {
    pub x: f32,
    pub y: f32,
    pub image_id: Option<i32>,
}

/// Full pipeline trace for one frame.
#[derive(Clone, Debug, Serialize)]
pub struct FrameTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub reconcile: Option<ReconcileStage>,
    pub projection: Option<ProjectionStage>,
    pub hit_tests: Vec<HitTestSample>,
}

/// Per-frame result plus its pipeline trace.
#[derive(Clone, Debug, Serialize)]
pub struct FrameReport {
    pub frame: FrameResult,
    pub trace: FrameTrace,
}

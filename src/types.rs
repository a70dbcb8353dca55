use crate::projection::ScreenRect;
use serde::Serialize;

/// A tracked image with a valid on-screen rectangle this frame.
#[derive(Clone, Debug, Serialize)]
pub struct VisibleImage {
    pub image_id: i32,
    pub rect: ScreenRect,
}

/// Outcome of one queued tap processed this frame.
#[derive(Clone, Debug, Serialize)]
pub struct TapOutcome {
    pub x: f32,
    pub y: f32,
    /// Image hit by the tap, if any.
    pub image_id: Option<i32>,
    /// URL dispatched to the external open-URL action on a hit.
    pub url: Option<String>,
}

/// Compact per-frame result of the tracking session.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FrameResult {
    /// Entries currently tracked (visible or not).
    pub tracked: usize,
    /// Screen rectangles for entries whose anchor projected in front of the
    /// camera. Rectangles come from the anchored pose, the same pose the
    /// hit-tester measures against.
    pub visible: Vec<VisibleImage>,
    /// Taps drained from the queue this frame, in arrival order.
    pub taps: Vec<TapOutcome>,
    /// Ambient color-correction RGBA passed through from the engine for the
    /// overlay renderer.
    pub color_correction: [f32; 4],
    /// Set when the engine failed to produce a frame and processing was
    /// skipped.
    pub skipped: bool,
    pub latency_ms: f64,
}

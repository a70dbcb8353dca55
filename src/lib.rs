#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod engine;
pub mod hittest;
pub mod projection;
pub mod registry;
pub mod session;
pub mod types;

// Supporting modules for demos, tooling and diagnostics.
pub mod config;
pub mod diagnostics;
pub mod replay;

// --- High-level re-exports -------------------------------------------------

// Main entry points: session + per-frame results.
pub use crate::session::{SessionParams, TrackingSession, UrlOpener};
pub use crate::types::FrameResult;

// Engine contract types consumed and produced every frame.
pub use crate::engine::{ArEngine, Frame, TrackedImage, TrackingState};

// High-level diagnostics returned by the session.
pub use crate::diagnostics::{FrameReport, FrameTrace};

// Geometry helpers that are generally useful on their own.
pub use crate::projection::{project_point, project_rect, HalfExtent, ScreenRect, Viewport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use augmented_image_tracker::prelude::*;
/// use nalgebra::Matrix4;
///
/// # fn main() {
/// let frame = Frame {
///     view: Matrix4::identity(),
///     projection: Matrix4::identity(),
///     color_correction: [1.0, 1.0, 1.0, 1.0],
///     trackables: vec![],
/// };
///
/// let mut session = TrackingSession::new(SessionParams::default());
/// session.set_viewport(1080.0, 1920.0);
///
/// let result = session.process(&frame);
/// println!("tracked={} latency_ms={:.3}", result.tracked, result.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::engine::{Frame, TrackedImage, TrackingState};
    pub use crate::{FrameResult, SessionParams, TrackingSession};
}

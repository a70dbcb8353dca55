//! Tracking session driving the per-frame pipeline end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use augmented_image_tracker::{SessionParams, TrackingSession};
//! use augmented_image_tracker::engine::Frame;
//!
//! # fn example(frame: Frame) {
//! let mut session = TrackingSession::new(SessionParams::default());
//! session.set_viewport(1080.0, 1920.0);
//! session.queue_tap(540.0, 960.0);
//! let result = session.process(&frame);
//! println!("tracked={} visible={}", result.tracked, result.visible.len());
//! # }
//! ```
//!
//! Threading: all mutation happens on the caller's frame thread. Taps from a
//! UI thread are handed over through [`TrackingSession::queue_tap`] and
//! consumed by the next `process` call, after that frame's reconcile, so the
//! hit-test always sees the latest registry state.

use super::params::SessionParams;
use crate::diagnostics::{
    FrameReport, FrameTrace, HitTestSample, InputDescriptor, ProjectionStage, ReconcileStage,
    TimingBreakdown,
};
use crate::engine::{ArEngine, Frame, TrackingState};
use crate::hittest::hit_test;
use crate::projection::{project_rect, Viewport};
use crate::registry::ImageRegistry;
use crate::types::{FrameResult, TapOutcome, VisibleImage};
use log::{debug, error, info};
use std::time::Instant;

/// External open-URL action invoked when a tap hits a tracked image.
pub trait UrlOpener {
    fn open(&mut self, url: &str);
}

/// Default opener: records the request in the log and nothing else. Useful
/// for demos and headless runs where no browser is attached.
#[derive(Debug, Default)]
pub struct LogUrlOpener;

impl UrlOpener for LogUrlOpener {
    fn open(&mut self, url: &str) {
        info!("LogUrlOpener::open {url}");
    }
}

/// Session orchestrating registry reconciliation, screen-space projection and
/// tap hit-testing for every frame.
pub struct TrackingSession {
    params: SessionParams,
    registry: ImageRegistry,
    viewport: Viewport,
    pending_taps: Vec<[f32; 2]>,
    opener: Option<Box<dyn UrlOpener>>,
}

impl TrackingSession {
    /// Create a session with the supplied parameters.
    ///
    /// The viewport starts at 1×1; call [`set_viewport`] once the render
    /// surface size is known (and again whenever it changes).
    ///
    /// [`set_viewport`]: TrackingSession::set_viewport
    pub fn new(params: SessionParams) -> Self {
        Self {
            params,
            registry: ImageRegistry::new(),
            viewport: Viewport::new(1.0, 1.0),
            pending_taps: Vec::new(),
            opener: None,
        }
    }

    /// Attach an external open-URL action.
    pub fn with_opener(mut self, opener: Box<dyn UrlOpener>) -> Self {
        self.opener = Some(opener);
        self
    }

    /// Update the render-surface size in pixels.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Queue a single-tap event at pixel coordinates relative to the render
    /// surface. Consumed by the next [`process`] call.
    ///
    /// [`process`]: TrackingSession::process
    pub fn queue_tap(&mut self, x: f32, y: f32) {
        self.pending_taps.push([x, y]);
    }

    /// Read access to the registry, for renderers that draw all tracking
    /// entries.
    pub fn registry(&self) -> &ImageRegistry {
        &self.registry
    }

    /// Pull a frame from the engine and process it.
    ///
    /// Engine failures are caught here, logged and turned into a skipped
    /// result so a continuous render loop never crashes on a bad frame.
    pub fn run_frame(&mut self, engine: &mut dyn ArEngine) -> FrameResult {
        match engine.update() {
            Ok(frame) => self.process(&frame),
            Err(err) => {
                if err.requires_user_action() {
                    error!("TrackingSession::run_frame engine unavailable: {err}");
                } else {
                    error!("TrackingSession::run_frame frame skipped: {err}");
                }
                FrameResult {
                    tracked: self.registry.len(),
                    skipped: true,
                    ..FrameResult::default()
                }
            }
        }
    }

    /// Process one frame, returning a compact result.
    pub fn process(&mut self, frame: &Frame) -> FrameResult {
        self.process_with_diagnostics(frame).frame
    }

    /// Process one frame and return both the result and a pipeline trace.
    pub fn process_with_diagnostics(&mut self, frame: &Frame) -> FrameReport {
        debug!(
            "TrackingSession::process start trackables={} pending_taps={}",
            frame.trackables.len(),
            self.pending_taps.len()
        );
        let total_start = Instant::now();
        let input = InputDescriptor {
            viewport_width: self.viewport.width,
            viewport_height: self.viewport.height,
            trackables: frame.trackables.len(),
            pending_taps: self.pending_taps.len(),
        };

        let reconcile_start = Instant::now();
        let summary = self.registry.reconcile(&frame.trackables);
        let reconcile_ms = reconcile_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "TrackingSession::process reconcile inserted={} updated={} removed={} entries={}",
            summary.inserted,
            summary.updated,
            summary.removed,
            self.registry.len()
        );

        let projection_start = Instant::now();
        let mut visible = Vec::new();
        let mut culled = 0usize;
        for entry in self.registry.entries() {
            if entry.image.state != TrackingState::Tracking {
                continue;
            }
            // Anchor pose, not the live trackable pose: the overlay is drawn
            // at the anchored placement, and the hit-tester measures against
            // the same pose, so the two never diverge as the estimate drifts.
            match project_rect(
                entry.anchor.pose(),
                self.params.half_extent,
                &frame.view,
                &frame.projection,
                self.viewport,
            ) {
                Some(rect) => visible.push(VisibleImage {
                    image_id: entry.image.id,
                    rect,
                }),
                None => culled += 1,
            }
        }
        let projection_ms = projection_start.elapsed().as_secs_f64() * 1000.0;

        let hittest_start = Instant::now();
        let mut taps = Vec::new();
        let mut hit_samples = Vec::new();
        for [x, y] in std::mem::take(&mut self.pending_taps) {
            let image_id = hit_test(
                x,
                y,
                self.registry.entries(),
                self.params.half_extent,
                &frame.view,
                &frame.projection,
                self.viewport,
            );
            let mut url = None;
            if let Some(id) = image_id {
                info!(
                    "TrackingSession::process tap ({x:.1}, {y:.1}) hit image {id} -> {}",
                    self.params.tap_url
                );
                if let Some(opener) = self.opener.as_mut() {
                    opener.open(&self.params.tap_url);
                }
                url = Some(self.params.tap_url.clone());
            }
            hit_samples.push(HitTestSample { x, y, image_id });
            taps.push(TapOutcome {
                x,
                y,
                image_id,
                url,
            });
        }
        let hittest_ms = hittest_start.elapsed().as_secs_f64() * 1000.0;

        let latency = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "TrackingSession::process done tracked={} visible={} culled={} latency_ms={:.3}",
            self.registry.len(),
            visible.len(),
            culled,
            latency
        );

        let mut timings = TimingBreakdown::with_total(latency);
        timings.push("reconcile", reconcile_ms);
        timings.push("projection", projection_ms);
        if !hit_samples.is_empty() {
            timings.push("hit_test", hittest_ms);
        }

        let result = FrameResult {
            tracked: self.registry.len(),
            visible,
            taps,
            color_correction: frame.color_correction,
            skipped: false,
            latency_ms: latency,
        };

        FrameReport {
            trace: FrameTrace {
                input,
                timings,
                reconcile: Some(ReconcileStage {
                    elapsed_ms: reconcile_ms,
                    summary,
                    entries: self.registry.len(),
                }),
                projection: Some(ProjectionStage {
                    elapsed_ms: projection_ms,
                    visible: result.visible.len(),
                    culled,
                }),
                hit_tests: hit_samples,
            },
            frame: result,
        }
    }
}

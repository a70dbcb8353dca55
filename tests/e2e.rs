mod common;

use augmented_image_tracker::engine::TrackingState;
use augmented_image_tracker::projection::{project_point, Viewport};
use augmented_image_tracker::replay::ScriptedEngine;
use augmented_image_tracker::{SessionParams, TrackingSession};
use common::frames::{empty_frame, frame_with, projection, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use nalgebra::{Matrix4, Vector3, Vector4};

fn session() -> TrackingSession {
    let mut session = TrackingSession::new(SessionParams::default());
    session.set_viewport(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    session
}

#[test]
fn tap_on_tracked_image_center_hits_and_corner_misses() {
    let mut session = session();

    // Frame 1: the image two metres in front of the camera enters TRACKING.
    let frame = frame_with(7, Vector3::new(0.0, 0.0, -2.0), TrackingState::Tracking);
    let result = session.process(&frame);
    assert_eq!(result.tracked, 1);
    assert_eq!(result.visible.len(), 1, "image in front of camera must be visible");

    // Screen-space center of the tracked image, computed the same way the
    // hit-tester does.
    let center_world = Vector4::new(0.0, 0.0, -2.0, 1.0);
    let center = project_point(
        &center_world,
        &Matrix4::identity(),
        &projection(),
        Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
    )
    .expect("center must project");
    assert!((center[0] - VIEWPORT_WIDTH * 0.5).abs() < 1e-3);
    assert!((center[1] - VIEWPORT_HEIGHT * 0.5).abs() < 1e-3);

    // Frame 2: taps queued from the UI thread are hit-tested against the
    // reconciled registry.
    session.queue_tap(center[0], center[1]);
    session.queue_tap(0.0, 0.0);
    let result = session.process(&frame);

    assert_eq!(result.taps.len(), 2);
    assert_eq!(result.taps[0].image_id, Some(7), "center tap must hit");
    assert_eq!(
        result.taps[0].url.as_deref(),
        Some("https://www.uade.edu.ar")
    );
    assert_eq!(result.taps[1].image_id, None, "corner tap must miss");
}

#[test]
fn stopped_image_is_removed_and_no_longer_hittable() {
    let mut session = session();
    let translation = Vector3::new(0.0, 0.0, -2.0);

    session.process(&frame_with(3, translation, TrackingState::Tracking));
    assert_eq!(session.registry().len(), 1);

    session.process(&frame_with(3, translation, TrackingState::Stopped));
    assert!(session.registry().is_empty());

    session.queue_tap(VIEWPORT_WIDTH * 0.5, VIEWPORT_HEIGHT * 0.5);
    let result = session.process(&empty_frame());
    assert_eq!(result.taps[0].image_id, None);
    assert!(result.visible.is_empty());
}

#[test]
fn image_behind_camera_is_culled_not_hittable() {
    let mut session = session();

    // Positive Z is behind the camera under the identity view.
    let frame = frame_with(4, Vector3::new(0.0, 0.0, 2.0), TrackingState::Tracking);
    let result = session.process(&frame);
    assert_eq!(result.tracked, 1, "entry exists while TRACKING");
    assert!(result.visible.is_empty(), "behind-camera pose must be culled");

    session.queue_tap(VIEWPORT_WIDTH * 0.5, VIEWPORT_HEIGHT * 0.5);
    let result = session.process(&frame);
    assert_eq!(result.taps[0].image_id, None);
}

#[test]
fn engine_failure_skips_frame_and_loop_continues() {
    let mut session = session();
    let mut engine = ScriptedEngine::new(vec![frame_with(
        9,
        Vector3::new(0.0, 0.0, -2.0),
        TrackingState::Tracking,
    )]);

    let result = session.run_frame(&mut engine);
    assert!(!result.skipped);
    assert_eq!(result.tracked, 1);

    // Script exhausted: the failure is caught, the frame skipped, and the
    // registry keeps its state for the next good frame.
    let result = session.run_frame(&mut engine);
    assert!(result.skipped);
    assert_eq!(result.tracked, 1);
}

#[test]
fn reconcile_diagnostics_reflect_lifecycle() {
    let mut session = session();
    let translation = Vector3::new(0.0, 0.0, -2.0);

    let report =
        session.process_with_diagnostics(&frame_with(1, translation, TrackingState::Tracking));
    let reconcile = report.trace.reconcile.expect("reconcile stage");
    assert_eq!(reconcile.summary.inserted, 1);
    assert_eq!(reconcile.entries, 1);

    let report =
        session.process_with_diagnostics(&frame_with(1, translation, TrackingState::Tracking));
    let reconcile = report.trace.reconcile.expect("reconcile stage");
    assert_eq!(reconcile.summary.inserted, 0);
    assert_eq!(reconcile.summary.updated, 1);

    let report =
        session.process_with_diagnostics(&frame_with(1, translation, TrackingState::Stopped));
    let reconcile = report.trace.reconcile.expect("reconcile stage");
    assert_eq!(reconcile.summary.removed, 1);
    assert_eq!(reconcile.entries, 0);
}

use augmented_image_tracker::engine::{Frame, TrackedImage, TrackingState};
use augmented_image_tracker::{SessionParams, TrackingSession};
use nalgebra::{Matrix4, Perspective3, Vector3};

fn main() {
    // Demo stub: one synthetic frame with a single tracked image two metres
    // in front of the camera, plus a tap at the screen center.
    let (width, height) = (1080.0f32, 1920.0f32);
    let frame = Frame {
        view: Matrix4::identity(),
        projection: Perspective3::new(width / height, 60f32.to_radians(), 0.1, 100.0)
            .to_homogeneous(),
        color_correction: [1.0, 1.0, 1.0, 1.0],
        trackables: vec![TrackedImage {
            id: 0,
            center_pose: Matrix4::new_translation(&Vector3::new(0.0, 0.0, -2.0)),
            state: TrackingState::Tracking,
        }],
    };

    let mut session = TrackingSession::new(SessionParams::default());
    session.set_viewport(width, height);
    session.queue_tap(width * 0.5, height * 0.5);

    let result = session.process(&frame);
    println!(
        "tracked={} visible={} tap_hit={:?} latency_ms={:.3}",
        result.tracked,
        result.visible.len(),
        result.taps.first().and_then(|t| t.image_id),
        result.latency_ms
    );
}

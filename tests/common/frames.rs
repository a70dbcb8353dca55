//! Synthetic engine frames for the end-to-end tests.

use augmented_image_tracker::engine::{Frame, TrackedImage, TrackingState};
use nalgebra::{Matrix4, Perspective3, Vector3};

pub const VIEWPORT_WIDTH: f32 = 1080.0;
pub const VIEWPORT_HEIGHT: f32 = 1920.0;

/// Perspective projection with the engine-contract clip planes.
pub fn projection() -> Matrix4<f32> {
    Perspective3::new(
        VIEWPORT_WIDTH / VIEWPORT_HEIGHT,
        60f32.to_radians(),
        0.1,
        100.0,
    )
    .to_homogeneous()
}

/// A frame with a single trackable at the given translation.
pub fn frame_with(id: i32, translation: Vector3<f32>, state: TrackingState) -> Frame {
    Frame {
        view: Matrix4::identity(),
        projection: projection(),
        color_correction: [1.0, 1.0, 1.0, 1.0],
        trackables: vec![TrackedImage {
            id,
            center_pose: Matrix4::new_translation(&translation),
            state,
        }],
    }
}

/// A frame with no trackable updates, matrices unchanged.
pub fn empty_frame() -> Frame {
    Frame {
        view: Matrix4::identity(),
        projection: projection(),
        color_correction: [1.0, 1.0, 1.0, 1.0],
        trackables: vec![],
    }
}

//! Screen-space projector: world poses → pixel-space bounding rectangles.
//!
//! The projector is a pair of pure functions. [`project_point`] takes a
//! world-space point through `projection * view`, performs the perspective
//! divide and maps normalized device coordinates to pixels (Y flipped, since
//! screen Y grows downward while NDC Y grows upward). [`project_rect`]
//! projects the two opposite extent corners of an image pose and returns the
//! axis-aligned pixel rectangle spanned by them.
//!
//! A point with clip-space `w <= 0` (behind the camera or on the camera
//! plane) has no meaningful screen position; both functions return `None` in
//! that case and callers treat the object as not visible this frame. That is
//! an expected geometric condition, not an error.

use nalgebra::{Matrix4, Vector4};
use serde::{Deserialize, Serialize};

/// Render-surface dimensions in pixels.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Object half-extent in metres along the pose's local X (width) and
/// Z (height) axes. Tracked images lie in the pose's X–Z plane, so these two
/// offsets span the printed target.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HalfExtent {
    pub x: f32,
    pub z: f32,
}

impl HalfExtent {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

/// Axis-aligned screen rectangle in pixel coordinates.
///
/// Ephemeral: recomputed every frame for every visible entry, never stored.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ScreenRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    /// Rectangle center.
    pub fn center(&self) -> [f32; 2] {
        [self.x + self.width * 0.5, self.y + self.height * 0.5]
    }

    /// Closed-interval containment test.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Project a world-space point to pixel coordinates.
///
/// Returns `None` when the point is behind the camera (`w <= 0`) or the
/// result is non-finite.
pub fn project_point(
    world: &Vector4<f32>,
    view: &Matrix4<f32>,
    projection: &Matrix4<f32>,
    viewport: Viewport,
) -> Option<[f32; 2]> {
    let clip = projection * (view * world);
    let w = clip[3];
    if w <= 0.0 || !w.is_finite() {
        return None;
    }
    let ndc_x = clip[0] / w;
    let ndc_y = clip[1] / w;
    let px = (ndc_x + 1.0) * 0.5 * viewport.width;
    let py = (1.0 - ndc_y) * 0.5 * viewport.height;
    if px.is_finite() && py.is_finite() {
        Some([px, py])
    } else {
        None
    }
}

/// Project an image pose's screen-space bounding rectangle.
///
/// The two opposite corners `pose * (∓hx, 0, ∓hz, 1)` are projected
/// individually; the rectangle is the axis-aligned span between them. `None`
/// when either corner is degenerate. A pose viewed exactly edge-on collapses
/// to a zero-width or zero-height rectangle, which is still a valid result.
pub fn project_rect(
    pose: &Matrix4<f32>,
    half_extent: HalfExtent,
    view: &Matrix4<f32>,
    projection: &Matrix4<f32>,
    viewport: Viewport,
) -> Option<ScreenRect> {
    let corner_a = pose * Vector4::new(-half_extent.x, 0.0, -half_extent.z, 1.0);
    let corner_b = pose * Vector4::new(half_extent.x, 0.0, half_extent.z, 1.0);

    let a = project_point(&corner_a, view, projection, viewport)?;
    let b = project_point(&corner_b, view, projection, viewport)?;

    Some(ScreenRect {
        x: a[0].min(b[0]),
        y: a[1].min(b[1]),
        width: (b[0] - a[0]).abs(),
        height: (b[1] - a[1]).abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Perspective3;

    fn identity_setup() -> (Matrix4<f32>, Matrix4<f32>, Viewport) {
        (
            Matrix4::identity(),
            Matrix4::identity(),
            Viewport::new(640.0, 640.0),
        )
    }

    #[test]
    fn identity_pose_projects_rect_centered_on_viewport() {
        let (view, projection, viewport) = identity_setup();
        let rect = project_rect(
            &Matrix4::identity(),
            HalfExtent::new(0.25, 0.25),
            &view,
            &projection,
            viewport,
        )
        .expect("identity pose must be visible");
        let center = rect.center();
        assert!((center[0] - 320.0).abs() < 1e-4, "cx={}", center[0]);
        assert!((center[1] - 320.0).abs() < 1e-4, "cy={}", center[1]);
    }

    #[test]
    fn ndc_y_flip_maps_up_to_smaller_pixel_y() {
        let (view, projection, viewport) = identity_setup();
        let above = project_point(&Vector4::new(0.0, 0.5, 0.0, 1.0), &view, &projection, viewport)
            .expect("visible");
        let below = project_point(
            &Vector4::new(0.0, -0.5, 0.0, 1.0),
            &view,
            &projection,
            viewport,
        )
        .expect("visible");
        assert!(
            above[1] < below[1],
            "world-up must land higher on screen: {} vs {}",
            above[1],
            below[1]
        );
    }

    #[test]
    fn point_behind_camera_is_not_visible() {
        let projection = Perspective3::new(1.0, 60f32.to_radians(), 0.1, 100.0).to_homogeneous();
        let view = Matrix4::identity();
        let viewport = Viewport::new(640.0, 480.0);
        // Camera looks down -Z; +2 on Z is behind it, so clip w <= 0.
        let behind = Vector4::new(0.0, 0.0, 2.0, 1.0);
        assert!(project_point(&behind, &view, &projection, viewport).is_none());

        let pose = Matrix4::new_translation(&nalgebra::Vector3::new(0.0, 0.0, 2.0));
        assert!(
            project_rect(&pose, HalfExtent::new(0.1, 0.1), &view, &projection, viewport).is_none()
        );
    }

    #[test]
    fn translated_pose_shifts_rect_center() {
        let projection = Perspective3::new(1.0, 60f32.to_radians(), 0.1, 100.0).to_homogeneous();
        let view = Matrix4::identity();
        let viewport = Viewport::new(800.0, 800.0);
        // Face the image plane toward the camera so both corners sit at the
        // same depth and the rect center matches the pose center.
        let facing = Matrix4::from_axis_angle(
            &nalgebra::Vector3::x_axis(),
            -std::f32::consts::FRAC_PI_2,
        );
        let centered = Matrix4::new_translation(&nalgebra::Vector3::new(0.0, 0.0, -2.0)) * facing;
        let right = Matrix4::new_translation(&nalgebra::Vector3::new(0.5, 0.0, -2.0)) * facing;

        let c0 = project_rect(&centered, HalfExtent::new(0.1, 0.1), &view, &projection, viewport)
            .expect("visible")
            .center();
        let c1 = project_rect(&right, HalfExtent::new(0.1, 0.1), &view, &projection, viewport)
            .expect("visible")
            .center();
        assert!((c0[0] - 400.0).abs() < 1e-3, "cx={}", c0[0]);
        assert!((c0[1] - 400.0).abs() < 1e-3, "cy={}", c0[1]);
        assert!(c1[0] > c0[0], "shift right on screen: {} vs {}", c1[0], c0[0]);
    }

    #[test]
    fn rect_contains_is_closed_on_all_edges() {
        let rect = ScreenRect {
            x: 10.0,
            y: 20.0,
            width: 30.0,
            height: 40.0,
        };
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(40.0, 60.0));
        assert!(!rect.contains(9.5, 20.0));
        assert!(!rect.contains(10.0, 60.5));
    }
}

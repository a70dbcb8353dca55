//! Tap hit-testing against tracked images.
//!
//! A touch hits an image when it falls inside the axis-aligned box centered
//! on the image's projected anchor center, sized by the projected extent
//! rectangle. Intervals are closed on both ends, so a touch exactly on an
//! edge counts as inside. Entries are checked in iteration order and the
//! first match wins; overlapping images therefore resolve arbitrarily, which
//! is acceptable because at most one printed target plausibly covers a touch.

use crate::engine::TrackingState;
use crate::projection::{project_point, project_rect, HalfExtent, Viewport};
use crate::registry::RegistryEntry;
use nalgebra::{Matrix4, Vector4};

/// Test a touch point against all tracking entries.
///
/// Returns the image id of the first entry whose screen box contains the
/// touch, or `None`. Entries that are not in [`TrackingState::Tracking`] or
/// whose projection is degenerate (behind camera, zero w) never match.
pub fn hit_test<'a>(
    touch_x: f32,
    touch_y: f32,
    entries: impl Iterator<Item = &'a RegistryEntry>,
    half_extent: HalfExtent,
    view: &Matrix4<f32>,
    projection: &Matrix4<f32>,
    viewport: Viewport,
) -> Option<i32> {
    for entry in entries {
        if entry.image.state != TrackingState::Tracking {
            continue;
        }
        let pose = entry.anchor.pose();
        let center_world = pose * Vector4::new(0.0, 0.0, 0.0, 1.0);
        let Some(center) = project_point(&center_world, view, projection, viewport)
        else {
            continue;
        };
        let Some(rect) = project_rect(pose, half_extent, view, projection, viewport)
        else {
            continue;
        };

        let half_w = rect.width * 0.5;
        let half_h = rect.height * 0.5;
        let inside = touch_x >= center[0] - half_w
            && touch_x <= center[0] + half_w
            && touch_y >= center[1] - half_h
            && touch_y <= center[1] + half_h;
        if inside {
            return Some(entry.image.id);
        }
    }
    None
}

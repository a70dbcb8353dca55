//! Session configuration.

use crate::projection::HalfExtent;
use serde::{Deserialize, Serialize};

/// Default URL opened when a tap lands on a tracked image.
pub const DEFAULT_TAP_URL: &str = "https://www.uade.edu.ar";

/// Parameters controlling the tracking session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionParams {
    /// Physical half-extent of the printed target in metres, along the pose's
    /// local X (width) and Z (height). An explicit value rather than anything
    /// derived from the pose matrix, so the screen box matches the asset that
    /// is actually rendered.
    pub half_extent: HalfExtent,
    /// URL dispatched to the external open-URL action when a tap hits.
    pub tap_url: String,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            half_extent: HalfExtent::new(0.1, 0.1),
            tap_url: DEFAULT_TAP_URL.to_string(),
        }
    }
}

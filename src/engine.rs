//! Contract with the external AR tracking engine.
//!
//! The engine is not implemented here; it is an external collaborator that
//! produces, per frame, a camera view/projection matrix pair, an ambient
//! color-correction estimate and the set of trackables whose state changed.
//! Everything in this module is the value-level surface of that contract plus
//! the error taxonomy a caller has to deal with.
//!
//! Matrix convention: all poses and camera matrices are column-major
//! `Matrix4<f32>` rigid transforms — columns 0–2 are the basis vectors,
//! column 3 is the translation. This matches ARCore's `Pose.toMatrix` layout
//! and nalgebra's storage order, and the projector in [`crate::projection`]
//! relies on it.

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Tracking lifecycle state reported by the engine for each trackable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingState {
    /// Detected in the camera feed but not yet confirmed as tracked.
    Paused,
    /// Actively tracked with a valid world pose.
    Tracking,
    /// Tracking has stopped; the pose is no longer meaningful.
    Stopped,
}

/// A recognized image pattern as reported by the engine this frame.
///
/// `center_pose` is the world-space rigid transform of the image center; the
/// image itself lies in the pose's local X–Z plane. Updated every frame while
/// the image is tracked.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrackedImage {
    /// Identifier of the image pattern, unique within the image database.
    pub id: i32,
    /// World-space center pose (column 3 holds the translation).
    pub center_pose: Matrix4<f32>,
    /// Lifecycle state this frame.
    pub state: TrackingState,
}

/// One frame of engine output.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Frame {
    /// Camera view matrix (world → camera).
    pub view: Matrix4<f32>,
    /// Camera projection matrix, built from the configured near/far planes.
    pub projection: Matrix4<f32>,
    /// Ambient color-correction RGBA estimate. Unused by the core; passed
    /// through to whatever renders the overlay.
    pub color_correction: [f32; 4],
    /// Trackables whose state or pose changed this frame.
    pub trackables: Vec<TrackedImage>,
}

/// Per-frame source of tracking data.
///
/// Implemented by whatever drives the camera: a live engine binding in an
/// application, [`crate::replay::ScriptedEngine`] in demos and tests.
pub trait ArEngine {
    /// Produce the next frame. Blocking until a camera frame is available is
    /// allowed; failing transiently is reported as [`EngineError::Frame`].
    fn update(&mut self) -> Result<Frame, EngineError>;
}

/// Engine construction/configuration inputs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pre-built binary image-recognition database. Opaque to this crate;
    /// only its existence and readability matter.
    pub database_path: Option<PathBuf>,
    /// Request continuous autofocus from the camera.
    pub autofocus: bool,
    /// Near clip plane used for the projection matrix (metres).
    pub near: f32,
    /// Far clip plane used for the projection matrix (metres).
    pub far: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            autofocus: true,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Failures surfaced by the engine contract.
#[derive(Debug)]
pub enum EngineError {
    /// The AR runtime is not installed on the device.
    NotInstalled,
    /// The installed AR runtime is too old for this application.
    UpdateRequired,
    /// Camera permission was not granted.
    CameraPermissionDenied,
    /// The camera could not be opened or was lost mid-session.
    CameraUnavailable,
    /// The image-recognition database could not be loaded.
    DatabaseLoad(String),
    /// A transient failure while producing a frame; the frame is skipped and
    /// the loop continues.
    Frame(String),
}

impl EngineError {
    /// `true` for failures that require user action (install, permissions,
    /// database fix) rather than simply skipping the frame.
    pub fn requires_user_action(&self) -> bool {
        !matches!(self, EngineError::Frame(_))
    }

    /// Short message suitable for a user-visible banner.
    pub fn user_message(&self) -> &str {
        match self {
            EngineError::NotInstalled => "Please install the AR runtime",
            EngineError::UpdateRequired => "Please update the AR runtime",
            EngineError::CameraPermissionDenied => {
                "Camera permission is needed to run this application"
            }
            EngineError::CameraUnavailable => "Camera not available. Try restarting the app.",
            EngineError::DatabaseLoad(_) => "Could not set up the augmented image database",
            EngineError::Frame(_) => "Tracking failed for this frame",
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotInstalled => write!(f, "AR runtime not installed"),
            EngineError::UpdateRequired => write!(f, "AR runtime too old"),
            EngineError::CameraPermissionDenied => write!(f, "camera permission denied"),
            EngineError::CameraUnavailable => write!(f, "camera unavailable"),
            EngineError::DatabaseLoad(reason) => {
                write!(f, "failed to load image database: {reason}")
            }
            EngineError::Frame(reason) => write!(f, "frame update failed: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}

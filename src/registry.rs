//! Tracked-object registry.
//!
//! Keeps, per recognized image id, the most recent trackable plus a world
//! anchor captured when the image was first confirmed as tracking. The
//! registry is reconciled once per frame from the engine's updated-trackable
//! list and is the only mutable state shared between the frame path and tap
//! handling; [`crate::session::TrackingSession`] owns it and serializes all
//! access on the frame thread.

use crate::engine::{TrackedImage, TrackingState};
use nalgebra::Matrix4;
use serde::Serialize;
use std::collections::HashMap;

/// World-space pose stabilized at first detection.
///
/// Created once when an image transitions into [`TrackingState::Tracking`]
/// and kept unchanged until the entry is removed; per-frame pose updates go
/// to the entry's `image`, never to the anchor.
#[derive(Clone, Debug)]
pub struct Anchor {
    pose: Matrix4<f32>,
}

impl Anchor {
    fn new(pose: Matrix4<f32>) -> Self {
        Self { pose }
    }

    /// The anchored world pose.
    pub fn pose(&self) -> &Matrix4<f32> {
        &self.pose
    }
}

/// Registry entry: latest trackable state plus its stable anchor.
#[derive(Clone, Debug)]
pub struct RegistryEntry {
    /// Most recent trackable reported for this image id.
    pub image: TrackedImage,
    /// Anchor captured at first detection.
    pub anchor: Anchor,
}

/// Mutation counts for one reconcile pass, fed into frame diagnostics.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct ReconcileSummary {
    pub inserted: usize,
    pub updated: usize,
    pub removed: usize,
}

/// Registry of currently known tracked images, keyed by image id.
///
/// The internal map is never exposed; callers go through [`reconcile`],
/// [`entries`] and [`remove`].
///
/// [`reconcile`]: ImageRegistry::reconcile
/// [`entries`]: ImageRegistry::entries
/// [`remove`]: ImageRegistry::remove
#[derive(Debug, Default)]
pub struct ImageRegistry {
    entries: HashMap<i32, RegistryEntry>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one frame's trackable updates.
    ///
    /// Transition table: `Paused` is a no-op (detected but not yet
    /// confirmed), `Tracking` upserts (anchor created only on first sight),
    /// `Stopped` removes (no-op if absent). Infallible; inputs are
    /// well-formed by the engine contract.
    pub fn reconcile(&mut self, updated: &[TrackedImage]) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();
        for trackable in updated {
            match trackable.state {
                TrackingState::Paused => {}
                TrackingState::Tracking => match self.entries.get_mut(&trackable.id) {
                    Some(entry) => {
                        entry.image = trackable.clone();
                        summary.updated += 1;
                    }
                    None => {
                        self.entries.insert(
                            trackable.id,
                            RegistryEntry {
                                image: trackable.clone(),
                                anchor: Anchor::new(trackable.center_pose),
                            },
                        );
                        summary.inserted += 1;
                    }
                },
                TrackingState::Stopped => {
                    if self.entries.remove(&trackable.id).is_some() {
                        summary.removed += 1;
                    }
                }
            }
        }
        summary
    }

    /// Iterate over all current entries, in no particular order.
    ///
    /// Callers that only care about drawable/tappable objects filter to
    /// [`TrackingState::Tracking`].
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    /// Look up the entry for an image id.
    pub fn get(&self, id: i32) -> Option<&RegistryEntry> {
        self.entries.get(&id)
    }

    /// Remove an entry directly. Returns `true` if it existed.
    pub fn remove(&mut self, id: i32) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

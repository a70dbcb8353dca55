//! Per-frame tracking session.
//!
//! The session is the single owner of the tracked-object registry and drives
//! the per-frame control flow: reconcile the registry from the engine's
//! trackable list, project screen rectangles for tracking entries, then
//! drain queued taps through the hit-tester and notify the external URL-open
//! action on the first match.
//!
//! Modules
//! - [`params`] – session configuration (object extent, tap URL).
//! - `pipeline` – the [`TrackingSession`] implementation.

pub mod params;
mod pipeline;

pub use params::SessionParams;
pub use pipeline::{LogUrlOpener, TrackingSession, UrlOpener};

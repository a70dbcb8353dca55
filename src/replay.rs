//! Scripted engine replaying pre-recorded frames.
//!
//! Stands in for a live camera/tracking engine in demos and tests: frames
//! are deserialized from a JSON array and handed out one per `update` call.
//! Construction validates the configured image database the same way a real
//! engine would — the file content is opaque, but it must exist and be
//! readable, and a failure there is fatal for the session.

use crate::engine::{ArEngine, EngineConfig, EngineError, Frame};
use log::debug;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

/// An [`ArEngine`] that replays a fixed frame script.
#[derive(Debug)]
pub struct ScriptedEngine {
    frames: VecDeque<Frame>,
}

impl ScriptedEngine {
    /// Build from in-memory frames.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// Build from engine configuration plus a JSON frame script.
    ///
    /// The database referenced by `config` (if any) is checked for
    /// readability up front; per the engine contract a database failure is
    /// reported once and disables tracking for the whole session.
    pub fn from_script(config: &EngineConfig, script_path: &Path) -> Result<Self, EngineError> {
        if let Some(db) = &config.database_path {
            fs::metadata(db).map_err(|e| {
                EngineError::DatabaseLoad(format!("{}: {e}", db.display()))
            })?;
        }
        let contents = fs::read_to_string(script_path)
            .map_err(|e| EngineError::Frame(format!("{}: {e}", script_path.display())))?;
        let frames: Vec<Frame> = serde_json::from_str(&contents)
            .map_err(|e| EngineError::Frame(format!("{}: {e}", script_path.display())))?;
        debug!(
            "ScriptedEngine::from_script {} frames from {}",
            frames.len(),
            script_path.display()
        );
        Ok(Self::new(frames))
    }

    /// Frames left in the script.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl ArEngine for ScriptedEngine {
    fn update(&mut self) -> Result<Frame, EngineError> {
        self.frames
            .pop_front()
            .ok_or_else(|| EngineError::Frame("frame script exhausted".into()))
    }
}

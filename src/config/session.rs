//! JSON runtime config and CLI parsing for the replay demo.

use crate::engine::EngineConfig;
use crate::session::SessionParams;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// What the demo prints at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Write the JSON report here instead of stdout.
    pub json_out: Option<PathBuf>,
}

/// Full demo configuration.
#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    /// JSON frame script replayed through the session.
    pub script_path: PathBuf,
    /// Render-surface size in pixels, `[width, height]`.
    pub viewport: [f32; 2],
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub session_params: SessionParams,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

/// Parse the demo command line: a single config-file path.
pub fn parse_cli(program: &str) -> Result<RuntimeConfig, String> {
    let mut args = env::args().skip(1);
    let config_path = match args.next() {
        Some(arg) if arg == "--help" || arg == "-h" => {
            return Err(usage(program));
        }
        Some(arg) => PathBuf::from(arg),
        None => return Err(usage(program)),
    };
    if args.next().is_some() {
        return Err(usage(program));
    }
    load_config(&config_path)
}

fn usage(program: &str) -> String {
    format!("Usage: {program} <config.json>\n\nReplays a JSON frame script through the tracking session.")
}

use augmented_image_tracker::config::session::parse_cli;
use augmented_image_tracker::diagnostics::FrameReport;
use augmented_image_tracker::replay::ScriptedEngine;
use augmented_image_tracker::session::{LogUrlOpener, TrackingSession};
use augmented_image_tracker::ArEngine;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "track_demo".to_string());
    let config = parse_cli(&program)?;

    let mut engine = ScriptedEngine::from_script(&config.engine, &config.script_path)
        .map_err(|e| format!("{} ({})", e.user_message(), e))?;

    let mut session = TrackingSession::new(config.session_params.clone())
        .with_opener(Box::new(LogUrlOpener));
    session.set_viewport(config.viewport[0], config.viewport[1]);

    let mut reports: Vec<FrameReport> = Vec::new();
    while engine.remaining() > 0 {
        let frame = match engine.update() {
            Ok(frame) => frame,
            Err(e) => return Err(format!("frame replay failed: {e}")),
        };
        reports.push(session.process_with_diagnostics(&frame));
    }

    if config.output.format.includes_text() {
        print_text_summary(&reports);
    }

    if config.output.format.includes_json() {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
        match &config.output.json_out {
            Some(path) => {
                write_json_file(path, &json)?;
                println!("JSON report written to {}", path.display());
            }
            None => println!("{json}"),
        }
    }

    Ok(())
}

fn print_text_summary(reports: &[FrameReport]) {
    println!("frames: {}", reports.len());
    for (index, report) in reports.iter().enumerate() {
        let frame = &report.frame;
        let hits: Vec<String> = frame
            .taps
            .iter()
            .filter_map(|t| t.image_id.map(|id| format!("image {id} @ ({:.0}, {:.0})", t.x, t.y)))
            .collect();
        println!(
            "  [{index}] tracked={} visible={} taps={} hits=[{}] latency_ms={:.3}",
            frame.tracked,
            frame.visible.len(),
            frame.taps.len(),
            hits.join(", "),
            frame.latency_ms
        );
    }
}

fn write_json_file(path: &Path, json: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

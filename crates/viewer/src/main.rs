use std::io::BufRead;
use std::path::{Path, PathBuf};

use anatomy_viewer_lib::command::{execute_json, execute_json_batch, CommandResponse};
use anatomy_viewer_lib::harness::TestHarness;
use anatomy_viewer_lib::state::ViewerSettings;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anatomy_viewer=info,anatomy_viewer_lib=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();

    let settings = match &args.settings {
        Some(path) => match ViewerSettings::load_from(path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::error!("Failed to load settings from {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => ViewerSettings::load(),
    };

    if args.save_settings {
        settings.save();
    }

    let mut harness = TestHarness::with_settings(settings);

    match &args.script {
        Some(path) => run_script(&mut harness, path),
        None => run_stdin(&mut harness),
    }
}

struct Args {
    script: Option<PathBuf>,
    settings: Option<PathBuf>,
    /// Persist the effective settings to the user config dir
    save_settings: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        script: None,
        settings: None,
        save_settings: false,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--script" if i + 1 < args.len() => {
                parsed.script = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--settings" if i + 1 < args.len() => {
                parsed.settings = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--save-settings" => parsed.save_settings = true,
            other => tracing::warn!("Ignoring argument '{other}'"),
        }
        i += 1;
    }
    parsed
}

/// Replay a JSON array of commands and print the responses as one array
fn run_script(harness: &mut TestHarness, path: &Path) {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to read script {}: {e}", path.display());
            std::process::exit(1);
        }
    };
    match execute_json_batch(harness, &json) {
        Ok(responses) => {
            tracing::info!("Ran {} commands from {}", responses.len(), path.display());
            print_json(&responses);
        }
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

/// One JSON command per line; one response per line
fn run_stdin(harness: &mut TestHarness) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let response = execute_json(harness, &line).unwrap_or_else(|e| CommandResponse {
            success: false,
            error: Some(e),
            data: None,
        });
        print_json(&response);
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("Failed to serialize response: {e}"),
    }
}

use std::io::Read;
use std::process::ExitCode;

use shapecode_editor_lib::command::execute_json_batch;
use shapecode_editor_lib::highlight::CodeView;
use shapecode_editor_lib::state::{EditorSession, EditorSettings};

/// Headless driver: reads a JSON command array from stdin, prints the listing.
///
/// Usage: shapecode-editor [--imports] [--no-boilerplate] [--html] [--settings <path>]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shapecode_editor=info,shapecode_editor_lib=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    let mut settings = load_settings(args.settings_path.as_deref());
    if args.imports {
        settings.show_imports = true;
    }
    if args.no_boilerplate {
        settings.show_boilerplate = false;
    }

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        tracing::error!("Failed to read commands from stdin: {e}");
        return ExitCode::FAILURE;
    }

    let mut session = EditorSession::new(settings, CodeView::new());
    if !input.trim().is_empty() {
        match execute_json_batch(&mut session, &input) {
            Ok(responses) => {
                for (i, resp) in responses.iter().enumerate() {
                    if let Some(err) = &resp.error {
                        tracing::warn!("Command #{i} failed: {err}");
                    }
                }
                tracing::info!("Executed {} commands", responses.len());
            }
            Err(e) => {
                tracing::error!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if args.html {
        println!("{}", session.surface().markup());
    } else {
        print!("{}", session.listing());
    }
    ExitCode::SUCCESS
}

#[derive(Default)]
struct Args {
    imports: bool,
    no_boilerplate: bool,
    html: bool,
    settings_path: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--imports" => args.imports = true,
            "--no-boilerplate" => args.no_boilerplate = true,
            "--html" => args.html = true,
            "--settings" => args.settings_path = iter.next(),
            other => tracing::warn!("Ignoring unknown argument {other}"),
        }
    }
    args
}

fn load_settings(path: Option<&str>) -> EditorSettings {
    let Some(path) = path else {
        return EditorSettings::default();
    };
    match std::fs::read_to_string(path) {
        Ok(json) => match EditorSettings::from_json(&json) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {path}");
                settings
            }
            Err(e) => {
                tracing::error!("Failed to parse settings JSON from {path}: {e}");
                EditorSettings::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read settings file {path}: {e}");
            EditorSettings::default()
        }
    }
}

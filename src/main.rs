//! Trail Route Editor (Replay-Host).
//!
//! Spielt eine aufgezeichnete Sitzung (JSON-Liste von Intents) durch den
//! Controller ab und gibt die resultierende Routen-Zusammenfassung als JSON aus.
//!
//! Aufruf: `trail-route-editor <session.json> [--seed N] [--config datei.toml]`

use anyhow::Context;
use clap::{Parser, ValueHint};
use std::path::PathBuf;
use trail_route_editor::{AppController, AppIntent, EngineOptions, RouteDraft};

#[derive(Parser, Debug)]
#[command(author, version, about = "Spielt eine Routen-Sitzung ab", long_about = None)]
struct Args {
    /// Sitzung als JSON-Liste von Intents
    #[arg(value_hint = ValueHint::FilePath)]
    session: PathBuf,

    /// Fester Seed für den Quick-Draw-Jitter
    #[arg(long)]
    seed: Option<u64>,

    /// Optionen-Datei (Standard: neben der Binary)
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren (RUST_LOG überschreibt den Standard)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Trail Route Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(EngineOptions::config_path);
    let options = EngineOptions::load_from_file(&config_path);

    let content = std::fs::read_to_string(&args.session)
        .with_context(|| format!("Sitzung nicht lesbar: {}", args.session.display()))?;
    let intents: Vec<AppIntent> = serde_json::from_str(&content)
        .with_context(|| format!("Sitzung fehlerhaft: {}", args.session.display()))?;

    let mut controller = match args.seed {
        Some(seed) => AppController::with_seed(seed),
        None => AppController::new(),
    };
    let mut state = RouteDraft::with_options(options);

    for intent in intents {
        controller.handle_intent(&mut state, intent)?;
    }
    log::info!("{} Commands ausgeführt", state.command_log.len());

    let summary = controller.build_summary(&state);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

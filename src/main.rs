//! FSA Response Editor – Sandbox.
//!
//! Lädt eine Antwort, wendet eine Liste von Bearbeitungsschritten an,
//! gibt die serialisierte Antwort aus und reicht sie optional beim
//! Evaluator ein.

use anyhow::Context;
use clap::Parser;
use fsa_response_editor::{
    render_report, AppCommand, AppController, AppState, EditCommand, EditorMode, EditorOptions,
    EvalParams, HttpEvaluatorClient,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "FSA-Response-Editor", version, about = "Sandbox für den FSA-Antworteditor")]
struct Cli {
    /// Persistierte Antwort (JSON); fehlt sie, startet der Standard-Automat
    #[arg(short, long)]
    answer: Option<PathBuf>,

    /// Referenzlösung (JSON)
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// Auswertungs-Parameter (JSON)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Bearbeitungsschritte als JSON-Liste von Edit-Commands
    #[arg(short, long)]
    edits: Option<PathBuf>,

    /// Optionen-Datei (Standard: neben der Binary)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Evaluator-Endpunkt überschreiben
    #[arg(long)]
    endpoint: Option<String>,

    /// Antwort beim Evaluator einreichen
    #[arg(long)]
    submit: bool,

    /// Wirksame Optionen in die Optionen-Datei schreiben
    #[arg(long)]
    save_options: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "FSA Response Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let cli = Cli::parse();

    let options_path = cli.options.clone().unwrap_or_else(EditorOptions::config_path);
    let mut options = EditorOptions::load_from_file(&options_path);
    if let Some(endpoint) = &cli.endpoint {
        options.evaluator_endpoint = endpoint.clone();
    }
    if cli.save_options {
        options.save_to_file(&options_path)?;
    }

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    let answer = cli.answer.as_deref().map(read_text).transpose()?;
    state.load_answer(answer.as_deref());

    if cli.reference.is_some() || cli.params.is_some() {
        state.mode = EditorMode::Teacher;
    }
    if let Some(path) = &cli.reference {
        let text = read_text(path)?;
        controller.handle_command(&mut state, AppCommand::SetReferenceAnswer { text })?;
    }
    if let Some(path) = &cli.params {
        let params: EvalParams = serde_json::from_str(&read_text(path)?)
            .with_context(|| format!("Parameter nicht lesbar: {}", path.display()))?;
        controller.handle_command(&mut state, AppCommand::SetEvalParams { params })?;
    }

    if let Some(path) = &cli.edits {
        let edits: Vec<EditCommand> = serde_json::from_str(&read_text(path)?)
            .with_context(|| format!("Edit-Liste nicht lesbar: {}", path.display()))?;
        log::info!("{} Bearbeitungsschritte aus {}", edits.len(), path.display());
        for edit in edits {
            controller.handle_command(&mut state, AppCommand::ApplyEdit { edit })?;
        }
    }

    println!("{}", state.serialized_answer());

    if cli.submit {
        let client = HttpEvaluatorClient::from_options(&state.options)?;
        controller.submit_and_wait(&mut state, &client).await?;

        if let Some(result) = state.evaluation.result() {
            println!();
            print!("{}", render_report(result));
            let highlights = state.highlights();
            for (state_id, severity) in &highlights.states {
                println!("state {}: {}", state_id, severity.as_str());
            }
            for (key, severity) in &highlights.transitions {
                println!("transition {}: {}", key, severity.as_str());
            }
            println!("{}", highlights.summary());
        } else if let Some(message) = state.evaluation.error_message() {
            eprintln!("Submission failed: {}", message);
        }
    }

    Ok(())
}

fn read_text(path: &std::path::Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Datei nicht lesbar: {}", path.display()))
}

//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod evaluation;
pub mod events;
pub mod handlers;
pub mod highlights;
pub mod history;
mod intent_mapping;
pub mod reducer;
pub mod render_scene;
pub mod report;
/// Application State
///
/// Dieses Modul verwaltet den Zustand des Editors (Graph, Automat, Auswertung).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use evaluation::{
    ConversionError, EvaluationOrchestrator, EvaluatorClient, EvaluatorError,
    HttpEvaluatorClient, SubmissionPhase, SubmissionToken,
};
pub use events::{AppCommand, AppIntent};
pub use highlights::{build_highlights, HighlightSet};
pub use reducer::apply_edit;
pub use render_scene::build as build_graph_view;
pub use report::render_report;
pub use state::{AppState, EditorMode, PendingSubmission, Selection, SelectionState};

//! FSA Response Editor Library.
//! Editor-Kern für endliche Automaten als Antwortfeld einer Lernplattform:
//! Automaten-Modell und Wire-Formate, Graph-Synchronisation,
//! Feedback-Markierungen und Einreichung beim Evaluator.

pub mod app;
pub mod codec;
pub mod core;
pub mod response_area;
pub mod shared;

pub use app::{
    apply_edit, build_highlights, render_report, AppCommand, AppController, AppIntent, AppState,
    EditorMode, EvaluatorClient, EvaluatorError, HighlightSet, HttpEvaluatorClient,
};
pub use core::{
    Automaton, EdgeId, EditCommand, EvalParams, EvaluationResult, FormatError, Severity,
    Transition, VisualGraph,
};
pub use response_area::{InputView, ResponseArea, WizardChange, WizardView, RESPONSE_TYPE};
pub use shared::{EditorOptions, GraphView};

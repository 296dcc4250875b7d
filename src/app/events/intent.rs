use crate::app::evaluation::{SubmissionOutcome, SubmissionToken};
use crate::core::{EdgeId, EvalParams};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Zustands-Panel (wirkt auf den selektierten Zustand) ──
    /// Namensfeld geändert (wird getrimmt)
    StateNameEdited { name: String },
    /// Checkbox "Initial" geändert
    InitialCheckboxChanged { enabled: bool },
    /// Checkbox "Accepting" geändert
    AcceptCheckboxChanged { enabled: bool },
    /// Selektierten Zustand löschen
    DeleteSelectedStateRequested,

    // ── Transitions-Panel (wirkt auf die selektierte Transition) ──
    /// Symbolfeld geändert
    TransitionSymbolEdited { symbol: String },
    /// Selektierte Transition löschen
    DeleteSelectedTransitionRequested,

    // ── Canvas ──
    /// Button "Add State" oder Doppelklick auf den Canvas
    AddStateRequested { position: Option<glam::Vec2> },
    /// Kante per Drag zwischen zwei Zuständen gezogen
    ConnectRequested { source: String, target: String },
    /// Zustand angeklickt
    StateClicked { state_id: String },
    /// Transition angeklickt
    TransitionClicked { edge: EdgeId },
    /// Klick ins Leere
    CanvasClicked,
    /// Zustand per Drag verschoben
    StateMoved {
        state_id: String,
        position: glam::Vec2,
    },

    // ── History ──
    UndoRequested,
    RedoRequested,

    // ── Autorenmodus ──
    /// Auswertungs-Parameter geändert
    ParamsChanged { params: EvalParams },
    /// Referenzlösung (JSON-Text) geändert
    ReferenceAnswerEdited { text: String },

    // ── Auswertung ──
    /// Button "Submit"
    SubmitRequested,
    /// Evaluator hat geantwortet (oder ist gescheitert)
    EvaluationFinished {
        token: SubmissionToken,
        outcome: SubmissionOutcome,
    },
    /// Ergebnis-Panel geschlossen
    ResultDismissed,
}

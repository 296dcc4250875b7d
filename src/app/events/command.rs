use crate::app::evaluation::{SubmissionOutcome, SubmissionToken};
use crate::core::{EdgeId, EditCommand, EvalParams};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Bearbeitungsschritt auf Graph und Automat anwenden
    ApplyEdit { edit: EditCommand },
    /// Zustand selektieren (hebt Transitions-Selektion auf)
    SelectState { state_id: String },
    /// Transition selektieren (hebt Zustands-Selektion auf)
    SelectTransition { edge: EdgeId },
    /// Selektion aufheben
    ClearSelection,
    /// Zustand verschieben (nur Darstellung)
    MoveState {
        state_id: String,
        position: glam::Vec2,
    },
    /// Letzten Bearbeitungsschritt rückgängig machen
    Undo,
    /// Rückgängig gemachten Schritt wiederholen
    Redo,
    /// Auswertungs-Parameter setzen (nur Autorenmodus)
    SetEvalParams { params: EvalParams },
    /// Referenzlösung setzen (nur Autorenmodus)
    SetReferenceAnswer { text: String },
    /// Einreichung starten
    BeginSubmission,
    /// Ergebnis einer Einreichung übernehmen
    CompleteSubmission {
        token: SubmissionToken,
        outcome: SubmissionOutcome,
    },
    /// Ergebnis und Markierungen ausblenden
    DismissResult,
}

//! Handler für Einreichung, Ergebnis und Autoren-Einstellungen.

use crate::app::evaluation::{SubmissionOutcome, SubmissionToken};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::EvalParams;

/// Startet eine Einreichung.
pub fn begin(state: &mut AppState) {
    use_cases::evaluation::begin_submission(state);
}

/// Übernimmt ein Evaluator-Ergebnis.
pub fn complete(state: &mut AppState, token: SubmissionToken, outcome: SubmissionOutcome) {
    use_cases::evaluation::complete_submission(state, token, outcome);
}

/// Blendet das Ergebnis aus.
pub fn dismiss(state: &mut AppState) {
    use_cases::evaluation::dismiss_result(state);
}

/// Setzt die Auswertungs-Parameter.
pub fn set_params(state: &mut AppState, params: EvalParams) {
    use_cases::evaluation::set_eval_params(state, params);
}

/// Setzt die Referenzlösung.
pub fn set_reference(state: &mut AppState, text: String) {
    use_cases::evaluation::set_reference_answer(state, text);
}

//! Use-Cases rund um die Einreichung beim Evaluator.

use crate::app::evaluation::{Completion, SubmissionOutcome, SubmissionToken};
use crate::app::state::PendingSubmission;
use crate::app::AppState;
use crate::core::EvalParams;

/// Startet eine Einreichung mit dem aktuellen Automaten.
///
/// Antwort und Referenz werden vorab konvertiert. Schlägt das fehl, gibt
/// es keinen Netzwerkaufruf und die Meldung landet in der Statuszeile.
/// Der fertige Request wird als [`PendingSubmission`] für den Host
/// bereitgelegt.
pub fn begin_submission(state: &mut AppState) {
    let reference = match state.reference_automaton() {
        Ok(reference) => reference,
        Err(e) => {
            let message = format!("Invalid reference answer: {:#}", e);
            log::error!("Einreichung abgebrochen: {}", message);
            state.evaluation.reject(message.clone());
            state.pending_submission = None;
            state.status_message = Some(message);
            return;
        }
    };

    match state
        .evaluation
        .begin(&state.automaton, &reference, &state.params)
    {
        Ok((token, request)) => {
            if let Some(previous) = state
                .pending_submission
                .replace(PendingSubmission { token, request })
            {
                log::debug!("Einreichung {} durch {} ersetzt", previous.token, token);
            }
            log::info!(
                "Einreichung {} gestartet ({} Zustände, {} Transitionen)",
                token,
                state.automaton.state_count(),
                state.automaton.transition_count()
            );
            state.status_message = Some("Submitting...".to_string());
        }
        Err(e) => {
            log::error!("Einreichung abgebrochen: {}", e);
            state.pending_submission = None;
            state.status_message = Some(e.to_string());
        }
    }
}

/// Übernimmt das Ergebnis einer Einreichung.
///
/// Ergebnisse überholter Einreichungen werden verworfen und ändern weder
/// Markierungen noch Statuszeile.
pub fn complete_submission(state: &mut AppState, token: SubmissionToken, outcome: SubmissionOutcome) {
    if state.evaluation.complete(token, outcome) == Completion::Stale {
        return;
    }

    if let Some(result) = state.evaluation.result() {
        let verdict = if result.is_correct {
            "Correct"
        } else {
            "Incorrect"
        };
        let summary = state.evaluation.highlights().summary();
        log::info!("Auswertung {} abgeschlossen: {} ({})", token, verdict, summary);
        state.status_message = Some(format!("{}: {}", verdict, summary));
    } else if let Some(message) = state.evaluation.error_message() {
        log::error!("Auswertung {} fehlgeschlagen: {}", token, message);
        state.status_message = Some(message.to_string());
    }
}

/// Blendet Ergebnis und Markierungen aus.
pub fn dismiss_result(state: &mut AppState) {
    state.evaluation.dismiss();
    state.status_message = None;
}

/// Setzt die Auswertungs-Parameter (nur Autorenmodus).
pub fn set_eval_params(state: &mut AppState, params: EvalParams) {
    if !state.is_teacher_mode() {
        log::warn!("Parameter sind nur im Autorenmodus änderbar");
        return;
    }
    log::info!(
        "Auswertungs-Parameter: {:?}/{:?}, max_test_length {}",
        params.evaluation_mode,
        params.expected_type,
        params.max_test_length()
    );
    state.params = params;
}

/// Setzt die Referenzlösung als JSON-Text (nur Autorenmodus).
pub fn set_reference_answer(state: &mut AppState, text: String) {
    if !state.is_teacher_mode() {
        log::warn!("Referenzlösung ist nur im Autorenmodus änderbar");
        return;
    }
    if let Err(e) = check_reference(&text) {
        log::debug!("Referenzlösung (noch) nicht lesbar: {:#}", e);
    }
    state.reference_answer = text;
}

fn check_reference(text: &str) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    crate::codec::try_parse(text).map(|_| ())
}

//! Lebenszyklus einer Auswertung: `idle → submitting → {succeeded, failed}`.
//!
//! Jede Einreichung erhält ein monoton steigendes Token. Nur das zuletzt
//! ausgegebene Token darf ein Ergebnis anwenden; ältere Antworten werden
//! verworfen, aber nicht abgebrochen.

use super::client::EvaluatorError;
use super::request::{ConversionError, EvaluationRequest};
use crate::app::highlights::{build_highlights, HighlightSet};
use crate::core::{Automaton, EvalParams, EvaluationResult};
use std::fmt;

/// Kennung einer Einreichung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionToken(u64);

impl fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ausgang eines Evaluator-Aufrufs.
pub type SubmissionOutcome = Result<EvaluationResult, EvaluatorError>;

/// Aktuelle Phase der Auswertung.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting {
        token: SubmissionToken,
    },
    Succeeded {
        result: EvaluationResult,
    },
    Failed {
        message: String,
    },
}

/// Was mit einem eingetroffenen Ergebnis passiert ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Ergebnis übernommen
    Applied,
    /// Ergebnis einer überholten Einreichung, verworfen
    Stale,
}

/// Verwaltet Einreichungen und die daraus abgeleiteten Markierungen.
#[derive(Debug, Default)]
pub struct EvaluationOrchestrator {
    phase: SubmissionPhase,
    last_issued: u64,
    highlights: HighlightSet,
}

impl EvaluationOrchestrator {
    /// Erstellt einen Orchestrator im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine Einreichung.
    ///
    /// Beide Automaten werden vor jedem Netzwerkaufruf konvertiert und
    /// geprüft. Schlägt das fehl, endet die Einreichung sofort in `Failed`.
    /// Eine noch laufende ältere Einreichung wird damit überholt. Die
    /// Markierungen des letzten Ergebnisses bleiben bis zum nächsten
    /// übernommenen Ergebnis stehen.
    pub fn begin(
        &mut self,
        response: &Automaton,
        answer: &Automaton,
        params: &EvalParams,
    ) -> Result<(SubmissionToken, EvaluationRequest), ConversionError> {
        self.last_issued += 1;
        let token = SubmissionToken(self.last_issued);

        match EvaluationRequest::build(response, answer, params) {
            Ok(request) => {
                self.phase = SubmissionPhase::Submitting { token };
                Ok((token, request))
            }
            Err(e) => {
                self.highlights = HighlightSet::default();
                self.phase = SubmissionPhase::Failed {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Beendet eine Einreichung, bevor sie überhaupt gebaut werden konnte.
    ///
    /// Überholt wie [`begin`](Self::begin) jede laufende Einreichung.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.last_issued += 1;
        self.highlights = HighlightSet::default();
        self.phase = SubmissionPhase::Failed {
            message: message.into(),
        };
    }

    /// Übernimmt das Ergebnis einer Einreichung, sofern sie die aktuellste ist.
    pub fn complete(&mut self, token: SubmissionToken, outcome: SubmissionOutcome) -> Completion {
        if self.phase != (SubmissionPhase::Submitting { token }) {
            log::warn!(
                "Veraltetes Auswertungsergebnis {} verworfen (aktuell: #{})",
                token,
                self.last_issued
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(result) => {
                self.highlights = build_highlights(&result);
                self.phase = SubmissionPhase::Succeeded { result };
            }
            Err(e) => {
                self.highlights = HighlightSet::default();
                self.phase = SubmissionPhase::Failed {
                    message: e.user_message(),
                };
            }
        }
        Completion::Applied
    }

    /// Blendet Ergebnis und Markierungen aus.
    ///
    /// Eine laufende Einreichung bleibt davon unberührt.
    pub fn dismiss(&mut self) {
        if !self.is_submitting() {
            self.phase = SubmissionPhase::Idle;
            self.highlights = HighlightSet::default();
        }
    }

    /// Zurück auf `Idle`; laufende Einreichungen werden dadurch veraltet.
    pub fn reset(&mut self) {
        self.last_issued += 1;
        self.phase = SubmissionPhase::Idle;
        self.highlights = HighlightSet::default();
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// Prüft ob eine Einreichung läuft.
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting { .. })
    }

    /// Letztes übernommenes Ergebnis.
    pub fn result(&self) -> Option<&EvaluationResult> {
        match &self.phase {
            SubmissionPhase::Succeeded { result } => Some(result),
            _ => None,
        }
    }

    /// Fehlermeldung der letzten Einreichung.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Markierungen des zuletzt übernommenen Ergebnisses.
    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FsaFeedback, HighlightKind, HighlightTarget, Severity, ValidationIssue};

    fn response() -> Automaton {
        Automaton::from_parts(
            vec!["q0".into(), "q1".into()],
            vec!["q0|a|q1".into()],
            "q0".into(),
            vec!["q1".into()],
        )
    }

    fn flagged_result(state: &str) -> EvaluationResult {
        EvaluationResult {
            is_correct: false,
            score: Some(0.5),
            feedback: "nope".into(),
            fsa_feedback: Some(FsaFeedback {
                errors: vec![ValidationIssue {
                    code: "UNREACHABLE".into(),
                    message: "unreachable".into(),
                    severity: None,
                    highlight: Some(HighlightTarget {
                        kind: HighlightKind::State,
                        state_id: Some(state.into()),
                        from_state: None,
                        to_state: None,
                        symbol: None,
                    }),
                    suggestion: None,
                }],
                ..Default::default()
            }),
        }
    }

    #[test]
    fn success_applies_result_and_highlights() {
        let mut orch = EvaluationOrchestrator::new();
        let (token, _) = orch
            .begin(&response(), &Automaton::empty(), &EvalParams::default())
            .unwrap();
        assert!(orch.is_submitting());

        assert_eq!(orch.complete(token, Ok(flagged_result("q1"))), Completion::Applied);
        assert!(orch.result().is_some());
        assert_eq!(orch.highlights().state("q1"), Some(Severity::Error));
    }

    #[test]
    fn highlights_of_last_result_survive_new_submission() {
        let mut orch = EvaluationOrchestrator::new();
        let (first, _) = orch
            .begin(&response(), &Automaton::empty(), &EvalParams::default())
            .unwrap();
        orch.complete(first, Ok(flagged_result("q1")));

        let (second, _) = orch
            .begin(&response(), &Automaton::empty(), &EvalParams::default())
            .unwrap();
        assert!(orch.is_submitting());
        assert_eq!(orch.highlights().state("q1"), Some(Severity::Error));

        orch.complete(second, Ok(flagged_result("q0")));
        assert_eq!(orch.highlights().state("q1"), None);
        assert_eq!(orch.highlights().state("q0"), Some(Severity::Error));
    }

    #[test]
    fn superseded_result_is_discarded() {
        let mut orch = EvaluationOrchestrator::new();
        let (first, _) = orch
            .begin(&response(), &Automaton::empty(), &EvalParams::default())
            .unwrap();
        let (second, _) = orch
            .begin(&response(), &Automaton::empty(), &EvalParams::default())
            .unwrap();

        assert_eq!(orch.complete(second, Ok(flagged_result("q0"))), Completion::Applied);
        assert_eq!(orch.complete(first, Ok(flagged_result("q1"))), Completion::Stale);
        assert_eq!(orch.highlights().state("q0"), Some(Severity::Error));
        assert_eq!(orch.highlights().state("q1"), None);
    }

    #[test]
    fn conversion_failure_ends_in_failed_without_token_in_flight() {
        let mut orch = EvaluationOrchestrator::new();
        let broken = Automaton::from_parts(vec!["q0".into()], vec!["q0|a".into()], "q0".into(), vec![]);
        let err = orch
            .begin(&broken, &Automaton::empty(), &EvalParams::default())
            .unwrap_err();

        assert!(matches!(err, ConversionError::Format { .. }));
        assert!(orch.error_message().unwrap().contains("q0|a"));
        assert!(!orch.is_submitting());
    }

    #[test]
    fn evaluator_error_becomes_failed_phase() {
        let mut orch = EvaluationOrchestrator::new();
        let (token, _) = orch
            .begin(&response(), &Automaton::empty(), &EvalParams::default())
            .unwrap();
        orch.complete(
            token,
            Err(EvaluatorError::Status {
                status: 422,
                body: "invalid params".into(),
            }),
        );
        assert_eq!(orch.error_message(), Some("invalid params"));
        assert!(orch.highlights().is_empty());
    }

    #[test]
    fn reject_supersedes_running_submission() {
        let mut orch = EvaluationOrchestrator::new();
        let (token, _) = orch
            .begin(&response(), &Automaton::empty(), &EvalParams::default())
            .unwrap();
        orch.reject("Invalid reference answer");
        assert_eq!(orch.complete(token, Ok(flagged_result("q0"))), Completion::Stale);
        assert_eq!(orch.error_message(), Some("Invalid reference answer"));
    }

    #[test]
    fn reset_discards_in_flight_submission() {
        let mut orch = EvaluationOrchestrator::new();
        let (token, _) = orch
            .begin(&response(), &Automaton::empty(), &EvalParams::default())
            .unwrap();
        orch.reset();
        assert_eq!(orch.complete(token, Ok(flagged_result("q0"))), Completion::Stale);
        assert_eq!(orch.phase(), &SubmissionPhase::Idle);
    }

    #[test]
    fn dismiss_keeps_running_submission() {
        let mut orch = EvaluationOrchestrator::new();
        let (token, _) = orch
            .begin(&response(), &Automaton::empty(), &EvalParams::default())
            .unwrap();
        orch.dismiss();
        assert!(orch.is_submitting());
        orch.complete(token, Ok(flagged_result("q0")));
        orch.dismiss();
        assert_eq!(orch.phase(), &SubmissionPhase::Idle);
        assert!(orch.highlights().is_empty());
    }
}

//! Abbildung eines Auswertungsergebnisses auf Canvas-Markierungen.
//!
//! Reine Funktion: liest nur das Ergebnis, nie den Automaten.

use crate::core::{flat_key, EvaluationResult, HighlightKind, HighlightTarget, Severity};
use indexmap::IndexMap;

/// Markierungen pro Zustand und pro Transition.
///
/// Transitionen sind über denselben flachen Schlüssel `from|symbol|to`
/// adressiert wie im kanonischen Automaten. Fehlende Einträge bedeuten
/// "keine Markierung".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightSet {
    /// Zustands-ID → Schweregrad
    pub states: IndexMap<String, Severity>,
    /// `from|symbol|to` → Schweregrad
    pub transitions: IndexMap<String, Severity>,
    /// Anzahl ausgewerteter Meldungen
    pub issue_count: usize,
    /// Meldungen ohne Canvas-Bezug (nur für die Zusammenfassung)
    pub unmapped: usize,
}

impl HighlightSet {
    /// Markierung eines Zustands.
    pub fn state(&self, state_id: &str) -> Option<Severity> {
        self.states.get(state_id).copied()
    }

    /// Markierung einer Transition über ihren flachen Schlüssel.
    pub fn transition(&self, key: &str) -> Option<Severity> {
        self.transitions.get(key).copied()
    }

    /// Prüft ob überhaupt etwas markiert ist.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.transitions.is_empty()
    }

    /// Kurze Zusammenfassung für die Statuszeile.
    pub fn summary(&self) -> String {
        let marked = self.issue_count - self.unmapped;
        if self.unmapped == 0 {
            format!("{} issue(s), {} marked on canvas", self.issue_count, marked)
        } else {
            format!(
                "{} issue(s), {} marked on canvas, {} without canvas location",
                self.issue_count, marked, self.unmapped
            )
        }
    }

    fn mark(map: &mut IndexMap<String, Severity>, key: String, severity: Severity) {
        // Bei mehrfacher Markierung gewinnt der höchste Schweregrad
        map.entry(key)
            .and_modify(|current| *current = (*current).max(severity))
            .or_insert(severity);
    }
}

/// Baut die Markierungen aus Fehlern (zuerst) und Warnungen.
///
/// Meldungen ohne Schweregrad gelten als `error`. Meldungen ohne oder mit
/// unvollständigem Ziel werden nur gezählt.
pub fn build_highlights(result: &EvaluationResult) -> HighlightSet {
    let mut set = HighlightSet::default();
    let Some(feedback) = result.fsa_feedback.as_ref() else {
        return set;
    };

    for issue in feedback.issues() {
        set.issue_count += 1;
        let severity = issue.effective_severity();

        match issue.highlight.as_ref().and_then(target_key) {
            Some(TargetKey::State(id)) => HighlightSet::mark(&mut set.states, id, severity),
            Some(TargetKey::Transition(key)) => {
                HighlightSet::mark(&mut set.transitions, key, severity)
            }
            None => set.unmapped += 1,
        }
    }

    set
}

enum TargetKey {
    State(String),
    Transition(String),
}

fn target_key(target: &HighlightTarget) -> Option<TargetKey> {
    match target.kind {
        HighlightKind::State | HighlightKind::InitialState | HighlightKind::AcceptState => target
            .state_id
            .as_ref()
            .filter(|id| !id.is_empty())
            .map(|id| TargetKey::State(id.clone())),
        HighlightKind::Transition => {
            let from = target.from_state.as_deref().filter(|s| !s.is_empty())?;
            let to = target.to_state.as_deref().filter(|s| !s.is_empty())?;
            let symbol = target.symbol.as_deref().unwrap_or_default();
            Some(TargetKey::Transition(flat_key(from, symbol, to)))
        }
        HighlightKind::Other => None,
    }
}

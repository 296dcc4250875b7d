//! Kanonische, serialisierbare Darstellung eines endlichen Automaten.

use super::transition::{EPSILON, FIELD_SEPARATOR};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Zustands-ID des Standard-Automaten.
pub const DEFAULT_STATE_ID: &str = "q0";

/// Endlicher Automat in der persistierten Form.
///
/// Transitionen liegen als flache `from|symbol|to`-Strings vor. Das Alphabet
/// wird immer aus den Transitionen abgeleitet und nie direkt bearbeitet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automaton {
    /// Zustands-IDs in Anzeigereihenfolge (eindeutig)
    pub states: Vec<String>,
    /// Verwendete Symbole ohne `ε`, in Reihenfolge des ersten Auftretens
    pub alphabet: Vec<String>,
    /// Flache Transitionen `from|symbol|to` (Duplikate erlaubt)
    pub transitions: Vec<String>,
    /// Startzustand oder leerer String
    pub initial_state: String,
    /// Akzeptierende Zustände (Teilmenge von `states`)
    pub accept_states: Vec<String>,
}

impl Default for Automaton {
    /// Ein Zustand `q0`, zugleich Startzustand, keine Transitionen.
    fn default() -> Self {
        Self {
            states: vec![DEFAULT_STATE_ID.to_string()],
            alphabet: Vec::new(),
            transitions: Vec::new(),
            initial_state: DEFAULT_STATE_ID.to_string(),
            accept_states: Vec::new(),
        }
    }
}

impl Automaton {
    /// Automat ganz ohne Zustände (z.B. fehlende Referenzlösung).
    pub fn empty() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            transitions: Vec::new(),
            initial_state: String::new(),
            accept_states: Vec::new(),
        }
    }

    /// Baut einen Automaten aus Rohdaten und stellt die Invarianten her.
    ///
    /// - doppelte Zustands-IDs werden verworfen (erstes Vorkommen gewinnt)
    /// - `initial_state` muss leer oder ein bekannter Zustand sein
    /// - `accept_states` wird auf bekannte Zustände reduziert und dedupliziert
    /// - das Alphabet wird aus den Transitionen abgeleitet
    ///
    /// Transitionen werden unverändert übernommen, auch fehlerhafte Triples.
    pub fn from_parts(
        states: Vec<String>,
        transitions: Vec<String>,
        initial_state: String,
        accept_states: Vec<String>,
    ) -> Self {
        let unique_states: IndexSet<String> = states.into_iter().collect();

        let initial_state = if unique_states.contains(&initial_state) {
            initial_state
        } else {
            if !initial_state.is_empty() {
                log::warn!("Startzustand '{}' existiert nicht, entfernt", initial_state);
            }
            String::new()
        };

        let accept_states: IndexSet<String> = accept_states
            .into_iter()
            .filter(|s| unique_states.contains(s))
            .collect();

        let alphabet = derive_alphabet(&transitions);

        Self {
            states: unique_states.into_iter().collect(),
            alphabet,
            transitions,
            initial_state,
            accept_states: accept_states.into_iter().collect(),
        }
    }

    /// Prüft ob ein Zustand existiert.
    pub fn has_state(&self, state_id: &str) -> bool {
        self.states.iter().any(|s| s == state_id)
    }

    /// Prüft ob ein Zustand akzeptierend ist.
    pub fn is_accepting(&self, state_id: &str) -> bool {
        self.accept_states.iter().any(|s| s == state_id)
    }

    /// Prüft ob ein Zustand der Startzustand ist.
    pub fn is_initial(&self, state_id: &str) -> bool {
        !self.initial_state.is_empty() && self.initial_state == state_id
    }

    /// Anzahl der Zustände.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Anzahl der Transitionen.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

/// Leitet das Alphabet aus flachen Transitionen ab (ohne `ε`, erstes Vorkommen zählt).
pub fn derive_alphabet<S: AsRef<str>>(transitions: &[S]) -> Vec<String> {
    let symbols: IndexSet<&str> = transitions
        .iter()
        .filter_map(|flat| {
            let mut fields = flat.as_ref().split(FIELD_SEPARATOR);
            fields.next()?;
            let symbol = fields.next()?;
            fields.next()?;
            if fields.next().is_some() {
                return None;
            }
            Some(symbol)
        })
        .filter(|symbol| !symbol.is_empty() && *symbol != EPSILON)
        .collect();

    symbols.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_has_single_initial_state() {
        let a = Automaton::default();
        assert_eq!(a.states, strings(&["q0"]));
        assert_eq!(a.initial_state, "q0");
        assert!(a.alphabet.is_empty());
        assert!(a.transitions.is_empty());
        assert!(a.accept_states.is_empty());
    }

    #[test]
    fn alphabet_skips_epsilon_and_keeps_first_occurrence_order() {
        let alphabet = derive_alphabet(&["q0|b|q1", "q1|ε|q0", "q1|a|q1", "q0|b|q0", "q0||q1"]);
        assert_eq!(alphabet, strings(&["b", "a"]));
    }

    #[test]
    fn alphabet_ignores_malformed_triples() {
        let alphabet = derive_alphabet(&["q0|a", "q0|b|c|q1", "q0|c|q1"]);
        assert_eq!(alphabet, strings(&["c"]));
    }

    #[test]
    fn from_parts_restores_invariants() {
        let a = Automaton::from_parts(
            strings(&["q0", "q1", "q0"]),
            strings(&["q0|a|q1"]),
            "qX".into(),
            strings(&["q1", "q9", "q1"]),
        );
        assert_eq!(a.states, strings(&["q0", "q1"]));
        assert_eq!(a.initial_state, "");
        assert_eq!(a.accept_states, strings(&["q1"]));
        assert_eq!(a.alphabet, strings(&["a"]));
    }

    #[test]
    fn empty_initial_state_is_never_initial() {
        let a = Automaton::empty();
        assert!(!a.is_initial(""));
    }
}

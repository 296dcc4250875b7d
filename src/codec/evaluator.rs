//! Strukturiertes Evaluator-Format mit objektwertigen Transitionen.

use crate::core::{Automaton, FormatError, Transition};
use serde::{Deserialize, Serialize};

/// Automat im Format des Evaluators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredAutomaton {
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub transitions: Vec<Transition>,
    pub initial_state: String,
    pub accept_states: Vec<String>,
}

/// Zerlegt alle flachen Transitionen in strukturierte Datensätze.
///
/// Schlägt fehl, sobald ein Triple nicht aus genau drei Feldern besteht.
/// Nichts wird stillschweigend verworfen.
pub fn to_evaluator_format(automaton: &Automaton) -> Result<StructuredAutomaton, FormatError> {
    let transitions = automaton
        .transitions
        .iter()
        .map(|flat| Transition::parse_flat(flat))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StructuredAutomaton {
        states: automaton.states.clone(),
        alphabet: automaton.alphabet.clone(),
        transitions,
        initial_state: automaton.initial_state.clone(),
        accept_states: automaton.accept_states.clone(),
    })
}

/// Gegenrichtung: Transitionen wieder flach kodieren.
///
/// Das Alphabet wird aus den Transitionen neu abgeleitet.
pub fn from_evaluator_format(structured: &StructuredAutomaton) -> Automaton {
    Automaton::from_parts(
        structured.states.clone(),
        structured
            .transitions
            .iter()
            .map(Transition::flatten)
            .collect(),
        structured.initial_state.clone(),
        structured.accept_states.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Automaton {
        Automaton::from_parts(
            vec!["q0".into(), "q1".into()],
            vec!["q0|a|q1".into()],
            "q0".into(),
            vec!["q1".into()],
        )
    }

    #[test]
    fn expands_flat_transitions() {
        let structured = to_evaluator_format(&scenario()).unwrap();
        assert_eq!(
            structured.transitions,
            vec![Transition {
                from_state: "q0".into(),
                symbol: "a".into(),
                to_state: "q1".into()
            }]
        );
        assert_eq!(structured.initial_state, "q0");
        assert_eq!(structured.accept_states, vec!["q1"]);
    }

    #[test]
    fn wire_shape_uses_object_transitions() {
        let json = serde_json::to_value(to_evaluator_format(&scenario()).unwrap()).unwrap();
        assert_eq!(json["transitions"][0]["from_state"], "q0");
        assert_eq!(json["transitions"][0]["symbol"], "a");
        assert_eq!(json["transitions"][0]["to_state"], "q1");
    }

    #[test]
    fn two_field_transition_is_a_hard_error() {
        let mut a = scenario();
        a.transitions.push("q0|a".into());
        let err = to_evaluator_format(&a).unwrap_err();
        assert!(matches!(err, FormatError::FieldCount { fields: 2, .. }));
    }

    #[test]
    fn conversion_round_trip() {
        let mut a = scenario();
        a.transitions.push("q1|ε|q0".into());
        a.transitions.push("q0|a|q1".into());
        let back = from_evaluator_format(&to_evaluator_format(&a).unwrap());
        assert_eq!(back, a);
    }
}

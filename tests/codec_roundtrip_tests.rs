//! Integrationstests für die Wire-Formate:
//! - persistierte Antwort (kompakt und doppelt kodiert)
//! - strukturiertes Evaluator-Format

use fsa_response_editor::codec::{self, from_evaluator_format, to_evaluator_format};
use fsa_response_editor::{Automaton, FormatError};

const NFA: &str = r#"{"states":["s","t","u"],"alphabet":["a"],"transitions":["s|a|t","t|ε|u","s|a|t"],"initial_state":"s","accept_states":["u"]}"#;

#[test]
fn test_kompakte_antwort_bleibt_byte_gleich() {
    let automaton = codec::parse(Some(NFA));

    assert_eq!(codec::serialize(&automaton), NFA);
}

#[test]
fn test_doppelt_kodierte_antwort_wird_gelesen_und_kompakt_geschrieben() {
    let double_encoded = serde_json::to_string(NFA).expect("String sollte serialisierbar sein");

    let automaton = codec::parse(Some(&double_encoded));

    assert_eq!(automaton.states, vec!["s", "t", "u"]);
    assert_eq!(codec::serialize(&automaton), NFA);
}

#[test]
fn test_kaputte_antwort_ergibt_standard_automat() {
    for raw in ["", "   ", "nicht json", "[1,2,3]", "\"\\\"kaputt\"", r#"{"states":5}"#] {
        assert_eq!(
            codec::parse(Some(raw)),
            Automaton::default(),
            "Eingabe '{}' sollte zum Standard-Automaten führen",
            raw
        );
    }
    assert_eq!(codec::parse(None), Automaton::default());
}

#[test]
fn test_alphabet_wird_beim_lesen_neu_abgeleitet() {
    let raw = r#"{"states":["s"],"alphabet":["z","y"],"transitions":["s|b|s","s|ε|s","s|a|s"],"initial_state":"s","accept_states":[]}"#;

    let automaton = codec::parse(Some(raw));

    assert_eq!(automaton.alphabet, vec!["b", "a"]);
}

#[test]
fn test_unbekannter_startzustand_wird_geleert() {
    let raw = r#"{"states":["s"],"transitions":[],"initial_state":"x","accept_states":["s","y","s"]}"#;

    let automaton = codec::parse(Some(raw));

    assert_eq!(automaton.initial_state, "");
    assert_eq!(automaton.accept_states, vec!["s"]);
}

#[test]
fn test_evaluator_format_erhaelt_duplikate_und_epsilon() {
    let automaton = codec::parse(Some(NFA));

    let structured = to_evaluator_format(&automaton).expect("Automat sollte konvertierbar sein");

    assert_eq!(structured.transitions.len(), 3);
    assert_eq!(structured.transitions[1].symbol, "ε");
    assert_eq!(structured.transitions[0], structured.transitions[2]);
    assert_eq!(from_evaluator_format(&structured), automaton);
}

#[test]
fn test_evaluator_format_lehnt_falsche_feldanzahl_ab() {
    let automaton = Automaton::from_parts(
        vec!["s".into()],
        vec!["s|a|s".into(), "s|a|b|s".into()],
        "s".into(),
        vec![],
    );

    let err = to_evaluator_format(&automaton).expect_err("Vier Felder sollten abgelehnt werden");

    assert!(matches!(err, FormatError::FieldCount { fields: 4, .. }));
}

#[test]
fn test_evaluator_json_hat_objekt_transitionen() {
    let automaton = codec::parse(Some(NFA));
    let structured = to_evaluator_format(&automaton).expect("Automat sollte konvertierbar sein");

    let json = serde_json::to_value(&structured).expect("Format sollte serialisierbar sein");

    assert_eq!(json["transitions"][0]["from_state"], "s");
    assert_eq!(json["transitions"][0]["symbol"], "a");
    assert_eq!(json["transitions"][0]["to_state"], "t");
    assert_eq!(json["initial_state"], "s");
}

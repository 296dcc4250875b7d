//! Persistierte Antwort: der Automat als JSON-Objekt in einem String.
//!
//! Kanonisch wird ein kompaktes JSON-Objekt geschrieben. Beim Lesen wird
//! zusätzlich die doppelt kodierte Altform (JSON-String mit dem Objekt)
//! akzeptiert. Jede fehlerhafte oder fehlende Eingabe ergibt den
//! Standard-Automaten.

use crate::core::Automaton;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Rohform der persistierten Antwort vor der Normalisierung.
#[derive(Deserialize)]
struct AnswerDocument {
    states: Vec<String>,
    transitions: Vec<String>,
    #[serde(default)]
    initial_state: Option<String>,
    #[serde(default)]
    accept_states: Vec<String>,
}

/// Liest eine persistierte Antwort. Fehler führen zum Standard-Automaten.
pub fn parse(serialized: Option<&str>) -> Automaton {
    let Some(raw) = serialized.filter(|s| !s.trim().is_empty()) else {
        log::debug!("Keine Antwort vorhanden, verwende Standard-Automat");
        return Automaton::default();
    };

    match try_parse(raw) {
        Ok(automaton) => automaton,
        Err(e) => {
            log::warn!("Antwort nicht lesbar, verwende Standard-Automat: {:#}", e);
            Automaton::default()
        }
    }
}

/// Strikte Variante von [`parse`] für Aufrufer, die den Fehler sehen wollen.
pub fn try_parse(raw: &str) -> Result<Automaton> {
    let mut value: Value = serde_json::from_str(raw).context("Antwort ist kein JSON")?;

    // Altform: Objekt als JSON-String kodiert
    if let Value::String(inner) = &value {
        value = serde_json::from_str(inner).context("Innerer Antwort-String ist kein JSON")?;
    }

    if !value.is_object() {
        bail!("Antwort ist kein JSON-Objekt");
    }

    let doc: AnswerDocument =
        serde_json::from_value(value).context("Antwort hat nicht die Automaten-Struktur")?;

    Ok(Automaton::from_parts(
        doc.states,
        doc.transitions,
        doc.initial_state.unwrap_or_default(),
        doc.accept_states,
    ))
}

/// Schreibt den Automaten als kompaktes JSON-Objekt.
pub fn serialize(automaton: &Automaton) -> String {
    match serde_json::to_string(automaton) {
        Ok(json) => json,
        Err(e) => {
            // Nur Strings und Listen: tritt praktisch nicht auf
            log::error!("Automat nicht serialisierbar: {}", e);
            String::new()
        }
    }
}

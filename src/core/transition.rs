//! Transitionen als strukturierter Datensatz und als flaches `from|symbol|to`-Triple.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserviertes Feldtrennzeichen der flachen Transitionsdarstellung.
pub const FIELD_SEPARATOR: char = '|';

/// Platzhalter-Symbol für leere Transitionsbeschriftungen.
pub const EPSILON: &str = "ε";

/// Fehler beim Zerlegen eines flachen Transitions-Triples.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Das Triple besteht nicht aus genau drei `|`-getrennten Feldern
    #[error("Invalid transition format: '{transition}' ({fields} field(s), expected 3)")]
    FieldCount { transition: String, fields: usize },
    /// Start- oder Zielzustand ist leer
    #[error("Invalid transition format: '{transition}' (empty state reference)")]
    EmptyEndpoint { transition: String },
}

/// Eine Transition im strukturierten Format des Evaluators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// Quellzustand
    pub from_state: String,
    /// Eingabesymbol (`ε` für leere Beschriftung)
    pub symbol: String,
    /// Zielzustand
    pub to_state: String,
}

impl Transition {
    /// Erstellt eine Transition; ein leeres Symbol wird zu `ε`.
    pub fn new(from_state: &str, symbol: &str, to_state: &str) -> Self {
        Self {
            from_state: from_state.to_string(),
            symbol: normalize_symbol(symbol).to_string(),
            to_state: to_state.to_string(),
        }
    }

    /// Zerlegt ein flaches Triple `from|symbol|to`.
    ///
    /// Genau drei Felder sind Pflicht, Start und Ziel dürfen nicht leer sein.
    pub fn parse_flat(flat: &str) -> Result<Self, FormatError> {
        let fields: Vec<&str> = flat.split(FIELD_SEPARATOR).collect();
        let [from_state, symbol, to_state] = fields.as_slice() else {
            return Err(FormatError::FieldCount {
                transition: flat.to_string(),
                fields: fields.len(),
            });
        };

        if from_state.is_empty() || to_state.is_empty() {
            return Err(FormatError::EmptyEndpoint {
                transition: flat.to_string(),
            });
        }

        Ok(Self::new(from_state, symbol, to_state))
    }

    /// Liefert die flache Darstellung, identisch zum Highlight-Schlüssel.
    pub fn flatten(&self) -> String {
        flat_key(&self.from_state, &self.symbol, &self.to_state)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.from_state,
            self.symbol,
            self.to_state,
            sep = FIELD_SEPARATOR
        )
    }
}

/// Baut den flachen Schlüssel `from|symbol|to` (leeres Symbol → `ε`).
pub fn flat_key(from_state: &str, symbol: &str, to_state: &str) -> String {
    format!(
        "{from_state}{sep}{}{sep}{to_state}",
        normalize_symbol(symbol),
        sep = FIELD_SEPARATOR
    )
}

/// Ersetzt ein leeres Symbol durch `ε`.
pub fn normalize_symbol(symbol: &str) -> &str {
    if symbol.is_empty() {
        EPSILON
    } else {
        symbol
    }
}

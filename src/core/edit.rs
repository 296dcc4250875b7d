//! Geschlossene Menge der Bearbeitungsbefehle auf dem Automaten-Graphen.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sitzungsweit eindeutige Kanten-ID (wird nie wiederverwendet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Ein Bearbeitungsschritt des Benutzers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditCommand {
    /// Neuen Zustand mit frischer ID anlegen
    AddState {
        #[serde(default)]
        position: Option<Vec2>,
    },
    /// Zustand umbenennen (leer oder kollidierend → No-op)
    RenameState { state_id: String, new_id: String },
    /// Startzustand setzen oder entfernen
    ToggleInitial { state_id: String, enabled: bool },
    /// Akzeptierenden Zustand setzen oder entfernen
    ToggleAccept { state_id: String, enabled: bool },
    /// Transition mit Platzhalter-Symbol zwischen zwei Zuständen anlegen
    Connect { source: String, target: String },
    /// Symbol einer Transition überschreiben (leer → `ε`)
    RelabelTransition { edge: EdgeId, symbol: String },
    /// Zustand inklusive aller anliegenden Transitionen löschen
    DeleteState { state_id: String },
    /// Einzelne Transition löschen
    DeleteTransition { edge: EdgeId },
}

/// Ergebnis eines angewendeten Bearbeitungsschritts.
#[derive(Debug, Clone, PartialEq)]
pub enum EditEffect {
    StateAdded { state_id: String },
    StateRenamed { from: String, to: String },
    InitialChanged { initial_state: Option<String> },
    AcceptChanged { state_id: String, accepting: bool },
    TransitionAdded { edge: EdgeId, symbol: String },
    TransitionRelabeled { edge: EdgeId },
    StateDeleted {
        state_id: String,
        removed_edges: Vec<EdgeId>,
    },
    TransitionDeleted { edge: EdgeId },
}

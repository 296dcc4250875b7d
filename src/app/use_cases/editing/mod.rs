//! Use-Case-Funktionen für Zustands- und Transitions-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_state`: Neuen Zustand anlegen
//! - `rename_state`: Zustand umbenennen
//! - `flags`: Start- und Akzeptanz-Flag setzen
//! - `connect`: Transition anlegen
//! - `relabel`: Transitions-Symbol ändern
//! - `delete`: Zustand oder Transition löschen
//!
//! Jede Operation mutiert den Graphen, leitet den Automaten neu ab und
//! markiert die Antwort als geändert. Nur wirksame Änderungen erzeugen
//! einen Undo-Snapshot.

mod add_state;
mod connect;
mod delete;
mod flags;
mod relabel;
mod rename_state;

pub use add_state::add_state;
pub use connect::connect_states;
pub use delete::{delete_state, delete_transition};
pub use flags::{set_accepting, set_initial};
pub use relabel::relabel_transition;
pub use rename_state::rename_state;

use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::{EditCommand, EditEffect};
use std::sync::Arc;

/// Wendet einen Bearbeitungsschritt auf den Graphen an.
///
/// Bei Erfolg wird der Snapshot von vorher in die History übernommen und
/// der Automat abgeleitet. Bei `None` bleibt der alte Graph unverändert
/// stehen.
fn apply_to_graph(state: &mut AppState, command: &EditCommand) -> Option<EditEffect> {
    let snap = Snapshot::from_state(state);
    let config = state.graph_config();

    match Arc::make_mut(&mut state.graph).apply(command, &config, &mut state.ids) {
        Some(effect) => {
            state.history.record_snapshot(snap);
            state.commit_graph();
            Some(effect)
        }
        None => {
            state.graph = snap.graph;
            None
        }
    }
}

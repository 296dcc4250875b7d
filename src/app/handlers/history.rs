//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    let prev = state.history.pop_undo_with_current(current);
    restore(state, prev, "Undo");
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    let next = state.history.pop_redo_with_current(current);
    restore(state, next, "Redo");
}

fn restore(state: &mut AppState, snapshot: Option<Snapshot>, label: &str) {
    let Some(snapshot) = snapshot else {
        log::debug!("{}: nichts zu tun", label);
        return;
    };
    snapshot.apply_to(state);
    log::info!(
        "{} ausgeführt ({} Zustände, {} Transitionen)",
        label,
        state.state_count(),
        state.transition_count()
    );
}

//! Use-Case: Zustände und Transitionen löschen.

use super::apply_to_graph;
use crate::app::AppState;
use crate::core::{EdgeId, EditCommand, EditEffect};

/// Löscht einen Zustand samt aller anliegenden Transitionen.
///
/// War der Zustand oder eine der entfernten Transitionen selektiert,
/// wird die Selektion aufgehoben.
pub fn delete_state(state: &mut AppState, state_id: &str) {
    let command = EditCommand::DeleteState {
        state_id: state_id.to_string(),
    };
    let Some(EditEffect::StateDeleted { removed_edges, .. }) = apply_to_graph(state, &command)
    else {
        log::debug!("Zustand {} existiert nicht", state_id);
        return;
    };

    let selection_removed = state.selection.selected_state() == Some(state_id)
        || state
            .selection
            .selected_edge()
            .is_some_and(|edge| removed_edges.contains(&edge));
    if selection_removed {
        state.selection.clear();
    }

    log::info!(
        "Zustand {} gelöscht ({} Transitionen entfernt)",
        state_id,
        removed_edges.len()
    );
}

/// Löscht eine einzelne Transition.
pub fn delete_transition(state: &mut AppState, edge: EdgeId) {
    if apply_to_graph(state, &EditCommand::DeleteTransition { edge }).is_none() {
        log::debug!("Transition {} existiert nicht", edge);
        return;
    }

    if state.selection.selected_edge() == Some(edge) {
        state.selection.clear();
    }
    log::info!("Transition {} gelöscht", edge);
}

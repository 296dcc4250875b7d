//! Use-Case: Neuen Zustand anlegen.

use super::apply_to_graph;
use crate::app::AppState;
use crate::core::{EditCommand, EditEffect};

/// Legt einen Zustand mit frischer ID an und selektiert ihn.
///
/// Ohne Position landet er auf der Standardposition (bei Belegung versetzt).
pub fn add_state(state: &mut AppState, position: Option<glam::Vec2>) {
    let Some(EditEffect::StateAdded { state_id }) =
        apply_to_graph(state, &EditCommand::AddState { position })
    else {
        return;
    };

    if let Some(node) = state.graph.node(&state_id) {
        log::info!(
            "Zustand {} an Position ({:.1}, {:.1}) hinzugefügt",
            state_id,
            node.position.x,
            node.position.y
        );
    }
    state.selection.select_state(state_id);
}

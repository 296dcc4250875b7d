//! Use-Case: Zustand umbenennen.

use super::apply_to_graph;
use crate::app::AppState;
use crate::core::EditCommand;

/// Benennt einen Zustand um.
///
/// Leere oder bereits vergebene IDs werden still ignoriert. Alle
/// Transitionen, Start- und Akzeptanzverweise folgen der neuen ID, die
/// Selektion ebenfalls.
pub fn rename_state(state: &mut AppState, state_id: &str, new_id: &str) {
    let command = EditCommand::RenameState {
        state_id: state_id.to_string(),
        new_id: new_id.to_string(),
    };
    if apply_to_graph(state, &command).is_none() {
        log::debug!("Umbenennen {} → '{}' ignoriert", state_id, new_id);
        return;
    }

    if state.selection.selected_state() == Some(state_id) {
        state.selection.select_state(new_id);
    }
    log::info!("Zustand {} umbenannt in {}", state_id, new_id);
}

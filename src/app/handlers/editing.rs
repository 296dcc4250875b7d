//! Handler für Zustands- und Transitions-Editing.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::EditCommand;

/// Dispatcht einen Bearbeitungsschritt an den passenden Use-Case.
pub fn apply_edit(state: &mut AppState, edit: EditCommand) {
    match edit {
        EditCommand::AddState { position } => use_cases::editing::add_state(state, position),
        EditCommand::RenameState { state_id, new_id } => {
            use_cases::editing::rename_state(state, &state_id, &new_id)
        }
        EditCommand::ToggleInitial { state_id, enabled } => {
            use_cases::editing::set_initial(state, &state_id, enabled)
        }
        EditCommand::ToggleAccept { state_id, enabled } => {
            use_cases::editing::set_accepting(state, &state_id, enabled)
        }
        EditCommand::Connect { source, target } => {
            use_cases::editing::connect_states(state, &source, &target)
        }
        EditCommand::RelabelTransition { edge, symbol } => {
            use_cases::editing::relabel_transition(state, edge, &symbol)
        }
        EditCommand::DeleteState { state_id } => use_cases::editing::delete_state(state, &state_id),
        EditCommand::DeleteTransition { edge } => use_cases::editing::delete_transition(state, edge),
    }
}

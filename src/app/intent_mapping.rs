//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::EditCommand;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Panel-Intents wirken auf die aktuelle Selektion; ohne passende
/// Selektion entstehen keine Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StateNameEdited { name } => {
            let Some(state_id) = state.selection.selected_state() else {
                return vec![];
            };
            let new_id = name.trim();
            if new_id.is_empty() || new_id == state_id || state.graph.has_state(new_id) {
                return vec![];
            }
            edit(EditCommand::RenameState {
                state_id: state_id.to_string(),
                new_id: new_id.to_string(),
            })
        }
        AppIntent::InitialCheckboxChanged { enabled } => state
            .selection
            .selected_state()
            .map(|id| {
                edit(EditCommand::ToggleInitial {
                    state_id: id.to_string(),
                    enabled,
                })
            })
            .unwrap_or_default(),
        AppIntent::AcceptCheckboxChanged { enabled } => state
            .selection
            .selected_state()
            .map(|id| {
                edit(EditCommand::ToggleAccept {
                    state_id: id.to_string(),
                    enabled,
                })
            })
            .unwrap_or_default(),
        AppIntent::DeleteSelectedStateRequested => state
            .selection
            .selected_state()
            .map(|id| {
                edit(EditCommand::DeleteState {
                    state_id: id.to_string(),
                })
            })
            .unwrap_or_default(),
        AppIntent::TransitionSymbolEdited { symbol } => state
            .selection
            .selected_edge()
            .map(|edge| edit(EditCommand::RelabelTransition { edge, symbol }))
            .unwrap_or_default(),
        AppIntent::DeleteSelectedTransitionRequested => state
            .selection
            .selected_edge()
            .map(|edge| edit(EditCommand::DeleteTransition { edge }))
            .unwrap_or_default(),

        AppIntent::AddStateRequested { position } => edit(EditCommand::AddState { position }),
        AppIntent::ConnectRequested { source, target } => {
            edit(EditCommand::Connect { source, target })
        }
        AppIntent::StateClicked { state_id } => vec![AppCommand::SelectState { state_id }],
        AppIntent::TransitionClicked { edge } => vec![AppCommand::SelectTransition { edge }],
        AppIntent::CanvasClicked => vec![AppCommand::ClearSelection],
        AppIntent::StateMoved { state_id, position } => {
            vec![AppCommand::MoveState { state_id, position }]
        }

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::ParamsChanged { params } => vec![AppCommand::SetEvalParams { params }],
        AppIntent::ReferenceAnswerEdited { text } => vec![AppCommand::SetReferenceAnswer { text }],

        AppIntent::SubmitRequested => vec![AppCommand::BeginSubmission],
        AppIntent::EvaluationFinished { token, outcome } => {
            vec![AppCommand::CompleteSubmission { token, outcome }]
        }
        AppIntent::ResultDismissed => vec![AppCommand::DismissResult],
    }
}

fn edit(edit: EditCommand) -> Vec<AppCommand> {
    vec![AppCommand::ApplyEdit { edit }]
}

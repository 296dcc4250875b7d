//! Application Controller für zentrale Event-Verarbeitung.

use super::evaluation::EvaluatorClient;
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::GraphView;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::ApplyEdit { edit } => handlers::editing::apply_edit(state, edit),

            // === Selektion ===
            AppCommand::SelectState { state_id } => {
                handlers::selection::select_state(state, &state_id)
            }
            AppCommand::SelectTransition { edge } => {
                handlers::selection::select_transition(state, edge)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::MoveState { state_id, position } => {
                handlers::selection::move_state(state, &state_id, position)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Autorenmodus ===
            AppCommand::SetEvalParams { params } => handlers::evaluation::set_params(state, params),
            AppCommand::SetReferenceAnswer { text } => {
                handlers::evaluation::set_reference(state, text)
            }

            // === Auswertung ===
            AppCommand::BeginSubmission => handlers::evaluation::begin(state),
            AppCommand::CompleteSubmission { token, outcome } => {
                handlers::evaluation::complete(state, token, outcome)
            }
            AppCommand::DismissResult => handlers::evaluation::dismiss(state),
        }

        Ok(())
    }

    /// Reicht den aktuellen Automaten ein und wartet auf das Ergebnis.
    ///
    /// Für Hosts ohne eigene Event-Loop. Scheitert die Vorab-Konvertierung,
    /// gibt es keinen Netzwerkaufruf.
    pub async fn submit_and_wait<C>(&mut self, state: &mut AppState, client: &C) -> anyhow::Result<()>
    where
        C: EvaluatorClient + ?Sized,
    {
        self.handle_intent(state, AppIntent::SubmitRequested)?;

        let Some(pending) = state.take_pending_submission() else {
            return Ok(());
        };
        let outcome = client.evaluate(&pending.request).await;
        self.handle_intent(
            state,
            AppIntent::EvaluationFinished {
                token: pending.token,
                outcome,
            },
        )
    }

    /// Baut die Graph-Ansicht aus dem aktuellen AppState.
    pub fn build_graph_view(&self, state: &AppState) -> GraphView {
        render_scene::build(state)
    }
}

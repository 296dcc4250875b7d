//! Use-Case: Transition zwischen zwei Zuständen anlegen.

use super::apply_to_graph;
use crate::app::AppState;
use crate::core::{EditCommand, EditEffect};

/// Legt eine Transition mit Platzhalter-Symbol an und selektiert sie.
///
/// Selbstschleifen und parallele Transitionen sind erlaubt. Fehlt einer
/// der Endpunkte, passiert nichts.
pub fn connect_states(state: &mut AppState, source: &str, target: &str) {
    let command = EditCommand::Connect {
        source: source.to_string(),
        target: target.to_string(),
    };
    let Some(EditEffect::TransitionAdded { edge, symbol }) = apply_to_graph(state, &command) else {
        log::debug!(
            "Transition nicht möglich: {} oder {} existiert nicht",
            source,
            target
        );
        return;
    };

    state.selection.select_transition(edge);
    log::info!("Transition {}: {} --{}--> {}", edge, source, symbol, target);
}

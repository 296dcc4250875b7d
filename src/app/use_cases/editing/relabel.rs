//! Use-Case: Symbol einer Transition ändern.

use super::apply_to_graph;
use crate::app::AppState;
use crate::core::{EdgeId, EditCommand};

/// Überschreibt das Symbol einer Transition. Leer bedeutet `ε`.
pub fn relabel_transition(state: &mut AppState, edge: EdgeId, symbol: &str) {
    let command = EditCommand::RelabelTransition {
        edge,
        symbol: symbol.to_string(),
    };
    if apply_to_graph(state, &command).is_some() {
        log::info!("Transition {} beschriftet mit '{}'", edge, symbol);
    } else {
        log::debug!("Beschriftung von {} unverändert", edge);
    }
}

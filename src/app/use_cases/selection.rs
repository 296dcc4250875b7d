//! Use-Cases für Selektion und Verschieben von Zuständen.

use crate::app::AppState;
use crate::core::EdgeId;
use std::sync::Arc;

/// Selektiert einen Zustand (hebt jede andere Selektion auf).
pub fn select_state(state: &mut AppState, state_id: &str) {
    if !state.graph.has_state(state_id) {
        log::debug!("Selektion ignoriert: Zustand {} existiert nicht", state_id);
        return;
    }
    state.selection.select_state(state_id);
}

/// Selektiert eine Transition (hebt jede andere Selektion auf).
pub fn select_transition(state: &mut AppState, edge: EdgeId) {
    if state.graph.edge(edge).is_none() {
        log::debug!("Selektion ignoriert: Transition {} existiert nicht", edge);
        return;
    }
    state.selection.select_transition(edge);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// Verschiebt einen Zustand auf dem Canvas.
///
/// Reine Darstellung: weder Automat noch History ändern sich.
pub fn move_state(state: &mut AppState, state_id: &str, position: glam::Vec2) {
    if !state.graph.has_state(state_id) {
        return;
    }
    Arc::make_mut(&mut state.graph).move_state(state_id, position);
}

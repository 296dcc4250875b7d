//! Handler für Selektion und Verschieben.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::EdgeId;

/// Selektiert einen Zustand.
pub fn select_state(state: &mut AppState, state_id: &str) {
    use_cases::selection::select_state(state, state_id);
}

/// Selektiert eine Transition.
pub fn select_transition(state: &mut AppState, edge: EdgeId) {
    use_cases::selection::select_transition(state, edge);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Verschiebt einen Zustand.
pub fn move_state(state: &mut AppState, state_id: &str, position: glam::Vec2) {
    use_cases::selection::move_state(state, state_id, position);
}

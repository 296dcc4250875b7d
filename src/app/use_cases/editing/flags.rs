//! Use-Case: Start- und Akzeptanz-Flag eines Zustands setzen.

use super::apply_to_graph;
use crate::app::AppState;
use crate::core::{EditCommand, EditEffect};

/// Setzt oder entfernt den Startzustand.
///
/// Setzen verdrängt den bisherigen Startzustand. Entfernen wirkt nur auf
/// den aktuellen Startzustand.
pub fn set_initial(state: &mut AppState, state_id: &str, enabled: bool) {
    let command = EditCommand::ToggleInitial {
        state_id: state_id.to_string(),
        enabled,
    };
    match apply_to_graph(state, &command) {
        Some(EditEffect::InitialChanged {
            initial_state: Some(id),
        }) => log::info!("Startzustand: {}", id),
        Some(_) => log::info!("Startzustand entfernt ({})", state_id),
        None => log::debug!("Startzustand unverändert ({})", state_id),
    }
}

/// Nimmt einen Zustand in die Akzeptanzmenge auf oder entfernt ihn.
pub fn set_accepting(state: &mut AppState, state_id: &str, enabled: bool) {
    let command = EditCommand::ToggleAccept {
        state_id: state_id.to_string(),
        enabled,
    };
    if apply_to_graph(state, &command).is_some() {
        log::info!(
            "Zustand {} {}",
            state_id,
            if enabled {
                "akzeptierend"
            } else {
                "nicht mehr akzeptierend"
            }
        );
    } else {
        log::debug!("Akzeptanz von {} unverändert", state_id);
    }
}

//! Reiner Reducer über dem kanonischen Automaten.
//!
//! Projiziert den Automaten in einen frischen Graphen, wendet den Befehl an
//! und leitet den Automaten neu ab. Kanten sind dabei über ihre Position in
//! `transitions` adressiert (`EdgeId(i)` = i-te Transition).

use crate::core::{Automaton, EditCommand, GraphConfig, IdAllocator, VisualGraph};

/// Wendet einen Bearbeitungsschritt an und liefert den neuen Automaten.
///
/// Wirkungslose Befehle geben den Automaten unverändert zurück.
pub fn apply_edit(automaton: &Automaton, command: &EditCommand) -> Automaton {
    apply_edit_with(automaton, command, &GraphConfig::default())
}

/// Wie [`apply_edit`], mit eigenen Layout- und Namensregeln.
pub fn apply_edit_with(
    automaton: &Automaton,
    command: &EditCommand,
    config: &GraphConfig,
) -> Automaton {
    let mut ids = IdAllocator::new();
    let mut graph = VisualGraph::from_automaton(automaton, config, &mut ids);

    match graph.apply(command, config, &mut ids) {
        Some(_) => graph.derive_automaton(),
        None => automaton.clone(),
    }
}

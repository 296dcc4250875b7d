//! Builder für die Graph-Ansicht aus dem AppState.

use crate::app::AppState;
use crate::core::transition::normalize_symbol;
use crate::shared::{EdgeView, GraphView, NodeView};

/// Baut eine GraphView aus dem aktuellen AppState.
///
/// Markierungen werden über Zustands-ID bzw. `from|symbol|to` nachgeschlagen
/// und nie in den Automaten geschrieben.
pub fn build(state: &AppState) -> GraphView {
    let highlights = state.highlights();

    let nodes = state
        .graph
        .nodes_iter()
        .map(|node| NodeView {
            id: node.id.clone(),
            label: node.id.clone(),
            position: node.position,
            initial: node.initial,
            accepting: node.accepting,
            selected: state.selection.selected_state() == Some(node.id.as_str()),
            highlight: highlights.state(&node.id),
        })
        .collect();

    let edges = state
        .graph
        .edges_iter()
        .map(|edge| EdgeView {
            id: edge.id,
            source: edge.source.clone(),
            target: edge.target.clone(),
            label: normalize_symbol(&edge.symbol).to_string(),
            selected: state.selection.selected_edge() == Some(edge.id),
            highlight: highlights.transition(&edge.key()),
        })
        .collect();

    GraphView { nodes, edges }
}

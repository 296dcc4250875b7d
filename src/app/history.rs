use super::SelectionState;
use crate::core::VisualGraph;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Graph-Klon findet erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case statt. Der Automat wird nach dem Wiederherstellen neu abgeleitet.
#[derive(Clone)]
pub struct Snapshot {
    /// Graph (Arc-Klon für O(1)-Snapshot)
    pub graph: Arc<VisualGraph>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            graph: Arc::clone(&state.graph),
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her und leitet den Automaten neu ab.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.graph = self.graph;
        state.selection = self.selection;
        state.commit_graph();
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Snapshot und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Snapshot und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::core::{GraphConfig, IdAllocator};

    fn make_snapshot_with_state_count(count: usize) -> Snapshot {
        let config = GraphConfig::default();
        let mut ids = IdAllocator::new();
        let mut graph = VisualGraph::new();
        for _ in 0..count {
            graph.add_state(None, &config, &mut ids);
        }
        let mut state = AppState::new();
        state.graph = Arc::new(graph);
        Snapshot::from_state(&state)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_enables_undo() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_state_count(1));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_state_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_state_count(5))
            .expect("undo vorhanden");

        assert_eq!(restored.graph.node_count(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_state_count(2));
        let _restored = history.pop_undo_with_current(make_snapshot_with_state_count(5));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_state_count(2))
            .expect("redo vorhanden");

        assert_eq!(redone.graph.node_count(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_state_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_state_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_state_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_state_count(i));
        }

        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(make_snapshot_with_state_count(99));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn zero_depth_disables_history() {
        let mut history = EditHistory::new_with_capacity(0);
        history.record_snapshot(make_snapshot_with_state_count(1));
        assert!(!history.can_undo());
    }

    #[test]
    fn snapshot_apply_to_restores_state_and_automaton() {
        let mut original = AppState::new();
        original.selection.select_state("q0");
        let snap = Snapshot::from_state(&original);

        let mut target = AppState::new();
        target.graph = Arc::new(VisualGraph::new());
        target.commit_graph();
        assert!(target.automaton.states.is_empty());

        snap.apply_to(&mut target);
        assert_eq!(target.automaton.states, vec!["q0"]);
        assert_eq!(target.selection.selected_state(), Some("q0"));
    }
}

//! Editierbarer Automaten-Graph: Zustands-Nodes und Transitions-Kanten.
//!
//! Der Graph trägt zusätzlich zur Automatendefinition reine Darstellungsdaten
//! (Positionen). Der kanonische `Automaton` wird nach jeder Mutation über
//! [`VisualGraph::derive_automaton`] neu abgeleitet.

use super::automaton::{derive_alphabet, Automaton};
use super::edit::{EdgeId, EditCommand, EditEffect};
use super::transition::{flat_key, Transition, FIELD_SEPARATOR};
use glam::Vec2;
use indexmap::IndexMap;

/// Layout- und Namensregeln für neue bzw. geladene Graph-Elemente.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Position des ersten geladenen Zustands
    pub layout_origin: Vec2,
    /// Horizontaler Abstand geladener Zustände
    pub layout_spacing: f32,
    /// Standardposition für neue Zustände
    pub new_state_position: Vec2,
    /// Versatz, falls die Standardposition bereits belegt ist
    pub new_state_offset: Vec2,
    /// Präfix generierter Zustands-IDs
    pub state_id_prefix: String,
    /// Präfix generierter Platzhalter-Symbole
    pub symbol_prefix: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            layout_origin: Vec2::new(50.0, 150.0),
            layout_spacing: 120.0,
            new_state_position: Vec2::new(50.0, 50.0),
            new_state_offset: Vec2::new(30.0, 30.0),
            state_id_prefix: "q".to_string(),
            symbol_prefix: "tran-".to_string(),
        }
    }
}

/// Monotone Zähler für generierte IDs.
///
/// Lebt außerhalb des Graphen, damit Undo/Redo bereits vergebene IDs
/// nicht erneut ausgibt.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next_state: u64,
    next_symbol: u64,
    next_edge: u64,
}

impl IdAllocator {
    /// Erstellt einen Allocator mit allen Zählern auf 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nächste freie Kanten-ID.
    pub fn next_edge_id(&mut self) -> EdgeId {
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        id
    }

    fn next_state_candidate(&mut self, prefix: &str) -> String {
        let candidate = format!("{}{}", prefix, self.next_state);
        self.next_state += 1;
        candidate
    }

    fn next_symbol_candidate(&mut self, prefix: &str) -> String {
        let candidate = format!("{}{}", prefix, self.next_symbol);
        self.next_symbol += 1;
        candidate
    }
}

/// Ein Zustand auf dem Canvas
#[derive(Debug, Clone, PartialEq)]
pub struct StateNode {
    /// Zustands-ID (zugleich Anzeige-Label)
    pub id: String,
    /// Canvas-Position
    pub position: Vec2,
    /// Startzustand
    pub initial: bool,
    /// Akzeptierender Zustand
    pub accepting: bool,
}

/// Eine Transition auf dem Canvas
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionEdge {
    /// Kanten-ID
    pub id: EdgeId,
    /// Quellzustand
    pub source: String,
    /// Zielzustand
    pub target: String,
    /// Symbol (leer = `ε` bei der Serialisierung)
    pub symbol: String,
}

impl TransitionEdge {
    /// Flacher Schlüssel `from|symbol|to`, identisch zur kanonischen Transition.
    pub fn key(&self) -> String {
        flat_key(&self.source, &self.symbol, &self.target)
    }
}

/// Zustände und Transitionen in Anzeigereihenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualGraph {
    nodes: IndexMap<String, StateNode>,
    edges: IndexMap<EdgeId, TransitionEdge>,
}

impl VisualGraph {
    /// Erstellt einen leeren Graphen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut den Graphen aus einem kanonischen Automaten auf.
    ///
    /// Zustände werden in einer Reihe angeordnet. Jede Transition verbraucht
    /// eine Kanten-ID, auch fehlerhafte Triples, die nicht als Kante
    /// darstellbar sind und übersprungen werden. Kanten mit unbekannten
    /// Endpunkten bleiben erhalten.
    pub fn from_automaton(automaton: &Automaton, config: &GraphConfig, ids: &mut IdAllocator) -> Self {
        let mut graph = Self::new();

        for (index, state_id) in automaton.states.iter().enumerate() {
            let position =
                config.layout_origin + Vec2::new(index as f32 * config.layout_spacing, 0.0);
            graph.nodes.insert(
                state_id.clone(),
                StateNode {
                    id: state_id.clone(),
                    position,
                    initial: automaton.is_initial(state_id),
                    accepting: automaton.is_accepting(state_id),
                },
            );
        }

        for flat in &automaton.transitions {
            let edge_id = ids.next_edge_id();
            match Transition::parse_flat(flat) {
                Ok(t) => {
                    if !graph.nodes.contains_key(&t.from_state)
                        || !graph.nodes.contains_key(&t.to_state)
                    {
                        log::debug!("Transition '{}' verweist auf unbekannten Zustand", flat);
                    }
                    graph.edges.insert(
                        edge_id,
                        TransitionEdge {
                            id: edge_id,
                            source: t.from_state,
                            target: t.to_state,
                            symbol: t.symbol,
                        },
                    );
                }
                Err(e) => log::warn!("Transition nicht darstellbar, übersprungen: {}", e),
            }
        }

        graph
    }

    /// Leitet den kanonischen Automaten aus dem aktuellen Graphen ab.
    pub fn derive_automaton(&self) -> Automaton {
        let transitions: Vec<String> = self.edges.values().map(TransitionEdge::key).collect();
        let alphabet = derive_alphabet(&transitions);

        Automaton {
            states: self.nodes.keys().cloned().collect(),
            alphabet,
            transitions,
            initial_state: self.initial_state().unwrap_or_default().to_string(),
            accept_states: self
                .nodes
                .values()
                .filter(|n| n.accepting)
                .map(|n| n.id.clone())
                .collect(),
        }
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Findet einen Zustand.
    pub fn node(&self, state_id: &str) -> Option<&StateNode> {
        self.nodes.get(state_id)
    }

    /// Findet eine Kante.
    pub fn edge(&self, edge: EdgeId) -> Option<&TransitionEdge> {
        self.edges.get(&edge)
    }

    /// Prüft ob ein Zustand existiert.
    pub fn has_state(&self, state_id: &str) -> bool {
        self.nodes.contains_key(state_id)
    }

    /// Iterator über alle Zustände in Anzeigereihenfolge.
    pub fn nodes_iter(&self) -> impl Iterator<Item = &StateNode> {
        self.nodes.values()
    }

    /// Iterator über alle Kanten in Anzeigereihenfolge.
    pub fn edges_iter(&self) -> impl Iterator<Item = &TransitionEdge> {
        self.edges.values()
    }

    /// Anzahl der Zustände.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der Kanten.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// ID des aktuellen Startzustands.
    pub fn initial_state(&self) -> Option<&str> {
        self.nodes
            .values()
            .find(|n| n.initial)
            .map(|n| n.id.as_str())
    }

    /// Kanten, die den Zustand als Quelle oder Ziel haben.
    pub fn incident_edges(&self, state_id: &str) -> Vec<EdgeId> {
        self.edges
            .values()
            .filter(|e| e.source == state_id || e.target == state_id)
            .map(|e| e.id)
            .collect()
    }

    /// Kanten-IDs in Anzeigereihenfolge (Position entspricht dem Index in `transitions`).
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.keys().copied().collect()
    }

    // ── Mutationen ──────────────────────────────────────────────────

    /// Wendet einen Bearbeitungsbefehl an. `None` bedeutet: nichts geändert.
    pub fn apply(
        &mut self,
        command: &EditCommand,
        config: &GraphConfig,
        ids: &mut IdAllocator,
    ) -> Option<EditEffect> {
        match command {
            EditCommand::AddState { position } => {
                let state_id = self.add_state(*position, config, ids);
                Some(EditEffect::StateAdded { state_id })
            }
            EditCommand::RenameState { state_id, new_id } => self
                .rename_state(state_id, new_id)
                .then(|| EditEffect::StateRenamed {
                    from: state_id.clone(),
                    to: new_id.clone(),
                }),
            EditCommand::ToggleInitial { state_id, enabled } => {
                self.set_initial(state_id, *enabled)
            }
            EditCommand::ToggleAccept { state_id, enabled } => self
                .set_accepting(state_id, *enabled)
                .then(|| EditEffect::AcceptChanged {
                    state_id: state_id.clone(),
                    accepting: *enabled,
                }),
            EditCommand::Connect { source, target } => self
                .connect(source, target, config, ids)
                .map(|(edge, symbol)| EditEffect::TransitionAdded { edge, symbol }),
            EditCommand::RelabelTransition { edge, symbol } => self
                .relabel(*edge, symbol)
                .then_some(EditEffect::TransitionRelabeled { edge: *edge }),
            EditCommand::DeleteState { state_id } => {
                self.remove_state(state_id)
                    .map(|removed_edges| EditEffect::StateDeleted {
                        state_id: state_id.clone(),
                        removed_edges,
                    })
            }
            EditCommand::DeleteTransition { edge } => self
                .remove_edge(*edge)
                .map(|e| EditEffect::TransitionDeleted { edge: e.id }),
        }
    }

    /// Legt einen Zustand mit frischer ID an und gibt die ID zurück.
    ///
    /// Ohne explizite Position wird die Standardposition so lange um den
    /// Versatz verschoben, bis sie frei ist. Nach `node_count + 1` Versuchen
    /// bleibt die zuletzt berechnete Position (z.B. bei Versatz `0,0`).
    pub fn add_state(
        &mut self,
        position: Option<Vec2>,
        config: &GraphConfig,
        ids: &mut IdAllocator,
    ) -> String {
        let state_id = loop {
            let candidate = ids.next_state_candidate(&config.state_id_prefix);
            if !self.nodes.contains_key(&candidate) {
                break candidate;
            }
        };

        let position = position.unwrap_or_else(|| {
            let mut pos = config.new_state_position;
            for _ in 0..=self.nodes.len() {
                if !self
                    .nodes
                    .values()
                    .any(|n| n.position.distance_squared(pos) < 1.0)
                {
                    break;
                }
                pos += config.new_state_offset;
            }
            pos
        });

        self.nodes.insert(
            state_id.clone(),
            StateNode {
                id: state_id.clone(),
                position,
                initial: false,
                accepting: false,
            },
        );
        state_id
    }

    /// Benennt einen Zustand um und schreibt alle Kanten-Endpunkte um.
    ///
    /// Leere IDs, IDs mit `|` und bereits vergebene IDs werden abgelehnt.
    /// Die Reihenfolge der Zustände bleibt erhalten.
    pub fn rename_state(&mut self, state_id: &str, new_id: &str) -> bool {
        if new_id.is_empty() || new_id.contains(FIELD_SEPARATOR) || self.nodes.contains_key(new_id)
        {
            return false;
        }
        let Some((index, _, mut node)) = self.nodes.shift_remove_full(state_id) else {
            return false;
        };

        node.id = new_id.to_string();
        self.nodes.shift_insert(index, new_id.to_string(), node);

        for edge in self.edges.values_mut() {
            if edge.source == state_id {
                edge.source = new_id.to_string();
            }
            if edge.target == state_id {
                edge.target = new_id.to_string();
            }
        }
        true
    }

    /// Setzt oder entfernt den Startzustand.
    ///
    /// Setzen entfernt jeden bisherigen Startzustand. Entfernen wirkt nur,
    /// wenn der Zustand tatsächlich Startzustand ist.
    pub fn set_initial(&mut self, state_id: &str, enabled: bool) -> Option<EditEffect> {
        let node = self.nodes.get(state_id)?;
        if node.initial == enabled {
            return None;
        }

        if enabled {
            for n in self.nodes.values_mut() {
                n.initial = n.id == state_id;
            }
            Some(EditEffect::InitialChanged {
                initial_state: Some(state_id.to_string()),
            })
        } else {
            if let Some(n) = self.nodes.get_mut(state_id) {
                n.initial = false;
            }
            Some(EditEffect::InitialChanged {
                initial_state: None,
            })
        }
    }

    /// Setzt oder entfernt die Akzeptanz eines Zustands (Mengensemantik).
    pub fn set_accepting(&mut self, state_id: &str, enabled: bool) -> bool {
        match self.nodes.get_mut(state_id) {
            Some(node) if node.accepting != enabled => {
                node.accepting = enabled;
                true
            }
            _ => false,
        }
    }

    /// Legt eine Kante mit frischem Platzhalter-Symbol an.
    ///
    /// Das Symbol kollidiert mit keinem vorhandenen Symbol. Selbstschleifen
    /// und parallele Kanten sind erlaubt.
    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
        config: &GraphConfig,
        ids: &mut IdAllocator,
    ) -> Option<(EdgeId, String)> {
        if !self.nodes.contains_key(source) || !self.nodes.contains_key(target) {
            return None;
        }

        let symbol = loop {
            let candidate = ids.next_symbol_candidate(&config.symbol_prefix);
            if !self.edges.values().any(|e| e.symbol == candidate) {
                break candidate;
            }
        };

        let id = ids.next_edge_id();
        self.edges.insert(
            id,
            TransitionEdge {
                id,
                source: source.to_string(),
                target: target.to_string(),
                symbol: symbol.clone(),
            },
        );
        Some((id, symbol))
    }

    /// Überschreibt das Symbol einer Kante. Symbole mit `|` werden abgelehnt.
    pub fn relabel(&mut self, edge: EdgeId, symbol: &str) -> bool {
        if symbol.contains(FIELD_SEPARATOR) {
            return false;
        }
        match self.edges.get_mut(&edge) {
            Some(e) if e.symbol != symbol => {
                e.symbol = symbol.to_string();
                true
            }
            _ => false,
        }
    }

    /// Entfernt einen Zustand inklusive aller anliegenden Kanten.
    ///
    /// Gibt die entfernten Kanten-IDs zurück.
    pub fn remove_state(&mut self, state_id: &str) -> Option<Vec<EdgeId>> {
        self.nodes.shift_remove(state_id)?;
        let removed = self.incident_edges(state_id);
        self.edges
            .retain(|_, e| e.source != state_id && e.target != state_id);
        Some(removed)
    }

    /// Entfernt eine einzelne Kante.
    pub fn remove_edge(&mut self, edge: EdgeId) -> Option<TransitionEdge> {
        self.edges.shift_remove(&edge)
    }

    /// Verschiebt einen Zustand (reine Darstellung, ändert den Automaten nicht).
    pub fn move_state(&mut self, state_id: &str, position: Vec2) -> bool {
        match self.nodes.get_mut(state_id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (VisualGraph, IdAllocator) {
        let automaton = Automaton::from_parts(
            vec!["q0".into(), "q1".into()],
            vec!["q0|a|q1".into(), "q1|b|q0".into()],
            "q0".into(),
            vec!["q1".into()],
        );
        let mut ids = IdAllocator::new();
        let graph = VisualGraph::from_automaton(&automaton, &GraphConfig::default(), &mut ids);
        (graph, ids)
    }

    #[test]
    fn from_automaton_lays_out_states_in_a_row() {
        let (graph, _) = sample();
        let q0 = graph.node("q0").unwrap();
        let q1 = graph.node("q1").unwrap();
        approx::assert_relative_eq!(q0.position.x, 50.0);
        approx::assert_relative_eq!(q1.position.x, 170.0);
        approx::assert_relative_eq!(q1.position.y, 150.0);
        assert!(q0.initial);
        assert!(q1.accepting);
    }

    #[test]
    fn derive_round_trips_loaded_automaton() {
        let (graph, _) = sample();
        let derived = graph.derive_automaton();
        assert_eq!(derived.states, vec!["q0", "q1"]);
        assert_eq!(derived.transitions, vec!["q0|a|q1", "q1|b|q0"]);
        assert_eq!(derived.alphabet, vec!["a", "b"]);
        assert_eq!(derived.initial_state, "q0");
        assert_eq!(derived.accept_states, vec!["q1"]);
    }

    #[test]
    fn malformed_transition_consumes_edge_id() {
        let automaton = Automaton::from_parts(
            vec!["q0".into()],
            vec!["q0|a".into(), "q0|b|q0".into()],
            "q0".into(),
            vec![],
        );
        let mut ids = IdAllocator::new();
        let graph = VisualGraph::from_automaton(&automaton, &GraphConfig::default(), &mut ids);
        assert_eq!(graph.edge_ids(), vec![EdgeId(1)]);
    }

    #[test]
    fn add_state_skips_taken_ids_and_positions() {
        let config = GraphConfig::default();
        let mut ids = IdAllocator::new();
        let mut graph = VisualGraph::new();

        let first = graph.add_state(None, &config, &mut ids);
        let second = graph.add_state(None, &config, &mut ids);
        assert_eq!(first, "q0");
        assert_eq!(second, "q1");
        assert_ne!(
            graph.node(&first).unwrap().position,
            graph.node(&second).unwrap().position
        );

        graph.rename_state("q0", "start");
        let third = graph.add_state(None, &config, &mut ids);
        assert_eq!(third, "q2", "bereits vergebene IDs werden nicht erneut erzeugt");
    }

    #[test]
    fn add_state_with_zero_offset_terminates() {
        let config = GraphConfig {
            new_state_offset: Vec2::ZERO,
            ..GraphConfig::default()
        };
        let mut ids = IdAllocator::new();
        let mut graph = VisualGraph::new();

        for _ in 0..3 {
            graph.add_state(None, &config, &mut ids);
        }

        assert_eq!(graph.node_count(), 3);
        assert!(graph
            .nodes_iter()
            .all(|n| n.position == config.new_state_position));
    }

    #[test]
    fn rename_keeps_order_and_rewrites_edges() {
        let (mut graph, _) = sample();
        assert!(graph.rename_state("q0", "start"));
        let derived = graph.derive_automaton();
        assert_eq!(derived.states, vec!["start", "q1"]);
        assert_eq!(derived.transitions, vec!["start|a|q1", "q1|b|start"]);
        assert_eq!(derived.initial_state, "start");
    }

    #[test]
    fn rename_rejects_blank_colliding_and_separator() {
        let (mut graph, _) = sample();
        assert!(!graph.rename_state("q0", ""));
        assert!(!graph.rename_state("q0", "q1"));
        assert!(!graph.rename_state("q0", "q0"));
        assert!(!graph.rename_state("q0", "a|b"));
        assert!(!graph.rename_state("missing", "x"));
        assert_eq!(graph.derive_automaton().states, vec!["q0", "q1"]);
    }

    #[test]
    fn connect_generates_unique_placeholder() {
        let (mut graph, mut ids) = sample();
        let config = GraphConfig::default();
        graph.relabel(EdgeId(0), "tran-0");

        let (_, symbol) = graph.connect("q0", "q0", &config, &mut ids).unwrap();
        assert_eq!(symbol, "tran-1");
        assert!(graph.connect("q0", "nope", &config, &mut ids).is_none());
    }

    #[test]
    fn remove_state_cascades() {
        let (mut graph, _) = sample();
        let removed = graph.remove_state("q1").unwrap();
        assert_eq!(removed, vec![EdgeId(0), EdgeId(1)]);
        let derived = graph.derive_automaton();
        assert_eq!(derived.states, vec!["q0"]);
        assert!(derived.transitions.is_empty());
        assert!(derived.accept_states.is_empty());
    }

    #[test]
    fn relabel_to_empty_serializes_as_epsilon() {
        let (mut graph, _) = sample();
        assert!(graph.relabel(EdgeId(0), ""));
        let derived = graph.derive_automaton();
        assert_eq!(derived.transitions[0], "q0|ε|q1");
        assert_eq!(derived.alphabet, vec!["b"]);
        assert!(!graph.relabel(EdgeId(0), "x|y"));
    }
}

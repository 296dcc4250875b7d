//! Application State: zentrale Datenhaltung.

use super::evaluation::{EvaluationOrchestrator, EvaluationRequest, SubmissionToken};
use super::highlights::HighlightSet;
use super::history::EditHistory;
use super::CommandLog;
use crate::codec;
use crate::core::{Automaton, EdgeId, EvalParams, GraphConfig, IdAllocator, VisualGraph};
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Wer den Editor gerade benutzt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Antwort bearbeiten und einreichen
    #[default]
    Student,
    /// Zusätzlich Parameter und Referenzlösung bearbeiten
    Teacher,
}

/// Das aktuell selektierte Element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    State(String),
    Transition(EdgeId),
}

/// Auswahlbezogener Anwendungszustand (höchstens ein Element)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<Selection>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// ID des selektierten Zustands.
    pub fn selected_state(&self) -> Option<&str> {
        match &self.selected {
            Some(Selection::State(id)) => Some(id),
            _ => None,
        }
    }

    /// ID der selektierten Transition.
    pub fn selected_edge(&self) -> Option<EdgeId> {
        match &self.selected {
            Some(Selection::Transition(edge)) => Some(*edge),
            _ => None,
        }
    }

    pub fn select_state(&mut self, state_id: impl Into<String>) {
        self.selected = Some(Selection::State(state_id.into()));
    }

    pub fn select_transition(&mut self, edge: EdgeId) {
        self.selected = Some(Selection::Transition(edge));
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}

/// Eine gestartete, noch nicht an den Evaluator übergebene Einreichung.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub token: SubmissionToken,
    pub request: EvaluationRequest,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Editierbarer Graph (Arc für O(1)-Snapshots)
    pub graph: Arc<VisualGraph>,
    /// Kanonischer Automat, nach jeder Mutation aus dem Graphen abgeleitet
    pub automaton: Automaton,
    /// Generator für Zustands-, Symbol- und Kanten-IDs
    pub ids: IdAllocator,
    /// Selection-State
    pub selection: SelectionState,
    /// Auswertungs-Lebenszyklus und Markierungen
    pub evaluation: EvaluationOrchestrator,
    /// Vom Host abzuholende Einreichung
    pub pending_submission: Option<PendingSubmission>,
    /// Auswertungs-Parameter
    pub params: EvalParams,
    /// Referenzlösung als JSON-Text (leer = keine)
    pub reference_answer: String,
    /// Student- oder Autorenmodus
    pub mode: EditorMode,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Letzte Meldung für die Statuszeile
    pub status_message: Option<String>,
    answer_dirty: bool,
}

impl AppState {
    /// Erstellt einen App-State mit dem Standard-Automaten
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit den gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let automaton = Automaton::default();
        let mut ids = IdAllocator::new();
        let graph = VisualGraph::from_automaton(&automaton, &options.graph_config(), &mut ids);

        Self {
            graph: Arc::new(graph),
            automaton,
            ids,
            selection: SelectionState::new(),
            evaluation: EvaluationOrchestrator::new(),
            pending_submission: None,
            params: EvalParams::default(),
            reference_answer: String::new(),
            mode: EditorMode::Student,
            history: EditHistory::new_with_capacity(options.undo_depth),
            command_log: CommandLog::new(),
            options,
            status_message: None,
            answer_dirty: false,
        }
    }

    /// Lädt eine persistierte Antwort und baut den Graphen neu auf.
    ///
    /// Fehlerhafte oder fehlende Antworten ergeben den Standard-Automaten.
    /// History, Selektion und laufende Auswertungen werden verworfen.
    pub fn load_answer(&mut self, serialized: Option<&str>) {
        let automaton = codec::parse(serialized);
        self.ids = IdAllocator::new();
        self.graph = Arc::new(VisualGraph::from_automaton(
            &automaton,
            &self.graph_config(),
            &mut self.ids,
        ));
        log::info!(
            "Antwort geladen: {} Zustände, {} Transitionen",
            automaton.state_count(),
            automaton.transition_count()
        );
        self.automaton = automaton;
        self.selection.clear();
        self.history = EditHistory::new_with_capacity(self.options.undo_depth);
        self.evaluation.reset();
        self.pending_submission = None;
        self.answer_dirty = false;
    }

    /// Leitet den Automaten aus dem Graphen ab und markiert die Antwort als geändert.
    pub fn commit_graph(&mut self) {
        self.automaton = self.graph.derive_automaton();
        self.answer_dirty = true;
    }

    /// Liefert die serialisierte Antwort, falls sie sich seit dem letzten Abruf geändert hat.
    pub fn take_answer_change(&mut self) -> Option<String> {
        if !self.answer_dirty {
            return None;
        }
        self.answer_dirty = false;
        Some(codec::serialize(&self.automaton))
    }

    /// Serialisierte Antwort (kanonische Form).
    pub fn serialized_answer(&self) -> String {
        codec::serialize(&self.automaton)
    }

    /// Referenzlösung als Automat; leerer Text ergibt einen leeren Automaten.
    pub fn reference_automaton(&self) -> anyhow::Result<Automaton> {
        if self.reference_answer.trim().is_empty() {
            return Ok(Automaton::empty());
        }
        codec::try_parse(&self.reference_answer)
    }

    /// Layout- und Namensregeln aus den Optionen.
    pub fn graph_config(&self) -> GraphConfig {
        self.options.graph_config()
    }

    /// Markierungen der letzten übernommenen Auswertung.
    pub fn highlights(&self) -> &HighlightSet {
        self.evaluation.highlights()
    }

    /// Holt die nächste an den Evaluator zu sendende Einreichung ab.
    pub fn take_pending_submission(&mut self) -> Option<PendingSubmission> {
        self.pending_submission.take()
    }

    /// Prüft ob Parameter und Referenz bearbeitet werden dürfen.
    pub fn is_teacher_mode(&self) -> bool {
        self.mode == EditorMode::Teacher
    }

    /// Gibt die Anzahl der Zustände zurück (für UI-Anzeige)
    pub fn state_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Gibt die Anzahl der Transitionen zurück (für UI-Anzeige)
    pub fn transition_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

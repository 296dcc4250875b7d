//! Graph-Ansicht als expliziter Übergabevertrag zwischen App und Canvas.
//!
//! Reine Projektion aus Graph, Selektion und Markierungen. Der Canvas
//! zeichnet nur, was hier steht.

use crate::core::{EdgeId, Severity};
use glam::Vec2;

/// Darstellungsdaten eines Zustands.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    /// Zustands-ID (Node-Identität auf dem Canvas)
    pub id: String,
    /// Anzeige-Label
    pub label: String,
    /// Canvas-Position
    pub position: Vec2,
    pub initial: bool,
    pub accepting: bool,
    pub selected: bool,
    /// Markierung aus der letzten Auswertung
    pub highlight: Option<Severity>,
}

impl NodeView {
    /// Style-Klassen in fester Reihenfolge.
    pub fn style_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["node"];
        if self.initial {
            classes.push("initial");
        }
        if self.accepting {
            classes.push("accept");
        }
        if self.selected {
            classes.push("selected");
        }
        if let Some(severity) = self.highlight {
            classes.push(highlight_class(severity));
        }
        classes
    }
}

/// Darstellungsdaten einer Transition.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeView {
    pub id: EdgeId,
    pub source: String,
    pub target: String,
    /// Symbol, `ε` für leere Beschriftung
    pub label: String,
    pub selected: bool,
    pub highlight: Option<Severity>,
}

impl EdgeView {
    /// Style-Klassen in fester Reihenfolge.
    pub fn style_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["edge"];
        if self.selected {
            classes.push("selected");
        }
        if let Some(severity) = self.highlight {
            classes.push(highlight_class(severity));
        }
        classes
    }
}

/// Vollständige Canvas-Ansicht eines Frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphView {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl GraphView {
    /// Findet die Ansicht eines Zustands.
    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Findet die Ansicht einer Kante.
    pub fn edge(&self, id: EdgeId) -> Option<&EdgeView> {
        self.edges.iter().find(|e| e.id == id)
    }
}

fn highlight_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "highlight-error",
        Severity::Warning => "highlight-warning",
        Severity::Info => "highlight-info",
    }
}

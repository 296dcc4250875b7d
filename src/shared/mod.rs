//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen und die Graph-Ansicht, die `app` baut
//! und der Canvas konsumiert.

pub mod graph_view;
pub mod options;

pub use graph_view::{EdgeView, GraphView, NodeView};
pub use options::EditorOptions;

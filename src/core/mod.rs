//! Core-Domänentypen: Automat, Transitionen, Graph, Feedback, Parameter.

pub mod automaton;
pub mod edit;
pub mod feedback;
pub mod graph;
pub mod params;
pub mod transition;

pub use automaton::{derive_alphabet, Automaton, DEFAULT_STATE_ID};
pub use edit::{EdgeId, EditCommand, EditEffect};
pub use feedback::{
    EvaluationResult, FsaFeedback, HighlightKind, HighlightTarget, LanguageComparison, Severity,
    StructuralInfo, TestCaseResult, ValidationIssue,
};
pub use graph::{GraphConfig, IdAllocator, StateNode, TransitionEdge, VisualGraph};
pub use params::{EvalParams, EvaluationMode, ExpectedType, FeedbackVerbosity};
pub use transition::{flat_key, FormatError, Transition, EPSILON, FIELD_SEPARATOR};

//! Ergebnis-Struktur des Evaluators inklusive strukturiertem Feedback.
//!
//! Alle Felder sind tolerant deserialisierbar: fehlende Listen werden leer,
//! fehlende optionale Abschnitte `None`.

use serde::{Deserialize, Serialize};

/// Schweregrad einer Markierung. Ordnung: `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// CSS-artiger Klassenname für die Darstellung.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Art des markierten Elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    State,
    Transition,
    InitialState,
    AcceptState,
    /// Unbekannte Art (wird nicht auf den Canvas abgebildet)
    #[serde(other)]
    Other,
}

/// Verweis eines Fehlers auf ein Canvas-Element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightTarget {
    #[serde(rename = "type")]
    pub kind: HighlightKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// Einzelner Fehler oder Warnung aus der Auswertung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    /// Fehlt die Angabe, gilt `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Effektiver Schweregrad (Default: `Error`).
    pub fn effective_severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Error)
    }
}

/// Strukturelle Zusammenfassung des eingereichten Automaten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralInfo {
    pub is_deterministic: bool,
    pub is_complete: bool,
    pub num_states: usize,
    pub num_transitions: usize,
    pub unreachable_states: Vec<String>,
    pub dead_states: Vec<String>,
}

/// Vergleich der akzeptierten Sprachen mit der Referenz.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageComparison {
    pub are_equivalent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterexample: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterexample_type: Option<String>,
}

/// Ergebnis eines einzelnen Testworts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestCaseResult {
    pub input: String,
    pub expected: bool,
    pub actual: bool,
    pub passed: bool,
}

/// Strukturiertes Feedback zum Automaten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsaFeedback {
    pub summary: String,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structural: Option<StructuralInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageComparison>,
    pub test_results: Vec<TestCaseResult>,
    pub hints: Vec<String>,
}

impl FsaFeedback {
    /// Fehler gefolgt von Warnungen, in Eingangsreihenfolge.
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

/// Antwort des Evaluators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationResult {
    pub is_correct: bool,
    /// Punktzahl in [0, 1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fsa_feedback: Option<FsaFeedback>,
}

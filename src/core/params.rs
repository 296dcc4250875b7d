//! Auswertungs-Parameter für den Evaluator (nur im Autorenmodus änderbar).

use serde::{Deserialize, Deserializer, Serialize};

/// Kleinste erlaubte maximale Testwortlänge.
pub const MAX_TEST_LENGTH_MIN: u32 = 1;
/// Größte erlaubte maximale Testwortlänge.
pub const MAX_TEST_LENGTH_MAX: u32 = 50;
/// Standardwert der maximalen Testwortlänge.
pub const MAX_TEST_LENGTH_DEFAULT: u32 = 10;

/// Strenge der Bewertung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    Strict,
    #[default]
    Lenient,
    Partial,
}

/// Erwartete Automatenklasse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExpectedType {
    #[serde(rename = "DFA")]
    Dfa,
    #[serde(rename = "NFA")]
    Nfa,
    #[default]
    #[serde(rename = "any")]
    Any,
}

/// Ausführlichkeit des Feedbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackVerbosity {
    Minimal,
    #[default]
    Standard,
    Detailed,
}

/// Parameter einer Auswertung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalParams {
    pub evaluation_mode: EvaluationMode,
    pub expected_type: ExpectedType,
    pub feedback_verbosity: FeedbackVerbosity,

    pub check_minimality: bool,
    pub check_completeness: bool,

    pub highlight_errors: bool,
    pub show_counterexample: bool,

    /// Maximale Testwortlänge, immer in 1–50
    #[serde(deserialize_with = "deserialize_max_test_length")]
    max_test_length: u32,
    pub is_dev: bool,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            evaluation_mode: EvaluationMode::Lenient,
            expected_type: ExpectedType::Any,
            feedback_verbosity: FeedbackVerbosity::Standard,
            check_minimality: false,
            check_completeness: false,
            highlight_errors: true,
            show_counterexample: true,
            max_test_length: MAX_TEST_LENGTH_DEFAULT,
            is_dev: false,
        }
    }
}

impl EvalParams {
    /// Maximale Testwortlänge.
    pub fn max_test_length(&self) -> u32 {
        self.max_test_length
    }

    /// Setzt die maximale Testwortlänge, begrenzt auf 1–50.
    pub fn set_max_test_length(&mut self, length: u32) {
        self.max_test_length = clamp_max_test_length(length);
    }

    /// Builder-Variante von [`Self::set_max_test_length`].
    pub fn with_max_test_length(mut self, length: u32) -> Self {
        self.set_max_test_length(length);
        self
    }
}

fn clamp_max_test_length(length: u32) -> u32 {
    length.clamp(MAX_TEST_LENGTH_MIN, MAX_TEST_LENGTH_MAX)
}

fn deserialize_max_test_length<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    let bounded = raw.clamp(MAX_TEST_LENGTH_MIN as i64, MAX_TEST_LENGTH_MAX as i64);
    Ok(bounded as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_authoring_panel() {
        let p = EvalParams::default();
        assert_eq!(p.evaluation_mode, EvaluationMode::Lenient);
        assert_eq!(p.expected_type, ExpectedType::Any);
        assert_eq!(p.feedback_verbosity, FeedbackVerbosity::Standard);
        assert!(p.highlight_errors);
        assert!(p.show_counterexample);
        assert!(!p.check_minimality);
        assert_eq!(p.max_test_length(), 10);
    }

    #[test]
    fn max_test_length_is_clamped() {
        assert_eq!(EvalParams::default().with_max_test_length(0).max_test_length(), 1);
        assert_eq!(EvalParams::default().with_max_test_length(99).max_test_length(), 50);
        assert_eq!(EvalParams::default().with_max_test_length(25).max_test_length(), 25);
    }

    #[test]
    fn deserialization_clamps_and_fills_defaults() {
        let p: EvalParams =
            serde_json::from_str(r#"{"expected_type": "DFA", "max_test_length": 500}"#).unwrap();
        assert_eq!(p.expected_type, ExpectedType::Dfa);
        assert_eq!(p.max_test_length(), 50);
        assert_eq!(p.evaluation_mode, EvaluationMode::Lenient);
    }

    #[test]
    fn serializes_wire_names() {
        let json = serde_json::to_value(EvalParams::default()).unwrap();
        assert_eq!(json["expected_type"], "any");
        assert_eq!(json["evaluation_mode"], "lenient");
        assert_eq!(json["max_test_length"], 10);
    }
}

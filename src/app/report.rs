//! Textbericht eines Auswertungsergebnisses (Ergebnis- und Feedback-Panel).

use crate::core::{EvaluationResult, FsaFeedback};
use std::fmt::Write;

/// Rendert das Ergebnis als mehrzeiligen Klartext.
pub fn render_report(result: &EvaluationResult) -> String {
    let mut out = String::new();
    // `write!` auf einen String schlägt nie fehl
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut String, result: &EvaluationResult) -> std::fmt::Result {
    writeln!(out, "Evaluation Result")?;
    writeln!(out, "Correct: {}", if result.is_correct { "Yes" } else { "No" })?;
    let feedback = if result.feedback.is_empty() {
        "No feedback"
    } else {
        result.feedback.as_str()
    };
    writeln!(out, "Feedback: {}", feedback)?;
    if let Some(score) = result.score {
        writeln!(out, "Score: {}%", (score * 100.0).round())?;
    }

    if let Some(fsa) = &result.fsa_feedback {
        write_feedback(out, fsa)?;
    }
    Ok(())
}

fn write_feedback(out: &mut String, fsa: &FsaFeedback) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "Detailed Feedback")?;
    if !fsa.summary.is_empty() {
        writeln!(out, "Summary: {}", fsa.summary)?;
    }

    if !fsa.errors.is_empty() {
        writeln!(out, "Errors:")?;
        for err in &fsa.errors {
            write!(out, "  - {} ({})", err.message, err.code)?;
            if let Some(suggestion) = &err.suggestion {
                write!(out, " - {}", suggestion)?;
            }
            writeln!(out)?;
        }
    }

    if !fsa.warnings.is_empty() {
        writeln!(out, "Warnings:")?;
        for warn in &fsa.warnings {
            writeln!(out, "  - {} ({})", warn.message, warn.code)?;
        }
    }

    if let Some(language) = fsa.language.as_ref().filter(|l| !l.are_equivalent) {
        writeln!(
            out,
            "Language Mismatch: Counterexample: {} ({})",
            language.counterexample.as_deref().unwrap_or_default(),
            language.counterexample_type.as_deref().unwrap_or_default()
        )?;
    }

    if let Some(structural) = &fsa.structural {
        writeln!(out, "Structural Info:")?;
        writeln!(
            out,
            "  Deterministic: {}, Complete: {}",
            yes_no(structural.is_deterministic),
            yes_no(structural.is_complete)
        )?;
        writeln!(
            out,
            "  States: {}, Transitions: {}",
            structural.num_states, structural.num_transitions
        )?;
        if !structural.unreachable_states.is_empty() {
            writeln!(out, "  Unreachable: {}", structural.unreachable_states.join(", "))?;
        }
        if !structural.dead_states.is_empty() {
            writeln!(out, "  Dead: {}", structural.dead_states.join(", "))?;
        }
    }

    if !fsa.test_results.is_empty() {
        writeln!(out, "Test Cases:")?;
        for tr in &fsa.test_results {
            writeln!(
                out,
                "  Input: {} | Expected: {} | Actual: {} | {}",
                tr.input,
                accept_reject(tr.expected),
                accept_reject(tr.actual),
                if tr.passed { "Passed" } else { "Failed" }
            )?;
        }
    }

    if !fsa.hints.is_empty() {
        writeln!(out, "Hints:")?;
        for hint in &fsa.hints {
            writeln!(out, "  - {}", hint)?;
        }
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn accept_reject(value: bool) -> &'static str {
    if value {
        "Accept"
    } else {
        "Reject"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LanguageComparison, TestCaseResult, ValidationIssue};

    #[test]
    fn minimal_result_has_fallback_feedback() {
        let report = render_report(&EvaluationResult::default());
        assert!(report.contains("Correct: No"));
        assert!(report.contains("Feedback: No feedback"));
        assert!(!report.contains("Score"));
        assert!(!report.contains("Detailed Feedback"));
    }

    #[test]
    fn full_result_lists_all_sections() {
        let result = EvaluationResult {
            is_correct: false,
            score: Some(0.756),
            feedback: "Almost".into(),
            fsa_feedback: Some(FsaFeedback {
                summary: "Two problems".into(),
                errors: vec![ValidationIssue {
                    code: "MISSING_ACCEPT".into(),
                    message: "No accept state".into(),
                    severity: None,
                    highlight: None,
                    suggestion: Some("Mark q1 accepting".into()),
                }],
                language: Some(LanguageComparison {
                    are_equivalent: false,
                    counterexample: Some("ab".into()),
                    counterexample_type: Some("should_accept".into()),
                }),
                test_results: vec![TestCaseResult {
                    input: "ab".into(),
                    expected: true,
                    actual: false,
                    passed: false,
                }],
                hints: vec!["Check q1".into()],
                ..Default::default()
            }),
        };

        let report = render_report(&result);
        assert!(report.contains("Score: 76%"));
        assert!(report.contains("  - No accept state (MISSING_ACCEPT) - Mark q1 accepting"));
        assert!(report.contains("Counterexample: ab (should_accept)"));
        assert!(report.contains("Input: ab | Expected: Accept | Actual: Reject | Failed"));
        assert!(report.contains("  - Check q1"));
    }
}

//! Aufbau des Evaluator-Requests aus Antwort, Referenz und Parametern.

use crate::codec::{to_evaluator_format, StructuredAutomaton};
use crate::core::{Automaton, EvalParams, FormatError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Welcher der beiden Automaten betroffen ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomatonSide {
    /// Antwort des Studierenden (`response`)
    Response,
    /// Referenzlösung des Autors (`answer`)
    Answer,
}

impl fmt::Display for AutomatonSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutomatonSide::Response => f.write_str("response"),
            AutomatonSide::Answer => f.write_str("answer"),
        }
    }
}

/// Ein Automat lässt sich nicht in das Evaluator-Format überführen.
///
/// Wird vor jedem Netzwerkaufruf geprüft und nie wiederholt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Invalid {side} automaton: {source}")]
    Format {
        side: AutomatonSide,
        #[source]
        source: FormatError,
    },
    #[error("Invalid {side} automaton: transition '{transition}' references unknown state '{state}'")]
    UnknownState {
        side: AutomatonSide,
        transition: String,
        state: String,
    },
}

/// Parameter-Block des Requests: Auswertungs-Parameter plus feste Konstanten.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestParams {
    #[serde(flatten)]
    pub eval: EvalParams,
    pub is_latex: bool,
    pub simplify: bool,
    pub symbols: BTreeMap<String, serde_json::Value>,
}

impl RequestParams {
    fn from_eval(eval: &EvalParams) -> Self {
        Self {
            eval: eval.clone(),
            is_latex: false,
            simplify: false,
            symbols: BTreeMap::new(),
        }
    }
}

/// Vollständiger Request-Body für `POST /evaluate/fsa`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRequest {
    pub response: StructuredAutomaton,
    pub answer: StructuredAutomaton,
    pub params: RequestParams,
}

impl EvaluationRequest {
    /// Konvertiert beide Automaten und prüft alle Transitions-Endpunkte.
    pub fn build(
        response: &Automaton,
        answer: &Automaton,
        params: &EvalParams,
    ) -> Result<Self, ConversionError> {
        Ok(Self {
            response: convert(response, AutomatonSide::Response)?,
            answer: convert(answer, AutomatonSide::Answer)?,
            params: RequestParams::from_eval(params),
        })
    }
}

fn convert(automaton: &Automaton, side: AutomatonSide) -> Result<StructuredAutomaton, ConversionError> {
    let structured =
        to_evaluator_format(automaton).map_err(|source| ConversionError::Format { side, source })?;

    for t in &structured.transitions {
        for endpoint in [&t.from_state, &t.to_state] {
            if !automaton.has_state(endpoint) {
                return Err(ConversionError::UnknownState {
                    side,
                    transition: t.flatten(),
                    state: endpoint.clone(),
                });
            }
        }
    }

    Ok(structured)
}

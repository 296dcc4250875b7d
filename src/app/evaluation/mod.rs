//! Einreichung beim Remote-Evaluator.
//!
//! - `request`: Request-Aufbau und Vorab-Validierung
//! - `client`: Transport (Trait + reqwest-Implementierung)
//! - `orchestrator`: Zustandsmaschine mit Submission-Token

pub mod client;
pub mod orchestrator;
pub mod request;

pub use client::{EvaluatorClient, EvaluatorError, HttpEvaluatorClient};
pub use orchestrator::{
    Completion, EvaluationOrchestrator, SubmissionOutcome, SubmissionPhase, SubmissionToken,
};
pub use request::{AutomatonSide, ConversionError, EvaluationRequest, RequestParams};

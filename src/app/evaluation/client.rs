//! Transport zum Remote-Evaluator.

use super::request::EvaluationRequest;
use crate::core::EvaluationResult;
use crate::shared::EditorOptions;
use async_trait::async_trait;
use std::time::Duration;

/// Fallback-Meldung, wenn der Evaluator keinen Fehlertext liefert.
pub const UNKNOWN_ERROR: &str = "Unknown error";
/// Fallback-Meldung, wenn der Request gar nicht zustande kommt.
pub const SUBMIT_FAILED: &str = "Failed to submit";

/// Fehler beim Aufruf des Evaluators. Keine automatische Wiederholung.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluatorError {
    #[error("Evaluator request failed: {0}")]
    Transport(String),
    #[error("Evaluator returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid evaluator response: {0}")]
    Decode(String),
}

impl EvaluatorError {
    /// Meldung für die Anzeige neben dem Submit-Button.
    ///
    /// Bei Nicht-Erfolgsstatus ist das der rohe Response-Body.
    pub fn user_message(&self) -> String {
        match self {
            EvaluatorError::Status { body, .. } if !body.trim().is_empty() => body.clone(),
            EvaluatorError::Status { .. } => UNKNOWN_ERROR.to_string(),
            EvaluatorError::Transport(msg) | EvaluatorError::Decode(msg) if !msg.is_empty() => {
                msg.clone()
            }
            EvaluatorError::Transport(_) | EvaluatorError::Decode(_) => SUBMIT_FAILED.to_string(),
        }
    }
}

/// Schnittstelle zum Evaluator-Dienst.
#[async_trait]
pub trait EvaluatorClient: Send + Sync {
    /// Sendet einen Request und liefert das Ergebnis.
    async fn evaluate(&self, request: &EvaluationRequest)
        -> Result<EvaluationResult, EvaluatorError>;
}

/// HTTP-Client (JSON-POST) für den Evaluator.
pub struct HttpEvaluatorClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEvaluatorClient {
    /// Erstellt einen Client für den gegebenen Endpunkt.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Erstellt einen Client aus den Editor-Optionen.
    pub fn from_options(options: &EditorOptions) -> anyhow::Result<Self> {
        Self::new(options.evaluator_endpoint.clone(), options.evaluator_timeout())
    }

    /// Konfigurierter Endpunkt.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EvaluatorClient for HttpEvaluatorClient {
    async fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResult, EvaluatorError> {
        log::debug!("Sende Auswertung an {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| EvaluatorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EvaluatorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<EvaluationResult>()
            .await
            .map_err(|e| EvaluatorError::Decode(e.to_string()))
    }
}

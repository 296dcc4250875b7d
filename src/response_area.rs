//! Vertrag mit der Host-Plattform: Antwortfeld vom Typ "FSA".
//!
//! Die Antwort wird als String gespeichert (kanonisch: kompaktes
//! JSON-Objekt). Beide Ansichten vertragen leere, fehlende oder ungültige
//! Antworten und starten dann mit dem Standard-Automaten.

use crate::app::{
    AppController, AppIntent, AppState, EditorMode, EvaluatorClient, PendingSubmission,
};
use crate::codec;
use crate::core::Automaton;
use crate::shared::{EditorOptions, GraphView};
use serde::Serialize;

/// Typkennung des Antwortfelds auf der Plattform.
pub const RESPONSE_TYPE: &str = "FSA";

/// Callback für Antwortänderungen der Studentenansicht.
pub type AnswerCallback = Box<dyn FnMut(String) + Send>;
/// Callback für bestätigte Änderungen der Autorenansicht.
pub type WizardCallback = Box<dyn FnMut(WizardChange) + Send>;

/// Antwortfeld mit der persistierten Antwort.
#[derive(Debug, Clone)]
pub struct ResponseArea {
    answer: String,
    options: EditorOptions,
}

impl Default for ResponseArea {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl ResponseArea {
    /// Neues Antwortfeld mit dem Standard-Automaten.
    pub fn new(options: EditorOptions) -> Self {
        Self {
            answer: codec::serialize(&Automaton::default()),
            options,
        }
    }

    pub fn response_type(&self) -> &'static str {
        RESPONSE_TYPE
    }

    /// Das Feld braucht die volle Breite.
    pub fn display_wide_input(&self) -> bool {
        true
    }

    /// Setzt die Antwort auf den serialisierten Standard-Automaten zurück.
    ///
    /// Die Konfiguration selbst wird nicht ausgewertet.
    pub fn init_with_config(&mut self, _config: &str) {
        self.answer = codec::serialize(&Automaton::default());
        log::debug!("Antwortfeld initialisiert");
    }

    /// Aktuell gespeicherte Antwort.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Übernimmt eine Antwort vom Host.
    pub fn set_answer(&mut self, answer: impl Into<String>) {
        self.answer = answer.into();
    }

    /// Studentenansicht auf eine vom Host gelieferte Antwort.
    pub fn input_view(&self, answer: Option<&str>, on_change: AnswerCallback) -> InputView {
        InputView::new(answer, self.options.clone(), on_change)
    }

    /// Autorenansicht auf eine lokale Kopie der gespeicherten Antwort.
    pub fn wizard_view(&self, on_confirm: WizardCallback) -> WizardView {
        WizardView::new(Some(&self.answer), self.options.clone(), on_confirm)
    }

    /// Bestätigt die Autorenansicht und übernimmt die Antwort ins Feld.
    pub fn confirm_wizard(&mut self, wizard: &mut WizardView) -> WizardChange {
        let change = wizard.confirm();
        self.answer = change.answer.clone();
        change
    }
}

/// Studentenansicht: jede wirksame Änderung geht sofort an den Host.
pub struct InputView {
    state: AppState,
    controller: AppController,
    on_change: AnswerCallback,
}

impl InputView {
    pub fn new(answer: Option<&str>, options: EditorOptions, on_change: AnswerCallback) -> Self {
        let mut state = AppState::with_options(options);
        state.load_answer(answer);
        Self {
            state,
            controller: AppController::new(),
            on_change,
        }
    }

    /// Verarbeitet einen UI-Intent und meldet eine geänderte Antwort.
    pub fn handle_intent(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)?;
        if let Some(next) = self.state.take_answer_change() {
            (self.on_change)(next);
        }
        Ok(())
    }

    /// Holt die nach `SubmitRequested` bereitliegende Einreichung ab.
    ///
    /// Der Host sendet den Request selbst und meldet das Ergebnis per
    /// `AppIntent::EvaluationFinished`. Bis dahin bleibt die Ansicht bedienbar.
    pub fn take_pending_submission(&mut self) -> Option<PendingSubmission> {
        self.state.take_pending_submission()
    }

    /// Reicht die Antwort ein und wartet auf das Ergebnis.
    pub async fn submit<C>(&mut self, client: &C) -> anyhow::Result<()>
    where
        C: EvaluatorClient + ?Sized,
    {
        self.controller.submit_and_wait(&mut self.state, client).await
    }

    pub fn graph_view(&self) -> GraphView {
        self.controller.build_graph_view(&self.state)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Bestätigte Änderung der Autorenansicht.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardChange {
    pub response_type: String,
    pub answer: String,
}

/// Autorenansicht: arbeitet auf einer lokalen Kopie bis zur Bestätigung.
///
/// Parameter und Referenzlösung sind hier bearbeitbar.
pub struct WizardView {
    state: AppState,
    controller: AppController,
    on_confirm: WizardCallback,
    unconfirmed: bool,
}

impl WizardView {
    pub fn new(answer: Option<&str>, options: EditorOptions, on_confirm: WizardCallback) -> Self {
        let mut state = AppState::with_options(options);
        state.load_answer(answer);
        state.mode = EditorMode::Teacher;
        Self {
            state,
            controller: AppController::new(),
            on_confirm,
            unconfirmed: false,
        }
    }

    /// Verarbeitet einen UI-Intent auf der lokalen Kopie.
    pub fn handle_intent(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)?;
        if self.state.take_answer_change().is_some() {
            self.unconfirmed = true;
        }
        Ok(())
    }

    /// Prüft ob es unbestätigte Änderungen gibt.
    pub fn has_unconfirmed_changes(&self) -> bool {
        self.unconfirmed
    }

    /// Veröffentlicht die lokale Kopie an den Host.
    pub fn confirm(&mut self) -> WizardChange {
        self.unconfirmed = false;
        let change = WizardChange {
            response_type: RESPONSE_TYPE.to_string(),
            answer: self.state.serialized_answer(),
        };
        log::info!("Autorenansicht bestätigt");
        (self.on_confirm)(change.clone());
        change
    }

    /// Holt die nach `SubmitRequested` bereitliegende Einreichung ab.
    pub fn take_pending_submission(&mut self) -> Option<PendingSubmission> {
        self.state.take_pending_submission()
    }

    /// Reicht die lokale Kopie gegen die Referenzlösung ein.
    pub async fn submit<C>(&mut self, client: &C) -> anyhow::Result<()>
    where
        C: EvaluatorClient + ?Sized,
    {
        self.controller.submit_and_wait(&mut self.state, client).await
    }

    pub fn graph_view(&self) -> GraphView {
        self.controller.build_graph_view(&self.state)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

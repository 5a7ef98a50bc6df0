//! Action boundary: submit, save, clear, and the saved-panel sync rule.
//!
//! Every user action runs to completion here. Failures become transient
//! notices and never escape; nothing that happens in an action can take the
//! process down.

use std::time::Duration;

use tracing::warn;

use crate::client::{Gender, Prediction, Predictor};
use crate::notice::{NoticeBoard, Severity};
use crate::store::{NameStore, SavedName};
use crate::validate::validate;
use crate::view::{View, ViewState};

/// Result of one submit action, after the surfaces have been rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input rejected before any network call.
    Rejected,
    /// Transport failure or unusable service response.
    Blocked,
    /// The service does not know the name.
    UnknownName,
    /// A prediction was rendered.
    Predicted(Prediction),
}

/// The lookup application: a predictor, a store, and a renderer wired
/// together behind the three user actions.
pub struct App<P, S, V> {
    client: P,
    store: S,
    view: V,
    notices: NoticeBoard,
    state: ViewState,
}

impl<P: Predictor, S: NameStore, V: View> App<P, S, V> {
    pub fn new(client: P, store: S, view: V, notice_timeout: Duration) -> Self {
        Self {
            client,
            store,
            view,
            notices: NoticeBoard::new(notice_timeout),
            state: ViewState::default(),
        }
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The renderer, for callers that need to inspect it.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The store, for callers that need to inspect it.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The notice board.
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Submit a name for prediction.
    ///
    /// Validation runs first; nothing is sent for rejected input. A
    /// prediction renders the prediction display, pre-selects the gender
    /// selector, and reconciles the saved-answer panel.
    pub async fn submit(&mut self, raw_name: &str) -> SubmitOutcome {
        let name = match validate(raw_name) {
            Ok(name) => name,
            Err(e) => {
                self.notify(e.to_string(), Severity::Error);
                return SubmitOutcome::Rejected;
            }
        };

        let prediction = match self.client.predict(&name).await {
            Ok(prediction) => prediction,
            Err(e) => {
                warn!(name = %name, error = %e, "Prediction request failed");
                self.notify("Request blocked - check your connection.", Severity::Error);
                return SubmitOutcome::Blocked;
            }
        };

        let Some(gender) = prediction.gender else {
            self.notify("Name doesn't exist.", Severity::Error);
            return SubmitOutcome::UnknownName;
        };

        self.state.prediction = Some(prediction.clone());
        self.state.predicted_gender = Some(gender);
        // A prediction pre-selects the selector; only an explicit save
        // confirms it into the store.
        self.state.confirmed_gender = Some(gender);
        self.view.show_prediction(&prediction);
        self.view.select_gender(Some(gender));
        self.sync_saved_view(name.as_str());
        SubmitOutcome::Predicted(prediction)
    }

    /// Persist a confirmed gender for a name, overwriting any prior answer.
    pub fn save(&mut self, raw_name: &str, gender: Gender) -> bool {
        let name = match validate(raw_name) {
            Ok(name) => name,
            Err(e) => {
                self.notify(e.to_string(), Severity::Error);
                return false;
            }
        };

        self.store.put(SavedName::new(name.as_str(), gender));
        self.state.confirmed_gender = Some(gender);
        self.view.select_gender(Some(gender));
        self.sync_saved_view(name.as_str());
        self.notify(format!("Saved '{}' as {}.", name, gender), Severity::Notice);
        true
    }

    /// Remove the saved answer for a name. Returns `true` iff one existed.
    pub fn clear(&mut self, raw_name: &str) -> bool {
        let name = match validate(raw_name) {
            Ok(name) => name,
            Err(e) => {
                self.notify(e.to_string(), Severity::Error);
                return false;
            }
        };

        let removed = self.store.delete(name.as_str());
        self.sync_saved_view(name.as_str());
        if removed {
            self.notify(
                format!("Cleared saved answer for '{}'.", name),
                Severity::Notice,
            );
        } else {
            self.notify(format!("No saved answer for '{}'.", name), Severity::Error);
        }
        removed
    }

    /// Re-render the saved-answer panel for a name without fetching.
    pub fn show_saved(&mut self, raw_name: &str) {
        match validate(raw_name) {
            Ok(name) => self.sync_saved_view(name.as_str()),
            Err(e) => self.notify(e.to_string(), Severity::Error),
        }
    }

    /// Every saved entry, for the listing surface.
    pub fn saved_entries(&self) -> Vec<SavedName> {
        self.store.list()
    }

    /// Reconcile the saved-answer panel with the store: no entry renders
    /// "Nothing!", otherwise the cached gender.
    fn sync_saved_view(&mut self, name: &str) {
        let saved = self.store.get(name);
        self.view.show_saved_answer(saved.as_ref());
        self.state.saved = saved;
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let notice = self.notices.publish(message, severity);
        self.view.show_notice(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Gender;
    use crate::error::{NamecastError, Result};
    use crate::notice::Notice;
    use crate::store::MemoryNameStore;
    use crate::validate::ValidName;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Predictor that replays a fixed response. `None` simulates a
    /// transport failure.
    struct ScriptedPredictor {
        response: Option<Prediction>,
        calls: AtomicUsize,
    }

    impl ScriptedPredictor {
        fn known(name: &str, gender: Gender, probability: f64) -> Self {
            Self {
                response: Some(Prediction {
                    name: name.to_string(),
                    gender: Some(gender),
                    probability: Some(probability),
                    count: Some(1000),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn unknown(name: &str) -> Self {
            Self {
                response: Some(Prediction {
                    name: name.to_string(),
                    gender: None,
                    probability: None,
                    count: Some(0),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::Relaxed)
        }
    }

    #[async_trait]
    impl Predictor for ScriptedPredictor {
        async fn predict(&self, _name: &ValidName) -> Result<Prediction> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            match &self.response {
                Some(prediction) => Ok(prediction.clone()),
                None => Err(NamecastError::Network("connection refused".into())),
            }
        }
    }

    /// Renderer that records every call for assertions.
    #[derive(Default)]
    struct RecordingView {
        predictions: Vec<Prediction>,
        selections: Vec<Option<Gender>>,
        saved_panels: Vec<Option<SavedName>>,
        notices: Vec<(String, Severity)>,
    }

    impl View for RecordingView {
        fn show_prediction(&mut self, prediction: &Prediction) {
            self.predictions.push(prediction.clone());
        }

        fn select_gender(&mut self, gender: Option<Gender>) {
            self.selections.push(gender);
        }

        fn show_saved_answer(&mut self, saved: Option<&SavedName>) {
            self.saved_panels.push(saved.cloned());
        }

        fn show_notice(&mut self, notice: &Notice) {
            self.notices.push((notice.message.clone(), notice.severity));
        }
    }

    fn test_app(
        predictor: ScriptedPredictor,
    ) -> App<ScriptedPredictor, MemoryNameStore, RecordingView> {
        App::new(
            predictor,
            MemoryNameStore::new(),
            RecordingView::default(),
            Duration::from_secs(60),
        )
    }

    #[tokio::test]
    async fn test_submit_known_name_renders_prediction_and_preselects() {
        let mut app = test_app(ScriptedPredictor::known("John", Gender::Male, 0.98));

        let outcome = app.submit("John").await;

        assert!(matches!(outcome, SubmitOutcome::Predicted(_)));
        let view = app.view();
        assert_eq!(view.predictions.len(), 1);
        assert_eq!(view.predictions[0].gender, Some(Gender::Male));
        assert_eq!(view.predictions[0].probability, Some(0.98));
        assert_eq!(view.selections.last(), Some(&Some(Gender::Male)));
        assert_eq!(app.state().predicted_gender, Some(Gender::Male));
        assert_eq!(app.state().confirmed_gender, Some(Gender::Male));
    }

    #[tokio::test]
    async fn test_submit_invalid_name_rejected_before_network() {
        let mut app = test_app(ScriptedPredictor::known("John", Gender::Male, 0.98));

        let outcome = app.submit("Xqzzy123").await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(app.client.call_count(), 0, "no network call for bad input");
        let view = app.view();
        assert!(view.predictions.is_empty(), "prediction surface untouched");
        assert_eq!(view.notices.len(), 1);
        assert_eq!(view.notices[0].1, Severity::Error);
    }

    #[tokio::test]
    async fn test_submit_unknown_name_notice_and_no_cache_write() {
        let mut app = test_app(ScriptedPredictor::unknown("Zzqlmnop"));

        let outcome = app.submit("Zzqlmnop").await;

        assert_eq!(outcome, SubmitOutcome::UnknownName);
        assert!(app.store().is_empty(), "unknown names are never cached");
        let (message, severity) = app.view().notices.last().unwrap();
        assert!(message.contains("doesn't exist"));
        assert_eq!(*severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_submit_network_failure_shows_blocked_notice() {
        let mut app = test_app(ScriptedPredictor::failing());

        let outcome = app.submit("John").await;

        assert_eq!(outcome, SubmitOutcome::Blocked);
        let (message, severity) = app.view().notices.last().unwrap();
        assert_eq!(message, "Request blocked - check your connection.");
        assert_eq!(*severity, Severity::Error);
        assert!(app.view().predictions.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_clear_leaves_nothing() {
        let mut app = test_app(ScriptedPredictor::known("John", Gender::Male, 0.98));

        assert!(app.save("John", Gender::Male));
        assert!(app.store().get("John").is_some());

        assert!(app.clear("John"));
        assert!(app.store().get("John").is_none());
        assert_eq!(
            app.view().saved_panels.last(),
            Some(&None),
            "saved panel shows Nothing! after clear"
        );
    }

    #[tokio::test]
    async fn test_save_persists_confirmed_gender_not_prediction() {
        let mut app = test_app(ScriptedPredictor::known("Sam", Gender::Male, 0.55));

        app.submit("Sam").await;
        assert_eq!(app.state().predicted_gender, Some(Gender::Male));

        // The user overrides the prediction; the store gets the override.
        app.save("Sam", Gender::Female);

        assert_eq!(app.store().get("Sam").unwrap().gender, Gender::Female);
        assert_eq!(app.state().confirmed_gender, Some(Gender::Female));
        assert_eq!(app.state().predicted_gender, Some(Gender::Male));
    }

    #[tokio::test]
    async fn test_clear_absent_name_reports_and_returns_false() {
        let mut app = test_app(ScriptedPredictor::failing());

        assert!(!app.clear("Nobody"));
        let (message, severity) = app.view().notices.last().unwrap();
        assert!(message.contains("No saved answer"));
        assert_eq!(*severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_submit_syncs_saved_panel_with_store() {
        let mut app = test_app(ScriptedPredictor::known("John", Gender::Male, 0.98));
        app.save("John", Gender::Female);

        app.submit("John").await;

        let panel = app.view().saved_panels.last().unwrap().as_ref().unwrap();
        assert_eq!(panel.gender, Gender::Female);
        assert_eq!(app.state().saved.as_ref().unwrap().name, "John");
    }

    #[tokio::test]
    async fn test_show_saved_renders_nothing_for_missing_entry() {
        let mut app = test_app(ScriptedPredictor::failing());

        app.show_saved("John");

        assert_eq!(app.view().saved_panels.last(), Some(&None));
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_name() {
        let mut app = test_app(ScriptedPredictor::failing());

        assert!(!app.save("R2D2", Gender::Male));
        assert!(app.store().is_empty());
    }

    #[tokio::test]
    async fn test_notice_board_tracks_latest_action() {
        let mut app = test_app(ScriptedPredictor::failing());

        app.save("John", Gender::Male);
        app.clear("John");

        let current = app.notices().current().unwrap();
        assert!(current.message.contains("Cleared"));
    }
}

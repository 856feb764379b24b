use log::{debug, error, info};
use serde_json::Value;

use crate::client::services::prediction_service::PredictError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(Value),
    Failed(String),
}

/// A request the form wants sent. `generation` must come back with the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub generation: u64,
    pub sentence: String,
}

/// Input text plus the outcome of the latest submission.
///
/// Overlapping submissions are last-wins: each `submit` bumps the generation
/// and `resolve` drops any outcome tagged with an older one. After `teardown`
/// every outcome is dropped.
#[derive(Debug, Default)]
pub struct PredictionForm {
    sentence: String,
    state: RequestState,
    generation: u64,
    torn_down: bool,
    disabled: bool,
}

impl PredictionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form that can never submit, showing `reason` as its failure.
    /// Used when the configured endpoint is unusable.
    pub fn unavailable(reason: String) -> Self {
        Self {
            state: RequestState::Failed(reason),
            disabled: true,
            ..Self::default()
        }
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn set_sentence(&mut self, sentence: String) {
        self.sentence = sentence;
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Required-field check only, same as the HTML `required` attribute.
    pub fn can_submit(&self) -> bool {
        !self.torn_down && !self.disabled && !self.sentence.is_empty()
    }

    /// Whether the button and Enter key are live; both are off while loading.
    pub fn submit_enabled(&self) -> bool {
        self.can_submit() && !self.is_loading()
    }

    pub fn submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            debug!("[FORM] submit ignored (empty sentence or form closed)");
            return None;
        }
        self.generation += 1;
        self.state = RequestState::Loading;
        Some(Submission {
            generation: self.generation,
            sentence: self.sentence.clone(),
        })
    }

    /// Apply the outcome of submission `generation`. Returns false when the
    /// outcome was stale or arrived after teardown.
    pub fn resolve(&mut self, generation: u64, outcome: Result<Value, PredictError>) -> bool {
        if self.torn_down {
            debug!("[FORM] outcome #{} arrived after teardown, dropped", generation);
            return false;
        }
        if generation != self.generation || !self.is_loading() {
            info!(
                "[FORM] dropping stale outcome #{} (current #{})",
                generation, self.generation
            );
            return false;
        }
        self.state = match outcome {
            Ok(value) => RequestState::Success(value),
            Err(e) => {
                error!("Error: {}", e);
                RequestState::Failed(e.user_message().to_string())
            }
        };
        true
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    pub fn result(&self) -> Option<&Value> {
        match &self.state {
            RequestState::Success(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Pretty JSON with 2-space indentation, as shown in the results block.
pub fn render_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::services::prediction_service::GENERIC_FAILURE_MESSAGE;
    use serde_json::json;

    fn form_with(sentence: &str) -> PredictionForm {
        let mut form = PredictionForm::new();
        form.set_sentence(sentence.to_string());
        form
    }

    #[test]
    fn empty_sentence_is_not_submitted() {
        let mut form = PredictionForm::new();
        assert!(form.submit().is_none());
        assert_eq!(form.state(), &RequestState::Idle);
    }

    #[test]
    fn submit_enters_loading_then_success() {
        let mut form = form_with("I love this");
        let sub = form.submit().unwrap();
        assert_eq!(sub.sentence, "I love this");
        assert!(form.is_loading());

        assert!(form.resolve(sub.generation, Ok(json!({"a": 1}))));
        assert_eq!(form.result(), Some(&json!({"a": 1})));
        assert!(form.error().is_none());
    }

    #[test]
    fn http_failure_shows_generic_message() {
        let mut form = form_with("meh");
        let sub = form.submit().unwrap();
        assert!(form.resolve(sub.generation, Err(PredictError::HttpStatus(500))));
        assert_eq!(form.error(), Some(GENERIC_FAILURE_MESSAGE));
        assert!(form.result().is_none());
    }

    #[test]
    fn new_submit_clears_previous_outcome() {
        let mut form = form_with("first");
        let sub = form.submit().unwrap();
        form.resolve(sub.generation, Err(PredictError::Transport("refused".into())));

        form.submit().unwrap();
        assert!(form.error().is_none());
        assert!(form.result().is_none());
        assert!(form.is_loading());
    }

    #[test]
    fn last_submission_wins_regardless_of_completion_order() {
        let mut form = form_with("one");
        let first = form.submit().unwrap();
        form.set_sentence("two".into());
        let second = form.submit().unwrap();

        // second completes first
        assert!(form.resolve(second.generation, Ok(json!({"n": 2}))));
        assert!(!form.resolve(first.generation, Ok(json!({"n": 1}))));
        assert_eq!(form.result(), Some(&json!({"n": 2})));

        // and the other way round
        let third = form.submit().unwrap();
        let fourth = form.submit().unwrap();
        assert!(!form.resolve(third.generation, Ok(json!({"n": 3}))));
        assert!(form.is_loading());
        assert!(form.resolve(fourth.generation, Err(PredictError::HttpStatus(502))));
        assert!(!form.is_loading());
        assert_eq!(form.error(), Some(GENERIC_FAILURE_MESSAGE));
    }

    #[test]
    fn outcome_is_applied_once() {
        let mut form = form_with("x");
        let sub = form.submit().unwrap();
        assert!(form.resolve(sub.generation, Ok(json!(1))));
        assert!(!form.resolve(sub.generation, Err(PredictError::HttpStatus(500))));
        assert_eq!(form.result(), Some(&json!(1)));
    }

    #[test]
    fn teardown_discards_late_outcome() {
        let mut form = form_with("bye");
        let sub = form.submit().unwrap();
        form.teardown();
        assert!(!form.resolve(sub.generation, Ok(json!({}))));
        assert!(form.submit().is_none());
    }

    #[test]
    fn submit_disabled_while_loading() {
        let mut form = form_with("wait for it");
        assert!(form.submit_enabled());

        let sub = form.submit().unwrap();
        assert!(!form.submit_enabled());

        form.resolve(sub.generation, Ok(json!({"joy": 0.9})));
        assert!(form.submit_enabled());

        let sub = form.submit().unwrap();
        assert!(!form.submit_enabled());
        form.resolve(sub.generation, Err(PredictError::Transport("refused".into())));
        assert!(form.submit_enabled());
    }

    #[test]
    fn each_submit_gets_a_new_generation() {
        let mut form = form_with("count");
        assert_eq!(form.generation(), 0);
        let first = form.submit().unwrap();
        let second = form.submit().unwrap();
        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);
        assert_eq!(form.generation(), second.generation);
    }

    #[test]
    fn unavailable_form_shows_reason_and_refuses_submit() {
        let mut form = PredictionForm::unavailable("Invalid API endpoint".into());
        form.set_sentence("hello".into());
        assert_eq!(form.error(), Some("Invalid API endpoint"));
        assert!(!form.submit_enabled());
        assert!(form.submit().is_none());
        assert_eq!(form.error(), Some("Invalid API endpoint"));
    }

    #[test]
    fn render_uses_two_space_indent() {
        assert_eq!(render_json(&json!({"a": 1})), "{\n  \"a\": 1\n}");
    }
}

use log::{error, info};
use serde_json::json;

use crate::client::config::ClientConfig;
use crate::client::models::code_snippet::{CodeSnippet, CopyTicket, SnippetId};
use crate::client::models::messages::Message;
use crate::client::models::prediction::{render_json, PredictionForm, RequestState, Submission};
use crate::client::services::clipboard_service::ClipboardWriter;

/// Follow-up work `update` asks the shell to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Predict(Submission),
    ExpireAck(CopyTicket),
    Close,
}

pub struct DocsAppState {
    pub base_url: CodeSnippet,
    pub request_headers: CodeSnippet,
    pub request_body: CodeSnippet,
    pub example_response: CodeSnippet,
    /// Shown only while the form holds a successful result.
    pub result: CodeSnippet,
    pub form: PredictionForm,
}

impl DocsAppState {
    pub fn new(config: &ClientConfig) -> Self {
        let request_body = json!({ "sentence": "Your text here" });
        let example_response = json!({
            "input_sentence": "Example sentence",
            "probabilities": { "joy": 0.9, "sadness": 0.1 },
            "filtered_emotions": { "joy": 0.9 }
        });
        Self {
            base_url: CodeSnippet::new(SnippetId::BaseUrl, config.api_url.clone(), "plaintext"),
            request_headers: CodeSnippet::new(
                SnippetId::RequestHeaders,
                "Content-Type: application/json",
                "plaintext",
            ),
            request_body: CodeSnippet::new(SnippetId::RequestBody, render_json(&request_body), "json"),
            example_response: CodeSnippet::new(
                SnippetId::ExampleResponse,
                render_json(&example_response),
                "json",
            ),
            result: CodeSnippet::new(SnippetId::Result, String::new(), "json"),
            form: match config.validate() {
                Ok(_) => PredictionForm::new(),
                Err(e) => {
                    error!("[APP] invalid prediction endpoint '{}': {}", config.predict_url(), e);
                    PredictionForm::unavailable(format!(
                        "Invalid API endpoint '{}': {}",
                        config.predict_url(),
                        e
                    ))
                }
            },
        }
    }

    pub fn snippet(&self, id: SnippetId) -> &CodeSnippet {
        match id {
            SnippetId::BaseUrl => &self.base_url,
            SnippetId::RequestHeaders => &self.request_headers,
            SnippetId::RequestBody => &self.request_body,
            SnippetId::ExampleResponse => &self.example_response,
            SnippetId::Result => &self.result,
        }
    }

    fn snippet_mut(&mut self, id: SnippetId) -> &mut CodeSnippet {
        match id {
            SnippetId::BaseUrl => &mut self.base_url,
            SnippetId::RequestHeaders => &mut self.request_headers,
            SnippetId::RequestBody => &mut self.request_body,
            SnippetId::ExampleResponse => &mut self.example_response,
            SnippetId::Result => &mut self.result,
        }
    }

    pub fn update<C: ClipboardWriter + ?Sized>(&mut self, message: Message, clipboard: &mut C) -> Effect {
        match message {
            Message::SentenceChanged(sentence) => {
                self.form.set_sentence(sentence);
                Effect::None
            }
            Message::Submit => match self.form.submit() {
                Some(submission) => {
                    self.result.set_code(String::new());
                    info!("[APP] submitting prediction #{}", submission.generation);
                    Effect::Predict(submission)
                }
                None => Effect::None,
            },
            Message::PredictionFinished { generation, outcome } => {
                if self.form.resolve(generation, outcome) {
                    if let RequestState::Success(value) = self.form.state() {
                        let rendered = render_json(value);
                        self.result.set_code(rendered);
                    }
                }
                Effect::None
            }
            Message::Copy(id) => match self.snippet_mut(id).copy(clipboard) {
                Some(ticket) => Effect::ExpireAck(ticket),
                None => Effect::None,
            },
            Message::CopyAckExpired(ticket) => {
                self.snippet_mut(ticket.snippet).expire(ticket);
                Effect::None
            }
            Message::CloseRequested => {
                info!("[APP] window closing, discarding pending predictions");
                self.form.teardown();
                Effect::Close
            }
        }
    }
}

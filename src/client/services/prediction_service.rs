use log::{error, info};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;

use crate::client::config::ClientConfig;

/// The only failure text ever shown to the user.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to connect to the API. Please ensure the server is running and try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl PredictError {
    /// Every variant collapses to the same message; details only go to the log.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub sentence: &'a str,
}

#[derive(Debug, Clone)]
pub struct PredictionService {
    client: reqwest::Client,
    predict_url: String,
}

impl PredictionService {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_url(config.predict_url())
    }

    pub fn with_url(predict_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            predict_url: predict_url.into(),
        }
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    /// POST `{"sentence": ...}` and return the response body as untyped JSON.
    /// No timeout and no retry.
    pub async fn predict(&self, sentence: &str) -> Result<Value, PredictError> {
        info!("[PREDICT] POST {} ({} chars)", self.predict_url, sentence.len());

        let response = self
            .client
            .post(&self.predict_url)
            .header(CONTENT_TYPE, "application/json")
            .json(&PredictRequest { sentence })
            .send()
            .await
            .map_err(|e| {
                error!("[PREDICT] request to {} failed: {}", self.predict_url, e);
                PredictError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("[PREDICT] HTTP error! status: {}", status.as_u16());
            return Err(PredictError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| {
            error!("[PREDICT] response is not valid JSON: {}", e);
            PredictError::InvalidBody(e.to_string())
        })
    }
}

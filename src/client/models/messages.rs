use serde_json::Value;

use crate::client::models::code_snippet::{CopyTicket, SnippetId};
use crate::client::services::prediction_service::PredictError;

#[derive(Debug, Clone)]
pub enum Message {
    // Try-it-out form
    SentenceChanged(String),
    Submit,
    PredictionFinished { generation: u64, outcome: Result<Value, PredictError> },
    // Code blocks
    Copy(SnippetId),
    CopyAckExpired(CopyTicket),
    // Window
    CloseRequested,
}

use log::warn;
use std::time::Duration;

use crate::client::services::clipboard_service::ClipboardWriter;

/// How long the "copied" acknowledgment stays on after a copy.
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetId {
    BaseUrl,
    RequestHeaders,
    RequestBody,
    ExampleResponse,
    Result,
}

/// Handed out by a successful copy; only the ticket matching the latest copy
/// of that snippet may clear its acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket {
    pub snippet: SnippetId,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct CodeSnippet {
    id: SnippetId,
    code: String,
    language: &'static str,
    copied: bool,
    generation: u64,
}

impl CodeSnippet {
    pub fn new(id: SnippetId, code: impl Into<String>, language: &'static str) -> Self {
        Self {
            id,
            code: code.into(),
            language,
            copied: false,
            generation: 0,
        }
    }

    pub fn id(&self) -> SnippetId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Swap the payload. Clears the acknowledgment and invalidates pending tickets.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
        self.copied = false;
        self.generation += 1;
    }

    /// Write the payload to the clipboard and raise the acknowledgment.
    ///
    /// A failed write is logged and otherwise ignored: the flag stays as it
    /// was and no ticket is issued. Repeated copies coalesce, each one
    /// supersedes the previous ticket so the flag drops 2s after the last copy.
    pub fn copy<C: ClipboardWriter + ?Sized>(&mut self, clipboard: &mut C) -> Option<CopyTicket> {
        if let Err(e) = clipboard.write_text(&self.code) {
            warn!("[CLIPBOARD] copy of {:?} snippet failed: {}", self.id, e);
            return None;
        }
        self.copied = true;
        self.generation += 1;
        Some(CopyTicket {
            snippet: self.id,
            generation: self.generation,
        })
    }

    /// Clear the acknowledgment if `ticket` belongs to the latest copy.
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        if ticket.snippet != self.id || ticket.generation != self.generation {
            return false;
        }
        self.copied = false;
        true
    }
}

/// Resolves once the acknowledgment window of `ticket` has elapsed.
pub async fn acknowledgment_elapsed(ticket: CopyTicket) -> CopyTicket {
    tokio::time::sleep(COPY_ACK_DURATION).await;
    ticket
}

use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Write-only access to a clipboard. The app never reads it back.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// OS clipboard through arboard. The handle is opened on first use and kept
/// so that X11/Wayland selections stay owned while the window is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        let clipboard = match self.inner.as_mut() {
            Some(c) => c,
            None => return Err(ClipboardError::Unavailable("no clipboard handle".into())),
        };
        match clipboard.set_text(text.to_owned()) {
            Ok(()) => {
                debug!("[CLIPBOARD] wrote {} bytes", text.len());
                Ok(())
            }
            Err(e) => {
                // drop the handle, a fresh one is tried on the next copy
                self.inner = None;
                Err(ClipboardError::Write(e.to_string()))
            }
        }
    }
}

// src/system/clipboard.rs

use std::fmt;
use thiserror::Error;

/// Clipboard failures, carrying the backend's message.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No clipboard could be opened (no display server, unsupported platform).
    #[error("Clipboard is not available: {0}")]
    Unavailable(String),
    /// The clipboard is open but holds no readable text.
    #[error("Failed to read from clipboard: {0}")]
    Read(String),
    /// The text could not be stored.
    #[error("Failed to write to clipboard: {0}")]
    Write(String),
}

/// Text access to a clipboard.
pub trait ClipboardAccess: fmt::Debug {
    /// Returns the current text content.
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    /// Replaces the content with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, opened on first use.
///
/// The handle is kept for the lifetime of the value: on X11 the copied text is only
/// served while its owner is alive, so dropping it right after a write would lose the
/// command before Gradle even starts.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

impl SystemClipboard {
    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                log::debug!("System clipboard opened");
                clipboard
            }
        };
        Ok(self.inner.insert(clipboard))
    }
}

impl ClipboardAccess for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.handle()?
            .get_text()
            .map_err(|e| ClipboardError::Read(e.to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

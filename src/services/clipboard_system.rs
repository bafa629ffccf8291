use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard, opened on first write.
///
/// Headless runs that never copy never touch the display server.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

fn clipboard_error(err: arboard::Error) -> AppError {
    AppError::ClipboardError(err.to_string())
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn open(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.inner.is_none() {
            self.inner = Some(Clipboard::new().map_err(clipboard_error)?);
            tracing::debug!("opened system clipboard");
        }
        self.inner.as_mut().ok_or_else(|| AppError::ClipboardError("clipboard unavailable".into()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.open()?.set_text(text).map_err(clipboard_error)
    }
}

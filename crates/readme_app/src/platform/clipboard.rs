use anyhow::{Context, Result};

pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, opened on first use and kept open afterwards.
///
/// On Linux the copied text only stays available while the owning clipboard
/// handle is alive, so the handle lives as long as the application.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().context("Failed to access system clipboard")?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")?;
        Ok(())
    }
}

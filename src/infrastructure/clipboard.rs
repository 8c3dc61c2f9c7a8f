use crate::domain::{BankError, BankResult};

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> BankResult<()>;
}

/// The desktop clipboard. A handle is opened per copy so a missing display
/// server only fails the copy, not start-up.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> BankResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| BankError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| BankError::Clipboard(e.to_string()))
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> BankResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_keeps_last_copy() {
        let mut clip = MemoryClipboard::default();
        clip.set_text("GBQ4RT7YZ2").unwrap();
        clip.set_text("GBAAAAAAAA").unwrap();
        assert_eq!(clip.contents.as_deref(), Some("GBAAAAAAAA"));
    }
}

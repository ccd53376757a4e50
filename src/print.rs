//! Printing of submitted registration details

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Destination for the plain-text registration details
#[cfg_attr(test, mockall::automock)]
pub trait DetailsPrinter {
    fn print(&mut self, document: &str) -> Result<(), PrintError>;
}

/// Places the details on the system clipboard
#[derive(Debug, Default)]
pub struct ClipboardPrinter;

impl DetailsPrinter for ClipboardPrinter {
    fn print(&mut self, document: &str) -> Result<(), PrintError> {
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(document)?;
        Ok(())
    }
}

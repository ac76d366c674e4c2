//! Presentation abstraction for the chat panel.
//!
//! [`ChatSurface`] is transport-agnostic: a console, a test recorder, or any UI can implement it.

use crate::error::Result;
use crate::types::ChatMessage;
use async_trait::async_trait;

/// Renders the message log and owns the panel's visibility. Implementations map to a UI.
#[async_trait]
pub trait ChatSurface: Send + Sync {
    /// Renders one newly appended message (user echo or bot reply).
    async fn render(&self, message: &ChatMessage) -> Result<()>;
    /// Shows or hides the "typing" indicator while a bot reply is pending.
    async fn set_typing(&self, _typing: bool) -> Result<()> {
        Ok(())
    }
    /// Closes the panel. Called once per close.
    async fn close(&self) -> Result<()>;
}

/// Removes `**bold**` markers for surfaces that render plain text.
pub fn strip_markup(text: &str) -> String {
    text.replace("**", "")
}

//! RAGFlow Admin History - Chat History Browser
//!
//! Session list and selection for the chat-history modal.

use crate::error::{ConsoleError, Result};
use crate::mock;
use crate::types::ChatSession;

/// Sessions of one chatbot with the session currently displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryBrowser {
    sessions: Vec<ChatSession>,
    selected: Option<String>,
}

impl HistoryBrowser {
    /// The first session starts selected.
    pub fn new(sessions: Vec<ChatSession>) -> Self {
        let selected = sessions.first().map(|s| s.id.clone());
        Self { sessions, selected }
    }

    pub fn seeded() -> Self {
        Self::new(mock::seed_sessions())
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn select(&mut self, id: &str) -> Result<()> {
        if !self.sessions.iter().any(|s| s.id == id) {
            return Err(ConsoleError::SessionNotFound(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn selected(&self) -> Option<&ChatSession> {
        let id = self.selected.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }
}

impl Default for HistoryBrowser {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    #[test]
    fn test_first_session_preselected() {
        let browser = HistoryBrowser::seeded();
        assert_eq!(browser.selected_id(), Some("1"));
        assert_eq!(browser.selected().unwrap().messages.len(), 5);
    }

    #[test]
    fn test_select() {
        let mut browser = HistoryBrowser::seeded();
        browser.select("2").unwrap();
        let session = browser.selected().unwrap();
        assert_eq!(session.messages[0].role, MessageRole::User);
        assert!(browser.is_selected("2"));

        assert!(browser.select("9").unwrap_err().is_not_found());
        assert!(browser.is_selected("2"));
    }

    #[test]
    fn test_empty_history() {
        let browser = HistoryBrowser::new(Vec::new());
        assert!(browser.selected().is_none());
    }
}

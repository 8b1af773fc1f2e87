//! RAGFlow Admin Error - Console Error Types
//!
//! Every console mutation is local and synchronous, so the failure surface is
//! small: rejected form input, lookups of records that are no longer present,
//! the retrieval probe lifecycle and configuration parsing.
//!
//! @version 0.1.0
//! @author RAGFlow Admin Development Team

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Unified error type for console operations.
#[derive(Error, Debug)]
pub enum ConsoleError {
    // Validation errors
    #[error("name must not be empty")]
    EmptyName,

    #[error("test text must not be empty")]
    EmptyQuery,

    #[error("variable index {index} out of range (len {len})")]
    VariableIndex { index: usize, len: usize },

    // Lookup errors
    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("chatbot not found: {0}")]
    ChatbotNotFound(String),

    #[error("chat session not found: {0}")]
    SessionNotFound(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("chunk not found: {0}")]
    ChunkNotFound(String),

    // Retrieval probe errors
    #[error("a retrieval test is already running")]
    ProbePending,

    #[error("retrieval test cancelled")]
    ProbeCancelled,

    // Configuration errors
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Type Aliases
// =============================================================================

/// Result type alias for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;

// =============================================================================
// Error Classification
// =============================================================================

impl ConsoleError {
    /// Returns true if the error was caused by form input the user can fix.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConsoleError::EmptyName | ConsoleError::EmptyQuery | ConsoleError::VariableIndex { .. }
        )
    }

    /// Returns true if the error refers to a record that no longer exists.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConsoleError::DatasetNotFound(_)
                | ConsoleError::ChatbotNotFound(_)
                | ConsoleError::SessionNotFound(_)
                | ConsoleError::FileNotFound(_)
                | ConsoleError::ChunkNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(ConsoleError::EmptyName.is_user_error());
        assert!(ConsoleError::VariableIndex { index: 3, len: 1 }.is_user_error());
        assert!(!ConsoleError::ProbeCancelled.is_user_error());

        assert!(ConsoleError::DatasetNotFound("ds-009".into()).is_not_found());
        assert!(!ConsoleError::ProbePending.is_not_found());
    }

    #[test]
    fn test_display() {
        let err = ConsoleError::VariableIndex { index: 4, len: 2 };
        assert_eq!(err.to_string(), "variable index 4 out of range (len 2)");
        assert_eq!(
            ConsoleError::DatasetNotFound("ds-001".into()).to_string(),
            "dataset not found: ds-001"
        );
    }
}

//! RAGFlow Admin Types - Console Records
//!
//! Display records for datasets, files, chunks, chatbots, chat sessions and
//! the dashboard summary. Every status string from the console is a closed
//! enumeration so the views can match exhaustively.
//!
//! @version 0.1.0
//! @author RAGFlow Admin Development Team

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Status Types
// =============================================================================

/// Indexing state of a dataset or of a single file inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IndexStatus {
    #[default]
    Indexed,
    Processing,
    Failed,
}

impl IndexStatus {
    /// Human readable label shown inside badges.
    pub fn label(&self) -> &'static str {
        match self {
            IndexStatus::Indexed => "Indexed",
            IndexStatus::Processing => "Processing",
            IndexStatus::Failed => "Failed",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            IndexStatus::Indexed => BadgeTone::Indexed,
            IndexStatus::Processing => BadgeTone::Processing,
            IndexStatus::Failed => BadgeTone::Failed,
        }
    }
}

impl fmt::Display for IndexStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexStatus::Indexed => write!(f, "indexed"),
            IndexStatus::Processing => write!(f, "processing"),
            IndexStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Chatbot availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChatbotStatus {
    Active,
    #[default]
    Inactive,
    Error,
}

impl ChatbotStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ChatbotStatus::Active => "Active",
            ChatbotStatus::Inactive => "Inactive",
            ChatbotStatus::Error => "Error",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ChatbotStatus::Active => BadgeTone::Online,
            ChatbotStatus::Inactive => BadgeTone::Disabled,
            ChatbotStatus::Error => BadgeTone::Failed,
        }
    }
}

impl fmt::Display for ChatbotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatbotStatus::Active => write!(f, "active"),
            ChatbotStatus::Inactive => write!(f, "inactive"),
            ChatbotStatus::Error => write!(f, "error"),
        }
    }
}

/// Health of a backing service on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Online,
    Processing,
    Offline,
}

impl ServiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Online => "Online",
            ServiceStatus::Processing => "Processing",
            ServiceStatus::Offline => "Offline",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ServiceStatus::Online => BadgeTone::Online,
            ServiceStatus::Processing => BadgeTone::Processing,
            ServiceStatus::Offline => BadgeTone::Offline,
        }
    }
}

/// Visual variant of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Ready,
    Processing,
    Failed,
    Disabled,
    Indexed,
    Pending,
    Online,
    Offline,
}

/// Colour of the dot drawn inside a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorTone {
    Success,
    Warning,
    Destructive,
    Muted,
}

impl BadgeTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Ready => "ready",
            BadgeTone::Processing => "processing",
            BadgeTone::Failed => "failed",
            BadgeTone::Disabled => "disabled",
            BadgeTone::Indexed => "indexed",
            BadgeTone::Pending => "pending",
            BadgeTone::Online => "online",
            BadgeTone::Offline => "offline",
        }
    }

    pub fn indicator(&self) -> IndicatorTone {
        match self {
            BadgeTone::Ready | BadgeTone::Indexed | BadgeTone::Online => IndicatorTone::Success,
            BadgeTone::Processing | BadgeTone::Pending => IndicatorTone::Warning,
            BadgeTone::Failed | BadgeTone::Offline => IndicatorTone::Destructive,
            BadgeTone::Disabled => IndicatorTone::Muted,
        }
    }

    /// Whether the badge pulses while the underlying work is in flight.
    pub fn animated(&self) -> bool {
        matches!(self, BadgeTone::Processing | BadgeTone::Pending)
    }
}

impl IndicatorTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            IndicatorTone::Success => "dot-success",
            IndicatorTone::Warning => "dot-warning",
            IndicatorTone::Destructive => "dot-destructive",
            IndicatorTone::Muted => "dot-muted",
        }
    }
}

// =============================================================================
// Dataset Types
// =============================================================================

/// A named collection of source files backing retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub domain: String,
    pub files: u32,
    pub size: String,
    pub status: IndexStatus,
    pub last_updated: String,
    pub created_at: String,
    pub chatbots: u32,
    pub tags: Vec<String>,
    #[serde(default)]
    pub chunks: u32,
    #[serde(default)]
    pub total_chunks: u32,
}

impl Dataset {
    /// Share of chunks already embedded, rounded to a whole percent.
    pub fn completion_percent(&self) -> u32 {
        let total = self.total_chunks.max(1) as f64;
        (self.chunks as f64 / total * 100.0).round() as u32
    }

    /// Whether any chatbot currently draws on this dataset.
    pub fn in_use(&self) -> bool {
        self.chatbots > 0
    }
}

/// Values collected by the create-dataset form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetDraft {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// A source file inside a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetFile {
    pub id: String,
    pub name: String,
    pub size: String,
    pub upload_date: String,
    pub enabled: bool,
    pub chunk_count: u32,
    pub parse_method: String,
    pub status: IndexStatus,
}

/// A sub-segment of a file's extracted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub content: String,
    pub enabled: bool,
    pub position: u32,
}

/// A scored passage returned by the retrieval test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalHit {
    pub id: String,
    pub content: String,
    pub score: f32,
    pub source: String,
    pub chunk_id: String,
}

// =============================================================================
// Chatbot Types
// =============================================================================

/// A configured conversational assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chatbot {
    pub id: String,
    pub name: String,
    pub voice_role: String,
    pub language_model: String,
    pub last_chat: String,
    pub language: String,
    pub status: ChatbotStatus,
}

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    Tool,
}

/// One message in a chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    pub audio_available: bool,
    pub source: Option<String>,
    pub response_time: Option<f32>,
}

/// A recorded conversation with a chatbot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub preview: String,
    pub message_count: u32,
    pub last_message_time: String,
    pub messages: Vec<Message>,
}

/// How the chatbot list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChatbotViewMode {
    #[default]
    Card,
    Table,
}

// =============================================================================
// Dashboard Types
// =============================================================================

/// A backing service shown in the system health card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemService {
    pub name: String,
    pub status: ServiceStatus,
    pub latency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Create,
    Update,
    Upload,
    Config,
}

/// Recent activity entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub user: String,
    pub time: String,
    pub kind: ActivityKind,
}

/// Headline figure on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStat {
    pub title: String,
    pub value: String,
    pub description: String,
    pub trend_percent: u32,
    pub trend_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(chunks: u32, total: u32) -> Dataset {
        Dataset {
            id: "ds-100".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            domain: "Custom".to_string(),
            files: 0,
            size: "0 MB".to_string(),
            status: IndexStatus::Processing,
            last_updated: "2024-01-01".to_string(),
            created_at: "2024-01-01".to_string(),
            chatbots: 0,
            tags: vec![],
            chunks,
            total_chunks: total,
        }
    }

    #[test]
    fn test_completion_percent() {
        assert_eq!(dataset(156, 380).completion_percent(), 41);
        assert_eq!(dataset(245, 245).completion_percent(), 100);
        // Zero total falls back to a divisor of one.
        assert_eq!(dataset(0, 0).completion_percent(), 0);
    }

    #[test]
    fn test_badge_indicators() {
        assert_eq!(IndexStatus::Indexed.tone().indicator(), IndicatorTone::Success);
        assert_eq!(IndexStatus::Processing.tone().indicator(), IndicatorTone::Warning);
        assert_eq!(IndexStatus::Failed.tone().indicator(), IndicatorTone::Destructive);
        assert_eq!(BadgeTone::Disabled.indicator(), IndicatorTone::Muted);
        assert_eq!(ChatbotStatus::Inactive.tone(), BadgeTone::Disabled);
        assert!(ServiceStatus::Processing.tone().animated());
        assert!(!ServiceStatus::Online.tone().animated());
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&IndexStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let mode: ChatbotViewMode = serde_json::from_str("\"table\"").unwrap();
        assert_eq!(mode, ChatbotViewMode::Table);
    }
}

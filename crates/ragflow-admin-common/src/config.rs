//! RAGFlow Admin Config - Console Configuration
//!
//! Configuration for the admin console. The host page can embed a JSON
//! document that is merged over these defaults at startup; anything left out
//! keeps its default value.
//!
//! Key Features:
//! - Branding shown in the sidebar header
//! - Simulated retrieval delay
//! - Initial state of the collapsible sidebar sections
//! - Default chatbot list layout and console log level
//!
//! @version 0.1.0
//! @author RAGFlow Admin Development Team

use crate::error::ConsoleError;
use crate::types::ChatbotViewMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound for the simulated retrieval delay.
pub const MAX_RETRIEVAL_DELAY_MS: u64 = 60_000;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Branding Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            title: "RAGFlow".to_string(),
            subtitle: "Admin Dashboard".to_string(),
        }
    }
}

// =============================================================================
// Retrieval Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub delay_ms: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

impl RetrievalConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

// =============================================================================
// Navigation Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub management_open: bool,
    pub dev_tools_open: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            management_open: true,
            dev_tools_open: true,
        }
    }
}

// =============================================================================
// Chatbot Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatbotListConfig {
    pub default_view: ChatbotViewMode,
}

// =============================================================================
// Console Configuration
// =============================================================================

/// Complete console configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub branding: BrandingConfig,
    pub retrieval: RetrievalConfig,
    pub navigation: NavigationConfig,
    pub chatbots: ChatbotListConfig,
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            branding: BrandingConfig::default(),
            retrieval: RetrievalConfig::default(),
            navigation: NavigationConfig::default(),
            chatbots: ChatbotListConfig::default(),
            log_level: "debug".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a JSON document, filling missing fields from the defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: ConsoleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an optional embedded document; blank input yields the defaults.
    pub fn from_embedded(raw: Option<&str>) -> crate::Result<Self> {
        match raw.map(str::trim) {
            Some(json) if !json.is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.retrieval.delay_ms > MAX_RETRIEVAL_DELAY_MS {
            return Err(ConsoleError::InvalidConfig(format!(
                "retrieval.delay_ms must be at most {}, got {}",
                MAX_RETRIEVAL_DELAY_MS, self.retrieval.delay_ms
            )));
        }
        if self.branding.title.trim().is_empty() {
            return Err(ConsoleError::InvalidConfig(
                "branding.title must not be empty".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConsoleError::InvalidConfig(format!(
                "unknown log_level: {}",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Log level as understood by the `log` facade.
    pub fn level(&self) -> log::Level {
        match self.log_level.to_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.branding.title, "RAGFlow");
        assert_eq!(config.retrieval.delay(), Duration::from_millis(1000));
        assert!(config.navigation.management_open);
        assert_eq!(config.chatbots.default_view, ChatbotViewMode::Card);
        assert_eq!(config.level(), log::Level::Debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = ConsoleConfig::from_json(
            r#"{"retrieval": {"delay_ms": 250}, "chatbots": {"default_view": "table"}}"#,
        )
        .unwrap();
        assert_eq!(config.retrieval.delay_ms, 250);
        assert_eq!(config.chatbots.default_view, ChatbotViewMode::Table);
        assert_eq!(config.branding, BrandingConfig::default());
        assert!(config.navigation.dev_tools_open);
    }

    #[test]
    fn test_embedded_blank() {
        assert_eq!(ConsoleConfig::from_embedded(None).unwrap(), ConsoleConfig::default());
        assert_eq!(ConsoleConfig::from_embedded(Some("  ")).unwrap(), ConsoleConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        let err = ConsoleConfig::from_json(r#"{"retrieval": {"delay_ms": 120000}}"#).unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidConfig(_)));

        let err = ConsoleConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidConfig(_)));

        let err = ConsoleConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConsoleError::Json(_)));
    }
}

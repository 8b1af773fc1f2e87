//! RAGFlow Admin Chatbots - Chatbot Roster and Configuration Draft
//!
//! The chatbot list state and the editable draft behind the configure
//! modal. The draft lives only as long as the modal; nothing is written
//! back to the roster.
//!
//! Key Features:
//! - Name search and creation of new chatbots
//! - Role templates that prefill voice and introduction
//! - Ordered variable rows with duplicate detection
//!
//! @version 0.1.0
//! @author RAGFlow Admin Development Team

use crate::error::{ConsoleError, Result};
use crate::mock;
use crate::types::{Chatbot, ChatbotStatus};
use crate::utils::{contains_ignore_case, Choice, SliderRange};
use std::collections::HashSet;

// =============================================================================
// Option Lists
// =============================================================================

pub const LANGUAGES: &[Choice] = &[
    Choice::new("vi", "Tiếng Việt"),
    Choice::new("en", "English"),
    Choice::new("zh", "中文"),
    Choice::new("ja", "日本語"),
];

pub const VOICE_ROLES: &[Choice] = &[
    Choice::new("Nam thanh niên", "Nam thanh niên"),
    Choice::new("Bé trai 6 tuổi", "Bé trai 6 tuổi"),
    Choice::new("Thiếu nữ", "Thiếu nữ"),
    Choice::new("Mẹ chồng miền Bắc", "Mẹ chồng miền Bắc"),
    Choice::new("Lão hòa thượng", "Lão hòa thượng"),
    Choice::new("湾湾小何", "湾湾小何"),
];

pub const MEMORY_TYPES: &[Choice] = &[
    Choice::new("none", "None"),
    Choice::new("short-term", "Short-term"),
    Choice::new("long-term", "Long-term"),
];

pub const LANGUAGE_MODELS: &[Choice] = &[
    Choice::new("chatgpt-nano", "ChatGPT Nano"),
    Choice::new("chatgpt-mini", "ChatGPT Mini"),
    Choice::new("Qwen3 235B Fast", "Qwen3 235B (Fast)"),
    Choice::new("DeepSeek V3.1", "DeepSeek V3.1 (Powerful)"),
    Choice::new("Claude Sonnet", "Claude Sonnet"),
];

pub const RECOGNITION_SPEEDS: &[Choice] = &[
    Choice::new("fast", "Fast"),
    Choice::new("normal", "Normal"),
    Choice::new("patient", "Patient"),
];

pub const SPEECH_SPEEDS: &[Choice] = &[
    Choice::new("slow", "Slow"),
    Choice::new("normal", "Normal"),
    Choice::new("fast", "Fast"),
];

pub const MCP_SERVICES: &[Choice] = &[
    Choice::new("weather", "Weather"),
    Choice::new("joke", "Joke"),
    Choice::new("music", "Music"),
    Choice::new("news", "News"),
    Choice::new("kb", "Knowledge Base"),
];

pub const KNOWLEDGE_BASES: &[Choice] = &[
    Choice::new("phat-hoc", "Phật Học Dataset"),
    Choice::new("van-hoc", "Văn Học Dataset"),
    Choice::new("lich-su", "Lịch Sử Dataset"),
];

pub const VOICE_PITCH: SliderRange = SliderRange::new(0.0, 100.0, 1.0);
pub const TEMPERATURE: SliderRange = SliderRange::new(0.0, 2.0, 0.1);
pub const MAX_TOKENS: SliderRange = SliderRange::new(256.0, 8192.0, 256.0);
pub const TOP_K: SliderRange = SliderRange::new(1.0, 20.0, 1.0);

pub const DEFAULT_INTRODUCTION: &str = "Tôi là {{assistant_name}}, một trợ lý AI chuyên về Phật học và triết lý Phật giáo. Tôi có thể giúp bạn tìm hiểu về giáo lý, thiền định, và các câu hỏi tâm linh.";

// =============================================================================
// Role Templates
// =============================================================================

/// A predefined persona offered as a one-click prefill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTemplate {
    pub name: &'static str,
    pub voice_role: &'static str,
    pub introduction: &'static str,
}

pub const ROLE_TEMPLATES: &[RoleTemplate] = &[
    RoleTemplate {
        name: "Gia sư tiếng Anh",
        voice_role: "Thiếu nữ",
        introduction: "Tôi là {{assistant_name}}, gia sư tiếng Anh thân thiện. Tôi giúp bạn luyện phát âm, từ vựng và hội thoại hằng ngày.",
    },
    RoleTemplate {
        name: "Tu sĩ Phật giáo",
        voice_role: "Lão hòa thượng",
        introduction: DEFAULT_INTRODUCTION,
    },
    RoleTemplate {
        name: "Nhân viên Sale",
        voice_role: "Nam thanh niên",
        introduction: "Tôi là {{assistant_name}}, nhân viên tư vấn bán hàng. Tôi sẵn sàng giới thiệu sản phẩm phù hợp với nhu cầu của bạn.",
    },
    RoleTemplate {
        name: "Nhân viên CSKH",
        voice_role: "Thiếu nữ",
        introduction: "Tôi là {{assistant_name}}, nhân viên chăm sóc khách hàng. Tôi hỗ trợ giải đáp thắc mắc và xử lý yêu cầu của bạn.",
    },
    RoleTemplate {
        name: "Trợ lý cá nhân",
        voice_role: "Nam thanh niên",
        introduction: "Tôi là {{assistant_name}}, trợ lý cá nhân của bạn. Tôi giúp sắp xếp lịch trình, ghi chú và nhắc việc.",
    },
];

pub fn find_template(name: &str) -> Option<&'static RoleTemplate> {
    ROLE_TEMPLATES.iter().find(|t| t.name == name)
}

// =============================================================================
// Roster
// =============================================================================

/// Ordered chatbot list shown on the chatbots page.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatbotRoster {
    chatbots: Vec<Chatbot>,
}

impl ChatbotRoster {
    pub fn new(chatbots: Vec<Chatbot>) -> Self {
        Self { chatbots }
    }

    pub fn seeded() -> Self {
        Self::new(mock::seed_chatbots())
    }

    pub fn all(&self) -> &[Chatbot] {
        &self.chatbots
    }

    pub fn get(&self, id: &str) -> Option<&Chatbot> {
        self.chatbots.iter().find(|c| c.id == id)
    }

    /// Like [`ChatbotRoster::get`], reporting a missing id as an error.
    pub fn lookup(&self, id: &str) -> Result<&Chatbot> {
        self.get(id)
            .ok_or_else(|| ConsoleError::ChatbotNotFound(id.to_string()))
    }

    /// Chatbots whose name contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> Vec<Chatbot> {
        self.chatbots
            .iter()
            .filter(|c| contains_ignore_case(&c.name, query))
            .cloned()
            .collect()
    }

    /// Append a new inactive chatbot with default voice and model.
    pub fn create(&mut self, name: &str) -> Result<Chatbot> {
        let name = name.trim();
        if name.is_empty() {
            log::warn!("rejected chatbot without a name");
            return Err(ConsoleError::EmptyName);
        }

        let next = self
            .chatbots
            .iter()
            .filter_map(|c| c.id.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let chatbot = Chatbot {
            id: next.to_string(),
            name: name.to_string(),
            voice_role: VOICE_ROLES[0].value.to_string(),
            language_model: "chatgpt-mini".to_string(),
            last_chat: "-".to_string(),
            language: "Vietnamese".to_string(),
            status: ChatbotStatus::Inactive,
        };

        log::info!("created chatbot {} ({})", chatbot.id, chatbot.name);
        self.chatbots.push(chatbot.clone());
        Ok(chatbot)
    }
}

impl Default for ChatbotRoster {
    fn default() -> Self {
        Self::seeded()
    }
}

// =============================================================================
// Configuration Draft
// =============================================================================

/// One row of the variable table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatVariable {
    pub name: String,
    pub optional: bool,
}

/// Editable copy of a chatbot's settings, discarded when the modal closes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatbotDraft {
    pub assistant_name: String,
    pub selected_templates: Vec<String>,
    pub language: String,
    pub voice_role: String,
    pub introduction: String,
    pub memory_type: String,
    pub language_model: String,
    pub recognition_speed: String,
    pub speech_speed: String,
    pub voice_pitch: u32,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_k: u32,
    pub mcp_service: Option<String>,
    pub knowledge_bases: Vec<String>,
    pub variables: Vec<ChatVariable>,
}

impl ChatbotDraft {
    pub fn from_chatbot(chatbot: &Chatbot) -> Self {
        Self {
            assistant_name: chatbot.name.clone(),
            selected_templates: vec!["Tu sĩ Phật giáo".to_string()],
            language: "vi".to_string(),
            voice_role: chatbot.voice_role.clone(),
            introduction: DEFAULT_INTRODUCTION.to_string(),
            memory_type: "short-term".to_string(),
            language_model: chatbot.language_model.clone(),
            recognition_speed: "normal".to_string(),
            speech_speed: "normal".to_string(),
            voice_pitch: 50,
            temperature: 0.7,
            max_tokens: 2048,
            top_k: 5,
            mcp_service: None,
            knowledge_bases: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Restore every field to the values derived from `chatbot`.
    pub fn reset(&mut self, chatbot: &Chatbot) {
        *self = Self::from_chatbot(chatbot);
    }

    pub fn is_template_selected(&self, name: &str) -> bool {
        self.selected_templates.iter().any(|t| t == name)
    }

    /// Select `template` and copy its voice and introduction into the draft.
    pub fn apply_template(&mut self, template: &RoleTemplate) {
        if !self.is_template_selected(template.name) {
            self.selected_templates.push(template.name.to_string());
        }
        self.voice_role = template.voice_role.to_string();
        self.introduction = template.introduction.to_string();
    }

    /// Flip the selection of a template. Newly selected templates prefill
    /// the draft.
    pub fn toggle_template(&mut self, name: &str) {
        if self.is_template_selected(name) {
            self.selected_templates.retain(|t| t != name);
        } else if let Some(template) = find_template(name) {
            self.apply_template(template);
        } else {
            self.selected_templates.push(name.to_string());
        }
    }

    pub fn add_variable(&mut self) {
        self.variables.push(ChatVariable::default());
    }

    pub fn remove_variable(&mut self, index: usize) -> Result<ChatVariable> {
        self.check_index(index)?;
        Ok(self.variables.remove(index))
    }

    pub fn update_variable(&mut self, index: usize, name: &str, optional: bool) -> Result<()> {
        self.check_index(index)?;
        self.variables[index] = ChatVariable {
            name: name.to_string(),
            optional,
        };
        Ok(())
    }

    /// Non-empty variable names used by more than one row, in first-seen order.
    pub fn duplicate_variable_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for variable in &self.variables {
            let name = variable.name.trim();
            if name.is_empty() {
                continue;
            }
            if !seen.insert(name) && !duplicates.iter().any(|d| d == name) {
                duplicates.push(name.to_string());
            }
        }
        duplicates
    }

    pub fn set_voice_pitch(&mut self, value: f64) {
        self.voice_pitch = VOICE_PITCH.snap(value) as u32;
    }

    pub fn set_temperature(&mut self, value: f64) {
        self.temperature = TEMPERATURE.snap(value);
    }

    pub fn set_max_tokens(&mut self, value: f64) {
        self.max_tokens = MAX_TOKENS.snap(value) as u32;
    }

    pub fn set_top_k(&mut self, value: f64) {
        self.top_k = TOP_K.snap(value) as u32;
    }

    pub fn toggle_knowledge_base(&mut self, value: &str) {
        if self.knowledge_bases.iter().any(|k| k == value) {
            self.knowledge_bases.retain(|k| k != value);
        } else {
            self.knowledge_bases.push(value.to_string());
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.variables.len() {
            return Err(ConsoleError::VariableIndex {
                index,
                len: self.variables.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ChatbotDraft {
        ChatbotDraft::from_chatbot(&mock::seed_chatbots()[0])
    }

    #[test]
    fn test_roster_filter() {
        let roster = ChatbotRoster::seeded();
        assert_eq!(roster.filter("gia sư").len(), 1);
        assert_eq!(roster.filter("").len(), 2);
        assert!(roster.filter("robot").is_empty());
    }

    #[test]
    fn test_roster_create() {
        let mut roster = ChatbotRoster::seeded();
        let bot = roster.create(" Trợ lý Y khoa ").unwrap();
        assert_eq!(bot.id, "3");
        assert_eq!(bot.name, "Trợ lý Y khoa");
        assert_eq!(bot.status, ChatbotStatus::Inactive);
        assert_eq!(bot.last_chat, "-");
        assert_eq!(roster.all().last(), Some(&bot));

        assert!(roster.create("  ").unwrap_err().is_user_error());
        assert_eq!(roster.lookup("3").unwrap().name, "Trợ lý Y khoa");
        assert!(roster.lookup("42").unwrap_err().is_not_found());
    }

    #[test]
    fn test_add_and_remove_variables() {
        let mut draft = draft();
        draft.add_variable();
        draft.add_variable();
        draft.add_variable();
        assert_eq!(draft.variables.len(), 3);
        assert_eq!(draft.variables[2], ChatVariable { name: String::new(), optional: false });

        draft.update_variable(0, "a", false).unwrap();
        draft.update_variable(1, "b", true).unwrap();
        draft.update_variable(2, "c", false).unwrap();

        let removed = draft.remove_variable(1).unwrap();
        assert_eq!(removed.name, "b");
        let names: Vec<_> = draft.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_variable_index_out_of_range() {
        let mut draft = draft();
        draft.add_variable();
        let err = draft.remove_variable(4).unwrap_err();
        assert!(matches!(err, ConsoleError::VariableIndex { index: 4, len: 1 }));
        assert!(draft.update_variable(1, "x", true).is_err());
        assert_eq!(draft.variables.len(), 1);
    }

    #[test]
    fn test_duplicate_variable_names_reported() {
        let mut draft = draft();
        for name in ["topic", "level", "topic", "", "", "topic"] {
            draft.add_variable();
            let last = draft.variables.len() - 1;
            draft.update_variable(last, name, false).unwrap();
        }
        assert_eq!(draft.duplicate_variable_names(), vec!["topic".to_string()]);
        assert_eq!(draft.variables.len(), 6);
    }

    #[test]
    fn test_apply_template() {
        let mut draft = draft();
        let template = find_template("Nhân viên Sale").unwrap();
        draft.apply_template(template);
        assert_eq!(draft.voice_role, "Nam thanh niên");
        assert!(draft.is_template_selected("Nhân viên Sale"));

        draft.introduction.push_str(" Edited.");
        assert!(!find_template("Nhân viên Sale").unwrap().introduction.ends_with("Edited."));

        draft.toggle_template("Nhân viên Sale");
        assert!(!draft.is_template_selected("Nhân viên Sale"));
    }

    #[test]
    fn test_reset_restores_chatbot_values() {
        let bot = &mock::seed_chatbots()[0];
        let mut draft = ChatbotDraft::from_chatbot(bot);
        draft.assistant_name = "Other".to_string();
        draft.add_variable();
        draft.set_voice_pitch(180.0);
        assert_eq!(draft.voice_pitch, 100);

        draft.reset(bot);
        assert_eq!(draft, ChatbotDraft::from_chatbot(bot));
    }

    #[test]
    fn test_sliders_snap() {
        let mut draft = draft();
        draft.set_temperature(1.26);
        assert!((draft.temperature - 1.3).abs() < 1e-9);
        draft.set_max_tokens(1000.0);
        assert_eq!(draft.max_tokens, 1024);
        draft.set_top_k(0.0);
        assert_eq!(draft.top_k, 1);
    }
}

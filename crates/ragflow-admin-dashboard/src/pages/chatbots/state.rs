//! Chatbot page state using Leptos signals and context

use leptos::*;
use ragflow_admin_common::chatbots::ChatbotRoster;
use ragflow_admin_common::types::{Chatbot, ChatbotViewMode};
use super::super::shared::Notice;

/// Modal shown over the chatbot list
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ChatbotModal {
    #[default]
    None,
    Create,
    Configure(String),
    History(String),
}

/// State shared by the chatbot list and its modals
#[derive(Clone, Copy)]
pub struct ChatbotContext {
    pub roster: RwSignal<ChatbotRoster>,
    pub search: RwSignal<String>,
    pub view_mode: RwSignal<ChatbotViewMode>,
    pub active_modal: RwSignal<ChatbotModal>,
    pub notice: Notice,
}

impl ChatbotContext {
    pub fn new(view_mode: ChatbotViewMode) -> Self {
        Self {
            roster: create_rw_signal(ChatbotRoster::seeded()),
            search: create_rw_signal(String::new()),
            view_mode: create_rw_signal(view_mode),
            active_modal: create_rw_signal(ChatbotModal::None),
            notice: create_rw_signal(None),
        }
    }

    pub fn filtered(&self) -> Vec<Chatbot> {
        let query = self.search.get();
        self.roster.with(|r| r.filter(&query))
    }

    /// Chatbot referenced by an open modal, if it still exists.
    pub fn modal_chatbot(&self, id: &str) -> Option<Chatbot> {
        match self.roster.with(|r| r.lookup(id).cloned()) {
            Ok(bot) => Some(bot),
            Err(e) => {
                log::warn!("cannot open modal: {}", e);
                None
            }
        }
    }

    pub fn close_modal(&self) {
        self.active_modal.set(ChatbotModal::None);
    }
}

/// Provide chatbot context to the page's components
pub fn provide_chatbot_context(view_mode: ChatbotViewMode) -> ChatbotContext {
    let ctx = ChatbotContext::new(view_mode);
    provide_context(ctx);
    ctx
}

/// Use chatbot context
pub fn use_chatbot_context() -> ChatbotContext {
    expect_context::<ChatbotContext>()
}

//! Chatbots page: roster, creation, configuration and chat history

mod configure;
mod create;
mod history;
mod list;
pub mod state;

pub use configure::ConfigureChatbotModal;
pub use create::CreateChatbotModal;
pub use history::ChatHistoryModal;
pub use list::ChatbotList;
pub use state::{provide_chatbot_context, use_chatbot_context, ChatbotContext, ChatbotModal};

use leptos::*;
use crate::state::use_app_state;
use super::shared::NoticeBanner;

/// Chatbots page with its modals
#[component]
pub fn ChatbotsPage() -> impl IntoView {
    let view_mode = use_app_state().config().chatbots.default_view;
    let ctx = provide_chatbot_context(view_mode);

    view! {
        <div class="chatbots-page">
            <NoticeBanner notice=ctx.notice />
            <ChatbotList />
            <CreateChatbotModal />
            <ConfigureChatbotModal />
            <ChatHistoryModal />
        </div>
    }
}

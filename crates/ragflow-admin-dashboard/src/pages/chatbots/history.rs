//! Chat history modal component

use leptos::*;
use ragflow_admin_common::history::HistoryBrowser;
use ragflow_admin_common::types::{Message, MessageRole};
use super::state::{use_chatbot_context, ChatbotModal};

/// Session list and transcript of the chatbot whose history is open
#[component]
pub fn ChatHistoryModal() -> impl IntoView {
    let ctx = use_chatbot_context();

    let chatbot = create_memo(move |_| match ctx.active_modal.get() {
        ChatbotModal::History(id) => ctx.modal_chatbot(&id),
        _ => None,
    });

    view! {
        {move || chatbot.get().map(|bot| view! { <HistoryDialog name=bot.name /> })}
    }
}

#[component]
fn HistoryDialog(name: String) -> impl IntoView {
    let ctx = use_chatbot_context();
    let browser = create_rw_signal(HistoryBrowser::seeded());
    let close_modal = move |_| ctx.close_modal();

    let select = move |id: String| {
        if let Some(Err(e)) = browser.try_update(|b| b.select(&id)) {
            log::warn!("select session failed: {}", e);
        }
    };

    view! {
        <div class="modal-overlay" on:click=close_modal>
            <div class="modal-content modal-wide history-modal" on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h2>{format!("Lịch sử trò chuyện - {}", name)}</h2>
                    <button class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <div class="modal-body history-layout">
                    <div class="session-list">
                        {move || browser.with(|b| b.sessions().to_vec()).into_iter().map(|session| {
                            let id = session.id.clone();
                            let selected_id = session.id.clone();
                            view! {
                                <button
                                    class=move || if browser.with(|b| b.is_selected(&selected_id)) { "session-item active" } else { "session-item" }
                                    on:click=move |_| select(id.clone())
                                >
                                    <div class="session-preview">{session.preview}</div>
                                    <div class="session-meta">
                                        {format!("{} tin nhắn • {}", session.message_count, session.last_message_time)}
                                    </div>
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <div class="transcript">
                        {move || browser.with(|b| b.selected().cloned()).map(|session| view! {
                            <div class="transcript-header">
                                <h3>"Chi tiết cuộc hội thoại"</h3>
                                <span class="muted">{format!("{} • Device ID: #12345", session.last_message_time)}</span>
                            </div>
                            <div class="message-list">
                                {session.messages.into_iter().map(|m| view! { <MessageBubble message=m /> }).collect_view()}
                            </div>
                            <div class="form-actions">
                                <button class="btn btn-secondary btn-sm">"Export PDF"</button>
                                <button class="btn btn-secondary btn-sm">"Export Markdown"</button>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One transcript entry, styled by author
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let (class, author) = match message.role {
        MessageRole::User => ("message-bubble user", "User"),
        MessageRole::Assistant => ("message-bubble assistant", "Assistant"),
        MessageRole::Tool => ("message-bubble tool", "Tool"),
    };

    view! {
        <div class=class>
            <div class="bubble-header">
                <span class="bubble-author">{author}</span>
                <span class="muted">{message.timestamp}</span>
                {message.audio_available.then(|| view! { <span class="bubble-audio">"🔊"</span> })}
            </div>
            <p class="bubble-content">{message.content}</p>
            {(message.source.is_some() || message.response_time.is_some()).then(|| view! {
                <div class="bubble-meta">
                    {message.source.map(|s| format!("Nguồn: {}", s))}
                    {message.response_time.map(|t| format!(" • {:.1}s", t))}
                </div>
            })}
        </div>
    }
}

//! Chatbot list in card or table layout

use leptos::*;
use ragflow_admin_common::chatbots::LANGUAGE_MODELS;
use ragflow_admin_common::types::{Chatbot, ChatbotViewMode};
use ragflow_admin_common::utils::choice_label;
use super::super::shared::StatusBadge;
use super::state::{use_chatbot_context, ChatbotModal};

/// Toolbar plus the chatbot cards or table
#[component]
pub fn ChatbotList() -> impl IntoView {
    let ctx = use_chatbot_context();
    let filtered = create_memo(move |_| ctx.filtered());

    let mode_button = move |mode: ChatbotViewMode, icon: &'static str| view! {
        <button
            class=move || if ctx.view_mode.get() == mode { "btn btn-primary btn-icon" } else { "btn btn-secondary btn-icon" }
            on:click=move |_| ctx.view_mode.set(mode)
        >{icon}</button>
    };

    view! {
        <div class="section-header page-header">
            <div>
                <h2>"Chatbots"</h2>
                <p class="page-subtitle">"Quản lý và cấu hình chatbot AI của bạn"</p>
            </div>
            <button class="btn btn-primary" on:click=move |_| ctx.active_modal.set(ChatbotModal::Create)>
                "+ Tạo Chatbot Mới"
            </button>
        </div>

        <div class="toolbar">
            <input
                type="text"
                class="search-input"
                placeholder="Tìm kiếm chatbot..."
                prop:value=move || ctx.search.get()
                on:input=move |e| ctx.search.set(event_target_value(&e))
            />
            <div class="view-switch">
                {mode_button(ChatbotViewMode::Card, "▦")}
                {mode_button(ChatbotViewMode::Table, "☰")}
            </div>
        </div>

        {move || {
            let chatbots = filtered.get();
            if chatbots.is_empty() {
                return view! {
                    <div class="empty-state"><p>"Không tìm thấy chatbot nào"</p></div>
                }.into_view();
            }
            match ctx.view_mode.get() {
                ChatbotViewMode::Card => view! {
                    <div class="card-grid">
                        {chatbots.into_iter().map(|bot| view! { <ChatbotCard chatbot=bot /> }).collect_view()}
                    </div>
                }.into_view(),
                ChatbotViewMode::Table => view! { <ChatbotTable chatbots=chatbots /> }.into_view(),
            }
        }}
    }
}

#[component]
fn ChatbotCard(chatbot: Chatbot) -> impl IntoView {
    let ctx = use_chatbot_context();
    let for_configure = chatbot.id.clone();
    let for_history = chatbot.id.clone();

    view! {
        <div class="card chatbot-card">
            <div class="card-header">
                <div>
                    <span class="card-title">{chatbot.name.clone()}</span>
                    <div class="muted">{format!("Voice: {}", chatbot.voice_role)}</div>
                    <div class="muted">{format!("Model: {}", choice_label(LANGUAGE_MODELS, &chatbot.language_model))}</div>
                </div>
                <StatusBadge tone=chatbot.status.tone() label=chatbot.status.label() />
            </div>
            <div class="card-body">
                <div class="info-row">
                    <span class="info-label">"Trò chuyện gần nhất:"</span>
                    <span class="info-value">{chatbot.last_chat.clone()}</span>
                </div>
                <div class="button-grid">
                    <button
                        class="btn btn-secondary btn-sm"
                        on:click=move |_| ctx.active_modal.set(ChatbotModal::Configure(for_configure.clone()))
                    >"⚙ Cấu hình"</button>
                    <button
                        class="btn btn-secondary btn-sm"
                        on:click=move |_| ctx.active_modal.set(ChatbotModal::History(for_history.clone()))
                    >"🕘 Lịch sử"</button>
                    <button class="btn btn-secondary btn-sm" disabled=true>"📻 Thiết bị"</button>
                    <button class="btn btn-secondary btn-sm" disabled=true>"👥 Nhận dạng"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ChatbotTable(chatbots: Vec<Chatbot>) -> impl IntoView {
    let ctx = use_chatbot_context();

    view! {
        <div class="card">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Tên"</th>
                        <th>"Voice Role"</th>
                        <th>"Language Model"</th>
                        <th>"Ngôn ngữ"</th>
                        <th>"Trò chuyện gần nhất"</th>
                        <th>"Trạng thái"</th>
                        <th class="text-right">"Thao tác"</th>
                    </tr>
                </thead>
                <tbody>
                    {chatbots.into_iter().map(|bot| {
                        let for_configure = bot.id.clone();
                        let for_history = bot.id.clone();
                        view! {
                            <tr>
                                <td class="dataset-name">{bot.name}</td>
                                <td>{bot.voice_role}</td>
                                <td>{choice_label(LANGUAGE_MODELS, &bot.language_model).to_string()}</td>
                                <td>{bot.language}</td>
                                <td>{bot.last_chat}</td>
                                <td><StatusBadge tone=bot.status.tone() label=bot.status.label() /></td>
                                <td class="text-right">
                                    <button
                                        class="btn-icon"
                                        on:click=move |_| ctx.active_modal.set(ChatbotModal::Configure(for_configure.clone()))
                                    >"⚙"</button>
                                    <button
                                        class="btn-icon"
                                        on:click=move |_| ctx.active_modal.set(ChatbotModal::History(for_history.clone()))
                                    >"🕘"</button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

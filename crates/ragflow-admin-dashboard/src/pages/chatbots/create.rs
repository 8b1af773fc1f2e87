//! Create chatbot modal component

use leptos::*;
use super::super::shared::flash;
use super::state::{use_chatbot_context, ChatbotModal};

/// Modal asking for the new chatbot's name
#[component]
pub fn CreateChatbotModal() -> impl IntoView {
    let ctx = use_chatbot_context();
    let name = create_rw_signal(String::new());

    let close_modal = move |_| {
        ctx.close_modal();
        name.set(String::new());
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let value = name.get_untracked();
        match ctx.roster.try_update(|r| r.create(&value)) {
            Some(Ok(bot)) => {
                flash(ctx.notice, format!("Chatbot \"{}\" đã được tạo.", bot.name), true);
                ctx.close_modal();
                name.set(String::new());
            }
            Some(Err(e)) => {
                log::warn!("create chatbot rejected: {}", e);
                flash(ctx.notice, e.to_string(), false);
            }
            None => {}
        }
    };

    view! {
        <Show when=move || ctx.active_modal.get() == ChatbotModal::Create>
            <div class="modal-overlay" on:click=close_modal>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Tạo Chatbot Mới"</h2>
                        <button class="modal-close" on:click=close_modal>"×"</button>
                    </div>
                    <form class="modal-body" on:submit=submit>
                        <div class="form-group">
                            <label for="chatbot-name">"Tên Chatbot"</label>
                            <input
                                id="chatbot-name"
                                type="text"
                                placeholder="Nhập tên chatbot..."
                                prop:value=move || name.get()
                                on:input=move |e| name.set(event_target_value(&e))
                            />
                        </div>
                        <div class="form-actions">
                            <button type="button" class="btn btn-secondary" on:click=close_modal>"Hủy"</button>
                            <button type="submit" class="btn btn-primary" disabled=move || name.get().trim().is_empty()>
                                "Tạo Chatbot"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

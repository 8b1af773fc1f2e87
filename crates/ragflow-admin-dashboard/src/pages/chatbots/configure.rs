//! Configure chatbot modal component
//!
//! Edits a [`ChatbotDraft`] that lives only while the modal is open.
//! Saving reports success but writes nothing back to the roster.

use leptos::*;
use ragflow_admin_common::chatbots::{
    ChatbotDraft, KNOWLEDGE_BASES, LANGUAGES, LANGUAGE_MODELS, MAX_TOKENS, MCP_SERVICES, MEMORY_TYPES,
    RECOGNITION_SPEEDS, ROLE_TEMPLATES, SPEECH_SPEEDS, TEMPERATURE, TOP_K, VOICE_PITCH, VOICE_ROLES,
};
use ragflow_admin_common::types::Chatbot;
use super::super::shared::{flash, SelectField, SliderField, TabBar};
use super::state::{use_chatbot_context, ChatbotModal};

const TAB_GENERAL: &str = "general";
const TAB_ADVANCED: &str = "advanced";

/// Mounts the configuration dialog for the chatbot being configured
#[component]
pub fn ConfigureChatbotModal() -> impl IntoView {
    let ctx = use_chatbot_context();

    let chatbot = create_memo(move |_| match ctx.active_modal.get() {
        ChatbotModal::Configure(id) => ctx.modal_chatbot(&id),
        _ => None,
    });

    view! {
        {move || chatbot.get().map(|bot| view! { <ConfigureDialog chatbot=bot /> })}
    }
}

#[component]
fn ConfigureDialog(chatbot: Chatbot) -> impl IntoView {
    let ctx = use_chatbot_context();
    let draft = create_rw_signal(ChatbotDraft::from_chatbot(&chatbot));
    let tab = create_rw_signal(TAB_GENERAL.to_string());
    let original = store_value(chatbot);

    let close_modal = move |_| ctx.close_modal();

    let reset = move |_| {
        original.with_value(|bot| draft.update(|d| d.reset(bot)));
        log::debug!("configuration draft reset");
    };

    let save = move |_| {
        let name = draft.with_untracked(|d| d.assistant_name.clone());
        log::info!("configuration saved for {}", name);
        flash(ctx.notice, format!("Đã lưu cấu hình cho \"{}\".", name), true);
        ctx.close_modal();
    };

    let text = move |f: fn(&ChatbotDraft) -> String| Signal::derive(move || draft.with(f));
    let number = move |f: fn(&ChatbotDraft) -> f64| Signal::derive(move || draft.with(f));

    view! {
        <div class="modal-overlay" on:click=close_modal>
            <div class="modal-content modal-wide" on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h2>{move || original.with_value(|bot| format!("Cấu hình Chatbot: {}", bot.name))}</h2>
                    <button class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <p class="modal-description">"Tùy chỉnh vai trò, giọng nói và các thiết lập nâng cao cho chatbot"</p>

                <TabBar tabs=vec![(TAB_GENERAL, "General Settings"), (TAB_ADVANCED, "Advanced Settings")] active=tab />

                <div class="modal-body">
                    <Show when=move || tab.get() == TAB_GENERAL>
                        <div class="form-group">
                            <label>"Role Template"</label>
                            <div class="tag-list">
                                {ROLE_TEMPLATES.iter().map(|template| view! {
                                    <button
                                        type="button"
                                        class=move || if draft.with(|d| d.is_template_selected(template.name)) { "tag selectable active" } else { "tag selectable" }
                                        on:click=move |_| draft.update(|d| d.toggle_template(template.name))
                                    >{template.name}</button>
                                }).collect_view()}
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="assistant-name">"Assistant Name"</label>
                            <input
                                id="assistant-name"
                                type="text"
                                placeholder="Nhập tên trợ lý..."
                                prop:value=move || draft.with(|d| d.assistant_name.clone())
                                on:input=move |e| draft.update(|d| d.assistant_name = event_target_value(&e))
                            />
                        </div>
                        <SelectField
                            label="Communication Language"
                            choices=LANGUAGES
                            value=text(|d| d.language.clone())
                            on_change=move |v: String| draft.update(|d| d.language = v)
                        />
                        <SelectField
                            label="Voice Role"
                            choices=VOICE_ROLES
                            value=text(|d| d.voice_role.clone())
                            on_change=move |v: String| draft.update(|d| d.voice_role = v)
                        />
                        <div class="form-group">
                            <label for="role-intro">"Role Introduction"</label>
                            <textarea
                                id="role-intro"
                                rows="4"
                                placeholder="I'm {{assistant_name}}, ..."
                                prop:value=move || draft.with(|d| d.introduction.clone())
                                on:input=move |e| draft.update(|d| d.introduction = event_target_value(&e))
                            ></textarea>
                        </div>
                        <SelectField
                            label="Memory Type"
                            choices=MEMORY_TYPES
                            value=text(|d| d.memory_type.clone())
                            on_change=move |v: String| draft.update(|d| d.memory_type = v)
                        />
                        <SelectField
                            label="Language Model"
                            choices=LANGUAGE_MODELS
                            value=text(|d| d.language_model.clone())
                            on_change=move |v: String| draft.update(|d| d.language_model = v)
                        />
                        <SelectField
                            label="Voice Recognition Speed"
                            choices=RECOGNITION_SPEEDS
                            value=text(|d| d.recognition_speed.clone())
                            on_change=move |v: String| draft.update(|d| d.recognition_speed = v)
                        />
                        <SelectField
                            label="Character Speech Speed"
                            choices=SPEECH_SPEEDS
                            value=text(|d| d.speech_speed.clone())
                            on_change=move |v: String| draft.update(|d| d.speech_speed = v)
                        />
                        <SliderField
                            label="Voice Pitch"
                            range=VOICE_PITCH
                            value=number(|d| d.voice_pitch as f64)
                            on_change=move |v: f64| draft.update(|d| d.set_voice_pitch(v))
                        />
                    </Show>

                    <Show when=move || tab.get() == TAB_ADVANCED>
                        <SliderField
                            label="Temperature"
                            range=TEMPERATURE
                            value=number(|d| d.temperature)
                            on_change=move |v: f64| draft.update(|d| d.set_temperature(v))
                        />
                        <SliderField
                            label="Max Tokens"
                            range=MAX_TOKENS
                            value=number(|d| d.max_tokens as f64)
                            on_change=move |v: f64| draft.update(|d| d.set_max_tokens(v))
                        />
                        <SliderField
                            label="Top K"
                            range=TOP_K
                            value=number(|d| d.top_k as f64)
                            on_change=move |v: f64| draft.update(|d| d.set_top_k(v))
                        />
                        <div class="form-group">
                            <label for="services">"Official Services"</label>
                            <select
                                id="services"
                                on:change=move |e| {
                                    let value = event_target_value(&e);
                                    draft.update(|d| d.mcp_service = (!value.is_empty()).then_some(value));
                                }
                            >
                                <option value="">"Select services..."</option>
                                {MCP_SERVICES.iter().map(|c| view! {
                                    <option
                                        value=c.value
                                        selected=move || draft.with(|d| d.mcp_service.as_deref() == Some(c.value))
                                    >{c.label}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Knowledge Base"</label>
                            <div class="tag-list">
                                {KNOWLEDGE_BASES.iter().map(|c| view! {
                                    <button
                                        type="button"
                                        class=move || if draft.with(|d| d.knowledge_bases.iter().any(|k| k == c.value)) { "tag selectable active" } else { "tag selectable" }
                                        on:click=move |_| draft.update(|d| d.toggle_knowledge_base(c.value))
                                    >{c.label}</button>
                                }).collect_view()}
                            </div>
                        </div>
                        <VariableEditor draft=draft />
                    </Show>
                </div>

                <div class="form-actions">
                    <button class="btn btn-secondary" on:click=close_modal>"Hủy"</button>
                    <button class="btn btn-secondary" on:click=reset>"Reset"</button>
                    <button class="btn btn-primary" on:click=save>"Lưu thay đổi"</button>
                </div>
            </div>
        </div>
    }
}

/// Ordered variable rows with add, edit and remove
#[component]
fn VariableEditor(draft: RwSignal<ChatbotDraft>) -> impl IntoView {
    let remove = move |index: usize| {
        if let Err(e) = draft.try_update(|d| d.remove_variable(index)).transpose() {
            log::warn!("remove variable failed: {}", e);
        }
    };

    let rename = move |index: usize, name: String| {
        draft.update(|d| {
            let optional = d.variables.get(index).map(|v| v.optional).unwrap_or(false);
            if let Err(e) = d.update_variable(index, &name, optional) {
                log::warn!("update variable failed: {}", e);
            }
        });
    };

    let set_optional = move |index: usize, optional: bool| {
        draft.update(|d| {
            let name = d.variables.get(index).map(|v| v.name.clone()).unwrap_or_default();
            if let Err(e) = d.update_variable(index, &name, optional) {
                log::warn!("update variable failed: {}", e);
            }
        });
    };

    view! {
        <div class="form-group variable-editor">
            <div class="section-header">
                <label>"Variables"</label>
                <button type="button" class="btn btn-secondary btn-sm" on:click=move |_| draft.update(|d| d.add_variable())>
                    "+ Add"
                </button>
            </div>

            {move || {
                let duplicates = draft.with(|d| d.duplicate_variable_names());
                (!duplicates.is_empty()).then(|| view! {
                    <div class="message warning">{format!("Tên biến bị trùng: {}", duplicates.join(", "))}</div>
                })
            }}

            {move || draft.with(|d| d.variables.clone()).into_iter().enumerate().map(|(index, variable)| view! {
                <div class="variable-row">
                    <input
                        type="text"
                        placeholder="Variable name"
                        prop:value=variable.name
                        on:change=move |e| rename(index, event_target_value(&e))
                    />
                    <label class="toggle-label">
                        <input
                            type="checkbox"
                            prop:checked=variable.optional
                            on:change=move |e| set_optional(index, event_target_checked(&e))
                        />
                        <span>"Optional"</span>
                    </label>
                    <button type="button" class="btn-icon danger" on:click=move |_| remove(index)>"🗑"</button>
                </div>
            }).collect_view()}
        </div>
    }
}

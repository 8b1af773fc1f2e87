//! Create dataset modal component

use leptos::*;
use ragflow_admin_common::datasets::TagEditor;
use ragflow_admin_common::types::DatasetDraft;
use super::super::shared::flash;
use super::state::use_dataset_context;

/// Modal form creating a new dataset at the head of the list
#[component]
pub fn CreateDatasetModal() -> impl IntoView {
    let ctx = use_dataset_context();

    let name = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let tags = create_rw_signal(TagEditor::new());
    let new_tag = create_rw_signal(String::new());

    let reset_form = move || {
        name.set(String::new());
        description.set(String::new());
        tags.set(TagEditor::new());
        new_tag.set(String::new());
    };

    let close_modal = move |_| {
        ctx.show_create.set(false);
        reset_form();
    };

    let add_tag = move || {
        let tag = new_tag.get_untracked();
        if tags.try_update(|t| t.add(&tag)).unwrap_or(false) {
            new_tag.set(String::new());
        }
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = DatasetDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            tags: tags.get_untracked().into_tags(),
        };
        let today = chrono::Local::now().date_naive();

        match ctx.catalog.try_update(|c| c.create(draft, today)) {
            Some(Ok(dataset)) => {
                flash(ctx.notice, format!("Dataset \"{}\" đã được tạo thành công.", dataset.name), true);
                ctx.show_create.set(false);
                reset_form();
            }
            Some(Err(e)) => {
                log::warn!("create dataset rejected: {}", e);
                flash(ctx.notice, e.to_string(), false);
            }
            None => {}
        }
    };

    view! {
        <Show when=move || ctx.show_create.get()>
            <div class="modal-overlay" on:click=close_modal>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Tạo Dataset mới"</h2>
                        <button class="modal-close" on:click=close_modal>"×"</button>
                    </div>
                    <form class="modal-body" on:submit=submit>
                        <div class="form-group">
                            <label for="dataset-name">"Tên Dataset *"</label>
                            <input
                                id="dataset-name"
                                type="text"
                                placeholder="VD: Kinh Trung Bộ, Văn học Việt Nam..."
                                prop:value=move || name.get()
                                on:input=move |e| name.set(event_target_value(&e))
                            />
                        </div>
                        <div class="form-group">
                            <label for="dataset-description">"Mô tả"</label>
                            <textarea
                                id="dataset-description"
                                rows="3"
                                placeholder="Mô tả ngắn gọn về nội dung dataset..."
                                prop:value=move || description.get()
                                on:input=move |e| description.set(event_target_value(&e))
                            ></textarea>
                        </div>
                        <div class="form-group">
                            <label>"Thẻ chủ đề"</label>
                            <div class="tag-list">
                                {move || tags.with(|t| t.tags().to_vec()).into_iter().map(|tag| {
                                    let label = tag.clone();
                                    view! {
                                        <span class="tag removable">
                                            {label}
                                            <button type="button" class="tag-remove" on:click=move |_| tags.update(|t| t.remove(&tag))>"×"</button>
                                        </span>
                                    }
                                }).collect_view()}
                            </div>
                            <div class="inline-form">
                                <input
                                    type="text"
                                    placeholder="Thêm thẻ mới..."
                                    prop:value=move || new_tag.get()
                                    on:input=move |e| new_tag.set(event_target_value(&e))
                                    on:keydown=move |e| {
                                        if e.key() == "Enter" {
                                            e.prevent_default();
                                            add_tag();
                                        }
                                    }
                                />
                                <button
                                    type="button"
                                    class="btn btn-secondary"
                                    disabled=move || !tags.with(|t| t.can_add(&new_tag.get()))
                                    on:click=move |_| add_tag()
                                >"+"</button>
                            </div>
                            <div class="tag-suggestions">
                                <small class="form-hint">"Gợi ý:"</small>
                                {move || tags.with(|t| t.suggestions()).into_iter().map(|tag| view! {
                                    <button type="button" class="tag suggestion" on:click=move |_| { tags.update(|t| { t.add(tag); }); }>
                                        {format!("+ {}", tag)}
                                    </button>
                                }).collect_view()}
                            </div>
                        </div>
                        <div class="form-actions">
                            <button type="button" class="btn btn-secondary" on:click=close_modal>"Hủy"</button>
                            <button type="submit" class="btn btn-primary" disabled=move || name.get().trim().is_empty()>
                                "Tạo Dataset"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

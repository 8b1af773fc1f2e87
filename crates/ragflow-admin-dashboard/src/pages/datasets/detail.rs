//! Dataset detail view with files, retrieval test and configuration tabs

use leptos::*;
use super::super::shared::{StatusBadge, TabBar};
use super::state::{use_dataset_context, TAB_CONFIG, TAB_FILES, TAB_RETRIEVAL};
use super::{ConfigTab, FilesTab, RetrievalTab};

/// Detail view of the selected dataset
#[component]
pub fn DatasetDetail() -> impl IntoView {
    let ctx = use_dataset_context();
    let dataset = create_memo(move |_| ctx.selected_dataset());

    view! {
        {move || dataset.get().map(|d| view! {
            <div class="detail-header">
                <button class="btn btn-ghost" on:click=move |_| ctx.close_detail()>"← Quay lại"</button>
                <div class="detail-title">
                    <h2>{d.name.clone()}</h2>
                    <p class="muted">{d.description.clone()}</p>
                </div>
                <StatusBadge tone=d.status.tone() label=d.status.label() />
            </div>
        })}

        <TabBar
            tabs=vec![
                (TAB_FILES, "Files"),
                (TAB_RETRIEVAL, "Retrieval Test"),
                (TAB_CONFIG, "Configuration"),
            ]
            active=ctx.detail_tab
        />

        <div class="settings-content">
            <Show when=move || ctx.detail_tab.get() == TAB_FILES>
                <FilesTab />
            </Show>
            <Show when=move || ctx.detail_tab.get() == TAB_RETRIEVAL>
                <RetrievalTab />
            </Show>
            <Show when=move || ctx.detail_tab.get() == TAB_CONFIG>
                <ConfigTab />
            </Show>
        </div>
    }
}

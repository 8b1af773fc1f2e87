//! Dataset list with quick stats, search and row actions

use leptos::*;
use ragflow_admin_common::types::{Dataset, IndexStatus};
use ragflow_admin_common::utils::format_count;
use super::super::shared::StatusBadge;
use super::state::{use_dataset_context, TAB_CONFIG, TAB_FILES};

const VISIBLE_TAGS: usize = 3;

/// Dataset list page body
#[component]
pub fn DatasetList() -> impl IntoView {
    let ctx = use_dataset_context();
    let total = move || ctx.catalog.with(|c| c.len());
    let filtered = create_memo(move |_| ctx.filtered());

    view! {
        <div class="section-header page-header">
            <div>
                <h2>"Datasets"</h2>
                <p class="page-subtitle">
                    {move || format!("Quản lý tập dữ liệu phục vụ RAG - {} dataset tổng cộng", total())}
                </p>
            </div>
            <button class="btn btn-primary" on:click=move |_| ctx.show_create.set(true)>
                "+ Tạo Dataset"
            </button>
        </div>

        <QuickStats />

        <div class="card">
            <div class="card-body search-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Tìm kiếm dataset, domain, tags..."
                    prop:value=move || ctx.search.get()
                    on:input=move |e| ctx.search.set(event_target_value(&e))
                />
            </div>
        </div>

        <div class="card">
            <div class="card-header">
                <div>
                    <span class="card-title">"Tất cả Datasets"</span>
                    <span class="card-subtitle">
                        {move || format!("{} dataset được tìm thấy", filtered.with(|f| f.len()))}
                    </span>
                </div>
            </div>
            <div class="card-body">
                {move || {
                    let datasets = filtered.get();
                    if datasets.is_empty() {
                        view! {
                            <div class="empty-state">
                                <h3>"Chưa có dataset nào"</h3>
                                <p>"Bắt đầu bằng cách tạo một bộ tri thức cho chatbot của bạn"</p>
                                <button class="btn btn-primary" on:click=move |_| ctx.show_create.set(true)>
                                    "+ Tạo Dataset"
                                </button>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Tên Dataset"</th>
                                        <th>"Domain"</th>
                                        <th>"Files / Chunks"</th>
                                        <th>"Trạng thái"</th>
                                        <th>"Chatbots"</th>
                                        <th>"Ngày tạo"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {datasets.into_iter().map(|dataset| view! { <DatasetRow dataset=dataset /> }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// Counts per status plus the total number of files
#[component]
fn QuickStats() -> impl IntoView {
    let ctx = use_dataset_context();
    let stats = create_memo(move |_| ctx.catalog.with(|c| c.stats()));

    let cards = [
        ("indexed", "Indexed", Signal::derive(move || stats.get().indexed.to_string())),
        ("processing", "Processing", Signal::derive(move || stats.get().processing.to_string())),
        ("failed", "Failed", Signal::derive(move || stats.get().failed.to_string())),
        ("files", "Total Files", Signal::derive(move || format_count(stats.get().total_files))),
    ];

    view! {
        <div class="stats-grid">
            {cards.into_iter().map(|(class, label, value)| view! {
                <div class=format!("stat-card quick-stat {}", class)>
                    <div class="stat-value">{value}</div>
                    <div class="stat-label">{label}</div>
                </div>
            }).collect_view()}
        </div>
    }
}

/// One dataset row with its action menu
#[component]
fn DatasetRow(dataset: Dataset) -> impl IntoView {
    let ctx = use_dataset_context();
    let id = store_value(dataset.id.clone());
    let menu_open = move || ctx.open_menu.get().as_deref() == Some(id.get_value().as_str());

    let extra_tags = dataset.tags.len().saturating_sub(VISIBLE_TAGS);
    let tags = dataset.tags.iter().take(VISIBLE_TAGS).cloned().collect::<Vec<_>>();
    let progress = (dataset.status == IndexStatus::Processing)
        .then(|| format!("{}% hoàn thành", dataset.completion_percent()));

    view! {
        <tr class="clickable" on:click=move |_| ctx.open_detail(&id.get_value(), TAB_FILES)>
            <td>
                <div class="dataset-name">{dataset.name.clone()}</div>
                <div class="dataset-description">{dataset.description.clone()}</div>
                <div class="tag-list">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                    {(extra_tags > 0).then(|| view! { <span class="tag">{format!("+{}", extra_tags)}</span> })}
                </div>
            </td>
            <td><span class="tag outline">{dataset.domain.clone()}</span></td>
            <td>
                <div class="file-count">{format!("{} files", dataset.files)}</div>
                <div class="chunk-count">{format!("{} / {} chunks", dataset.chunks, dataset.total_chunks)}</div>
                <div class="size">{dataset.size.clone()}</div>
            </td>
            <td>
                <StatusBadge tone=dataset.status.tone() label=dataset.status.label() />
                {progress.map(|p| view! { <div class="progress-text">{p}</div> })}
            </td>
            <td>
                <span class="chatbot-count">{dataset.chatbots}</span>
                {dataset.in_use().then(|| view! { <span class="tag secondary">"đang dùng"</span> })}
            </td>
            <td>
                <div>{dataset.created_at.clone()}</div>
                <div class="muted">{format!("Cập nhật: {}", dataset.last_updated)}</div>
            </td>
            <td class="row-actions" on:click=|e| e.stop_propagation()>
                <button
                    class="btn-icon"
                    on:click=move |_| {
                        let current = id.get_value();
                        ctx.open_menu.update(|open| {
                            *open = if open.as_deref() == Some(current.as_str()) { None } else { Some(current) };
                        });
                    }
                >"⋮"</button>
                <Show when=menu_open>
                    <div class="dropdown-menu">
                        <button class="dropdown-item" on:click=move |_| ctx.open_detail(&id.get_value(), TAB_FILES)>
                            "Xem chi tiết"
                        </button>
                        <button class="dropdown-item" on:click=move |_| ctx.open_detail(&id.get_value(), TAB_CONFIG)>
                            "Chỉnh sửa"
                        </button>
                        <button class="dropdown-item" on:click=move |_| ctx.reindex(&id.get_value())>
                            "Re-index"
                        </button>
                        <div class="dropdown-separator"></div>
                        <button class="dropdown-item danger" on:click=move |_| ctx.delete(&id.get_value())>
                            "Xóa"
                        </button>
                    </div>
                </Show>
            </td>
        </tr>
    }
}

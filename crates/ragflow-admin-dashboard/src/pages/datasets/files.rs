//! Files tab of the dataset detail view

use leptos::*;
use ragflow_admin_common::datasets::DatasetFiles;
use ragflow_admin_common::types::DatasetFile;
use super::super::shared::StatusBadge;
use super::FileChunkViewer;

/// File list with enable switches; opening a file shows its chunks
#[component]
pub fn FilesTab() -> impl IntoView {
    let files = create_rw_signal(DatasetFiles::seeded());
    let open_file = create_rw_signal(None::<DatasetFile>);

    let toggle = move |id: String| {
        if let Some(Err(e)) = files.try_update(|f| f.toggle(&id)) {
            log::warn!("toggle file failed: {}", e);
        }
    };

    view! {
        <Show
            when=move || open_file.get().is_none()
            fallback=move || open_file.get().map(|file| view! {
                <FileChunkViewer file=file on_back=move |_: ()| open_file.set(None) />
            })
        >
            <div class="card">
                <div class="card-header">
                    <div>
                        <span class="card-title">"Danh sách Files"</span>
                        <span class="card-subtitle">
                            {move || files.with(|f| {
                                let (indexed, processing, failed) = f.status_counts();
                                format!(
                                    "{} files · {} chunks · {} indexed, {} processing, {} failed",
                                    f.all().len(), f.total_chunks(), indexed, processing, failed
                                )
                            })}
                        </span>
                    </div>
                    <button class="btn btn-primary" disabled=true>"Upload Files"</button>
                </div>
                <div class="card-body">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Tên File"</th>
                                <th>"Upload Date"</th>
                                <th>"Enable"</th>
                                <th>"Chunk Number"</th>
                                <th>"Parse"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || files.with(|f| f.all().to_vec()).into_iter().map(|file| {
                                let id = file.id.clone();
                                let opened = file.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <button class="link-btn" on:click=move |_| open_file.set(Some(opened.clone()))>
                                                {file.name.clone()}
                                            </button>
                                            <div class="muted">{file.size.clone()}</div>
                                        </td>
                                        <td>{file.upload_date.clone()}</td>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=file.enabled
                                                on:change=move |_| toggle(id.clone())
                                            />
                                        </td>
                                        <td>{file.chunk_count}</td>
                                        <td><span class="tag outline">{file.parse_method.clone()}</span></td>
                                        <td><StatusBadge tone=file.status.tone() label=file.status.label() /></td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </Show>
    }
}

//! File chunk viewer: source text next to its chunks

use leptos::*;
use ragflow_admin_common::chunks::{original_text, ChunkBoard, ChunkViewMode};
use ragflow_admin_common::types::DatasetFile;

/// Two-column view of one file's extracted text and chunk list
#[component]
pub fn FileChunkViewer(file: DatasetFile, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let board = create_rw_signal(ChunkBoard::for_file(&file));
    let text = original_text(&file);

    let toggle = move |id: String| {
        if let Some(Err(e)) = board.try_update(|b| b.toggle_chunk(&id)) {
            log::warn!("toggle chunk failed: {}", e);
        }
    };

    let mode_button = move |mode: ChunkViewMode| view! {
        <button
            class=move || if board.with(|b| b.mode) == mode { "btn btn-primary btn-sm" } else { "btn btn-secondary btn-sm" }
            on:click=move |_| board.update(|b| b.mode = mode)
        >{mode.label()}</button>
    };

    view! {
        <div class="chunk-viewer">
            <div class="detail-header">
                <button class="btn btn-ghost" on:click=move |_| on_back.call(())>"← Quay lại"</button>
                <h2>{file.name.clone()}</h2>
                <div class="view-switch">
                    <span class="muted">"View:"</span>
                    {mode_button(ChunkViewMode::Full)}
                    {mode_button(ChunkViewMode::Ellipsis)}
                </div>
                <span class="tag secondary">{move || board.with(|b| format!("Total: {} chunks · {} enabled", b.len(), b.enabled_count()))}</span>
            </div>

            <div class="two-column">
                <div class="card">
                    <div class="card-header"><span class="card-title">"Nội dung gốc"</span></div>
                    <div class="card-body scroll">
                        <pre class="original-text">{text}</pre>
                    </div>
                </div>

                <div class="card">
                    <div class="card-header"><span class="card-title">"Chunk Results"</span></div>
                    <div class="card-body scroll">
                        {move || board.with(|b| {
                            b.chunks().iter().map(|chunk| {
                                let id = chunk.id.clone();
                                let content = b.display_content(chunk);
                                view! {
                                    <div class=if chunk.enabled { "chunk-card" } else { "chunk-card disabled" }>
                                        <div class="chunk-header">
                                            <span class="tag outline">{format!("#{}", chunk.position)}</span>
                                            <input
                                                type="checkbox"
                                                prop:checked=chunk.enabled
                                                on:change=move |_| toggle(id.clone())
                                            />
                                        </div>
                                        <p class="chunk-content">{content}</p>
                                    </div>
                                }
                            }).collect_view()
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}

//! Retrieval test tab of the dataset detail view

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use ragflow_admin_common::retrieval::{
    RetrievalProbe, RetrievalSettings, CROSS_LANGUAGES, RERANK_MODELS, SIMILARITY_THRESHOLD, VECTOR_WEIGHT,
};
use tokio_util::sync::CancellationToken;
use crate::state::use_app_state;
use super::super::shared::{SelectField, SliderField, SwitchField};

/// Retrieval settings, test text and results
#[component]
pub fn RetrievalTab() -> impl IntoView {
    let app_state = use_app_state();
    let delay_ms = u32::try_from(app_state.config().retrieval.delay_ms).unwrap_or(u32::MAX);

    let settings = create_rw_signal(RetrievalSettings::default());
    let probe = create_rw_signal(RetrievalProbe::new());
    let query = create_rw_signal(String::new());

    // Cancelled when the tab unmounts so a late timer never writes results.
    let token = CancellationToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });
    let token = store_value(token);

    let run_test = move |_| {
        let text = query.get_untracked();
        match probe.try_update(|p| p.begin(&text)) {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                log::warn!("retrieval test rejected: {}", e);
                return;
            }
            None => return,
        }

        let token = token.get_value().child_token();
        spawn_local(async move {
            let outcome = RetrievalProbe::run(TimeoutFuture::new(delay_ms), token).await;
            match probe.try_update(|p| p.finish(outcome)) {
                Some(Err(e)) => log::debug!("retrieval test ended: {}", e),
                Some(Ok(_)) | None => {}
            }
        });
    };

    view! {
        <div class="two-column retrieval-tab">
            <div class="card">
                <div class="card-header"><span class="card-title">"Retrieval Settings"</span></div>
                <div class="card-body">
                    <SliderField
                        label="Similarity Threshold"
                        range=SIMILARITY_THRESHOLD
                        value=Signal::derive(move || settings.with(|s| s.similarity_threshold))
                        on_change=move |v: f64| settings.update(|s| s.set_similarity_threshold(v))
                    />
                    <SliderField
                        label="Vector Similarity Weight"
                        range=VECTOR_WEIGHT
                        value=Signal::derive(move || settings.with(|s| s.vector_weight))
                        on_change=move |v: f64| settings.update(|s| s.set_vector_weight(v))
                    />
                    <SelectField
                        label="Rerank Model"
                        choices=RERANK_MODELS
                        value=Signal::derive(move || settings.with(|s| s.rerank_model.clone()))
                        on_change=move |v: String| settings.update(|s| s.rerank_model = v)
                    />
                    <SwitchField
                        label="Use Knowledge Graph"
                        checked=Signal::derive(move || settings.with(|s| s.use_knowledge_graph))
                        on_toggle=move |v: bool| settings.update(|s| s.use_knowledge_graph = v)
                    />
                    <SelectField
                        label="Cross-language Search"
                        choices=CROSS_LANGUAGES
                        value=Signal::derive(move || settings.with(|s| s.cross_language.clone()))
                        on_change=move |v: String| settings.update(|s| s.cross_language = v)
                    />

                    <div class="form-group">
                        <label for="retrieval-text">"Test Text"</label>
                        <textarea
                            id="retrieval-text"
                            rows="4"
                            placeholder="Nhập câu hỏi để kiểm tra retrieval..."
                            prop:value=move || query.get()
                            on:input=move |e| query.set(event_target_value(&e))
                        ></textarea>
                    </div>
                    <button
                        class="btn btn-primary btn-block"
                        disabled=move || !probe.with(|p| p.can_begin(&query.get()))
                        on:click=run_test
                    >
                        {move || if probe.with(|p| p.is_pending()) { "Testing..." } else { "Test Retrieval" }}
                    </button>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <span class="card-title">"Results"</span>
                    <span class="card-subtitle">{move || format!("{} kết quả", probe.with(|p| p.results().len()))}</span>
                </div>
                <div class="card-body">
                    {move || {
                        let hits = probe.with(|p| p.results().to_vec());
                        if hits.is_empty() {
                            view! {
                                <div class="empty-state">
                                    <p>"Nhập câu hỏi và nhấn Test Retrieval để xem kết quả"</p>
                                </div>
                            }.into_view()
                        } else {
                            hits.into_iter().map(|hit| view! {
                                <div class="result-card">
                                    <div class="result-header">
                                        <span class="tag secondary">{format!("Score: {:.2}", hit.score)}</span>
                                        <span class="muted">{format!("{} · {}", hit.source, hit.chunk_id)}</span>
                                    </div>
                                    <p class="result-content">{hit.content}</p>
                                </div>
                            }).collect_view()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

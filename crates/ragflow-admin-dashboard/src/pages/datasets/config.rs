//! Configuration tab of the dataset detail view

use leptos::*;
use ragflow_admin_common::datasets::{
    ChunkSettings, GeneralSettings, AUTO_KEYWORD, AUTO_QUESTION, CHUNK_METHODS, CHUNK_SIZE, EMBEDDING_MODELS,
    PDF_PARSERS, PERMISSIONS, RAPTOR_MAX_CLUSTER, RAPTOR_MAX_TOKEN, RAPTOR_THRESHOLD,
};
use super::super::shared::{flash, SelectField, SliderField, SwitchField, TabBar};
use super::state::use_dataset_context;

const SUB_GENERAL: &str = "general";
const SUB_CHUNK: &str = "chunk";

/// General and chunk-method settings of the selected dataset
#[component]
pub fn ConfigTab() -> impl IntoView {
    let sub_tab = create_rw_signal(SUB_GENERAL.to_string());

    view! {
        <div class="settings-section">
            <TabBar tabs=vec![(SUB_GENERAL, "General"), (SUB_CHUNK, "Chunk Method")] active=sub_tab />
            <Show when=move || sub_tab.get() == SUB_GENERAL>
                <GeneralSection />
            </Show>
            <Show when=move || sub_tab.get() == SUB_CHUNK>
                <ChunkSection />
            </Show>
        </div>
    }
}

/// Name, description, permissions and avatar
#[component]
fn GeneralSection() -> impl IntoView {
    let ctx = use_dataset_context();
    let initial = ctx
        .selected_dataset()
        .map(|d| GeneralSettings::from_dataset(&d));
    let general = create_rw_signal(initial);

    let save = move |_| {
        let Some(dataset) = ctx.selected_dataset() else {
            return;
        };
        let Some(settings) = general.get_untracked() else {
            return;
        };
        match settings.apply_to(&dataset) {
            Ok(updated) => ctx.update(updated),
            Err(e) => {
                log::warn!("dataset settings rejected: {}", e);
                flash(ctx.notice, e.to_string(), false);
            }
        }
    };

    let field = move |f: fn(&GeneralSettings) -> String| {
        Signal::derive(move || general.with(|g| g.as_ref().map(f).unwrap_or_default()))
    };

    view! {
        <div class="card">
            <div class="card-body">
                <div class="form-group">
                    <label for="ds-name">"Name"</label>
                    <input
                        id="ds-name"
                        type="text"
                        prop:value=move || general.with(|g| g.as_ref().map(|g| g.name.clone()).unwrap_or_default())
                        on:input=move |e| general.update(|g| if let Some(g) = g { g.name = event_target_value(&e) })
                    />
                </div>
                <div class="form-group">
                    <label for="ds-description">"Description"</label>
                    <textarea
                        id="ds-description"
                        rows="3"
                        prop:value=move || general.with(|g| g.as_ref().map(|g| g.description.clone()).unwrap_or_default())
                        on:input=move |e| general.update(|g| if let Some(g) = g { g.description = event_target_value(&e) })
                    ></textarea>
                </div>
                <SelectField
                    label="Permissions"
                    choices=PERMISSIONS
                    value=field(|g| g.permission.clone())
                    on_change=move |v: String| general.update(|g| if let Some(g) = g { g.permission = v })
                />
                <div class="form-group">
                    <label>"Avatar"</label>
                    <div class="avatar-placeholder">"📷"</div>
                </div>
                <div class="form-actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || general.with(|g| g.as_ref().map_or(true, |g| g.name.trim().is_empty()))
                        on:click=save
                    >"Lưu thay đổi"</button>
                </div>
            </div>
        </div>
    }
}

/// Chunking, embedding and RAPTOR options; kept in view state only
#[component]
fn ChunkSection() -> impl IntoView {
    let chunk = create_rw_signal(ChunkSettings::default());

    let text = move |f: fn(&ChunkSettings) -> String| Signal::derive(move || chunk.with(f));
    let number = move |f: fn(&ChunkSettings) -> f64| Signal::derive(move || chunk.with(f));
    let flag = move |f: fn(&ChunkSettings) -> bool| Signal::derive(move || chunk.with(f));

    view! {
        <div class="card">
            <div class="card-body">
                <SelectField
                    label="Chunk Method"
                    choices=CHUNK_METHODS
                    value=text(|c| c.method.clone())
                    on_change=move |v: String| chunk.update(|c| c.method = v)
                />
                <SelectField
                    label="PDF Parser"
                    choices=PDF_PARSERS
                    value=text(|c| c.pdf_parser.clone())
                    on_change=move |v: String| chunk.update(|c| c.pdf_parser = v)
                />
                <SelectField
                    label="Embedding Model"
                    choices=EMBEDDING_MODELS
                    value=text(|c| c.embedding_model.clone())
                    on_change=move |v: String| chunk.update(|c| c.embedding_model = v)
                />
                <SliderField
                    label="Recommended Chunk Size"
                    range=CHUNK_SIZE
                    value=number(|c| c.chunk_size as f64)
                    on_change=move |v: f64| chunk.update(|c| c.set_chunk_size(v))
                />
                <div class="form-group">
                    <label for="delimiter">"Delimiter"</label>
                    <input
                        id="delimiter"
                        type="text"
                        prop:value=move || chunk.with(|c| c.delimiter.clone())
                        on:input=move |e| chunk.update(|c| c.delimiter = event_target_value(&e))
                    />
                </div>
                <SwitchField
                    label="Page Rank"
                    checked=flag(|c| c.page_rank)
                    on_toggle=move |v: bool| chunk.update(|c| c.page_rank = v)
                />
                <SliderField
                    label="Auto Keyword"
                    range=AUTO_KEYWORD
                    value=number(|c| c.auto_keyword as f64)
                    on_change=move |v: f64| chunk.update(|c| c.set_auto_keyword(v))
                />
                <SliderField
                    label="Auto Question"
                    range=AUTO_QUESTION
                    value=number(|c| c.auto_question as f64)
                    on_change=move |v: f64| chunk.update(|c| c.set_auto_question(v))
                />
                <SwitchField
                    label="Excel to HTML"
                    checked=flag(|c| c.excel_to_html)
                    on_toggle=move |v: bool| chunk.update(|c| c.excel_to_html = v)
                />
                <div class="form-group">
                    <label>"Tag Sets"</label>
                    <div class="tag-list">
                        {move || chunk.with(|c| c.tag_sets.clone()).into_iter().map(|tag| view! {
                            <span class="tag">{tag}</span>
                        }).collect_view()}
                    </div>
                </div>

                <div class="detail-section">
                    <SwitchField
                        label="RAPTOR"
                        description="Recursive abstractive processing for tree-organized retrieval"
                        checked=flag(|c| c.raptor.enabled)
                        on_toggle=move |v: bool| chunk.update(|c| c.raptor.enabled = v)
                    />
                    <Show when=move || chunk.with(|c| c.raptor.enabled)>
                        <div class="form-group">
                            <label for="raptor-prompt">"Prompt"</label>
                            <textarea
                                id="raptor-prompt"
                                rows="3"
                                prop:value=move || chunk.with(|c| c.raptor.prompt.clone())
                                on:input=move |e| chunk.update(|c| c.raptor.prompt = event_target_value(&e))
                            ></textarea>
                        </div>
                        <SliderField
                            label="Max Token"
                            range=RAPTOR_MAX_TOKEN
                            value=number(|c| c.raptor.max_token as f64)
                            on_change=move |v: f64| chunk.update(|c| c.set_raptor_max_token(v))
                        />
                        <SliderField
                            label="Threshold"
                            range=RAPTOR_THRESHOLD
                            value=number(|c| c.raptor.threshold)
                            on_change=move |v: f64| chunk.update(|c| c.set_raptor_threshold(v))
                        />
                        <SliderField
                            label="Max Cluster"
                            range=RAPTOR_MAX_CLUSTER
                            value=number(|c| c.raptor.max_cluster as f64)
                            on_change=move |v: f64| chunk.update(|c| c.set_raptor_max_cluster(v))
                        />
                        <div class="form-group">
                            <label for="random-seed">"Random Seed"</label>
                            <input
                                id="random-seed"
                                type="number"
                                prop:value=move || chunk.with(|c| c.raptor.random_seed.to_string())
                                on:input=move |e| {
                                    if let Ok(seed) = event_target_value(&e).parse::<i64>() {
                                        chunk.update(|c| c.raptor.random_seed = seed);
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>

                <SwitchField
                    label="Knowledge Graph"
                    description="Extract entities and relations while indexing"
                    checked=flag(|c| c.knowledge_graph)
                    on_toggle=move |v: bool| chunk.update(|c| c.knowledge_graph = v)
                />
            </div>
        </div>
    }
}

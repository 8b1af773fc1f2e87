//! Datasets page: list, creation, detail tabs and chunk viewer

mod chunk_viewer;
mod config;
mod create;
mod detail;
mod files;
mod list;
mod retrieval;
pub mod state;

pub use chunk_viewer::FileChunkViewer;
pub use config::ConfigTab;
pub use create::CreateDatasetModal;
pub use detail::DatasetDetail;
pub use files::FilesTab;
pub use list::DatasetList;
pub use retrieval::RetrievalTab;
pub use state::{provide_dataset_context, use_dataset_context, DatasetContext};

use leptos::*;
use super::shared::NoticeBanner;

/// Datasets page switching between the list and one dataset's detail
#[component]
pub fn DatasetsPage() -> impl IntoView {
    let ctx = provide_dataset_context();

    view! {
        <div class="datasets-page">
            <NoticeBanner notice=ctx.notice />

            <Show
                when=move || ctx.selected.get().is_some()
                fallback=|| view! { <DatasetList /> }
            >
                <DatasetDetail />
            </Show>

            <CreateDatasetModal />
        </div>
    }
}

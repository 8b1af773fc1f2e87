//! Dataset page state using Leptos signals and context

use leptos::*;
use ragflow_admin_common::datasets::DatasetCatalog;
use ragflow_admin_common::types::Dataset;
use super::super::shared::{flash, Notice};

/// Detail tab keys
pub const TAB_FILES: &str = "files";
pub const TAB_RETRIEVAL: &str = "retrieval";
pub const TAB_CONFIG: &str = "config";

/// State shared by the dataset list, the create modal and the detail view
#[derive(Clone, Copy)]
pub struct DatasetContext {
    pub catalog: RwSignal<DatasetCatalog>,
    pub search: RwSignal<String>,

    // Detail view
    pub selected: RwSignal<Option<String>>,
    pub detail_tab: RwSignal<String>,

    // Modal and menus
    pub show_create: RwSignal<bool>,
    pub open_menu: RwSignal<Option<String>>,

    pub notice: Notice,
}

impl DatasetContext {
    pub fn new() -> Self {
        Self {
            catalog: create_rw_signal(DatasetCatalog::seeded()),
            search: create_rw_signal(String::new()),
            selected: create_rw_signal(None),
            detail_tab: create_rw_signal(TAB_FILES.to_string()),
            show_create: create_rw_signal(false),
            open_menu: create_rw_signal(None),
            notice: create_rw_signal(None),
        }
    }

    /// Datasets matching the current search text.
    pub fn filtered(&self) -> Vec<Dataset> {
        let query = self.search.get();
        self.catalog.with(|c| c.filter(&query))
    }

    /// The dataset shown in the detail view, if it still exists.
    pub fn selected_dataset(&self) -> Option<Dataset> {
        let id = self.selected.get()?;
        self.catalog.with(|c| c.get(&id).cloned())
    }

    pub fn open_detail(&self, id: &str, tab: &str) {
        self.open_menu.set(None);
        self.detail_tab.set(tab.to_string());
        self.selected.set(Some(id.to_string()));
    }

    pub fn close_detail(&self) {
        self.selected.set(None);
    }

    pub fn reindex(&self, id: &str) {
        self.open_menu.set(None);
        let result = self.catalog.try_update(|c| c.reindex(id));
        match result {
            Some(Ok(())) => flash(self.notice, "Bắt đầu re-index: dataset đang được xử lý lại...", true),
            Some(Err(e)) => {
                log::warn!("re-index failed: {}", e);
                flash(self.notice, e.to_string(), false);
            }
            None => {}
        }
    }

    pub fn delete(&self, id: &str) {
        self.open_menu.set(None);
        let result = self.catalog.try_update(|c| c.delete(id));
        match result {
            Some(Ok(removed)) => {
                if self.selected.get_untracked().as_deref() == Some(removed.id.as_str()) {
                    self.selected.set(None);
                }
                flash(self.notice, format!("Dataset \"{}\" đã được xóa.", removed.name), true);
            }
            Some(Err(e)) => {
                log::warn!("delete failed: {}", e);
                flash(self.notice, e.to_string(), false);
            }
            None => {}
        }
    }

    pub fn update(&self, record: Dataset) {
        match self.catalog.try_update(|c| c.update(record)) {
            Some(Ok(())) => flash(self.notice, "Thông tin dataset đã được lưu thành công.", true),
            Some(Err(e)) => {
                log::warn!("update failed: {}", e);
                flash(self.notice, e.to_string(), false);
            }
            None => {}
        }
    }
}

impl Default for DatasetContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide dataset context to the page's components
pub fn provide_dataset_context() -> DatasetContext {
    let ctx = DatasetContext::new();
    provide_context(ctx);
    ctx
}

/// Use dataset context
pub fn use_dataset_context() -> DatasetContext {
    expect_context::<DatasetContext>()
}

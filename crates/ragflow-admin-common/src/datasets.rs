//! RAGFlow Admin Datasets - Dataset Catalog
//!
//! In-memory catalog behind the dataset list, the tag editor used by the
//! create form, the file list of the detail view and the editable dataset
//! configuration. All mutations replace records in place and always run
//! synchronously.
//!
//! @version 0.1.0
//! @author RAGFlow Admin Development Team

use crate::error::{ConsoleError, Result};
use crate::mock;
use crate::types::{Dataset, DatasetDraft, DatasetFile, IndexStatus};
use crate::utils::{contains_ignore_case, parse_sequence, sequence_id, Choice, SliderRange};
use chrono::NaiveDate;

const ID_PREFIX: &str = "ds";
const ID_WIDTH: usize = 3;

// =============================================================================
// Dataset Catalog
// =============================================================================

/// Counts shown in the quick-stat cards above the dataset table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub indexed: usize,
    pub processing: usize,
    pub failed: usize,
    pub total_files: u64,
}

/// Ordered list of datasets plus the identifier sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetCatalog {
    datasets: Vec<Dataset>,
    next_seq: u32,
}

impl DatasetCatalog {
    pub fn new(datasets: Vec<Dataset>) -> Self {
        let highest = datasets
            .iter()
            .filter_map(|d| parse_sequence(&d.id, ID_PREFIX))
            .max()
            .unwrap_or(0);
        let next_seq = highest.max(datasets.len() as u32) + 1;
        Self { datasets, next_seq }
    }

    /// Catalog populated with the seed records.
    pub fn seeded() -> Self {
        Self::new(mock::seed_datasets())
    }

    pub fn all(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Datasets whose name, domain or any tag contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> Vec<Dataset> {
        self.datasets
            .iter()
            .filter(|d| matches_dataset(d, query))
            .cloned()
            .collect()
    }

    /// Add a dataset built from the create form. The new record goes first.
    pub fn create(&mut self, draft: DatasetDraft, today: NaiveDate) -> Result<Dataset> {
        let name = draft.name.trim();
        if name.is_empty() {
            log::warn!("rejected dataset without a name");
            return Err(ConsoleError::EmptyName);
        }

        let id = sequence_id(ID_PREFIX, self.next_seq, ID_WIDTH);
        self.next_seq += 1;

        let date = today.format("%Y-%m-%d").to_string();
        let dataset = Dataset {
            id,
            name: name.to_string(),
            description: draft.description.trim().to_string(),
            domain: "Custom".to_string(),
            files: 0,
            size: "0 MB".to_string(),
            status: IndexStatus::Indexed,
            last_updated: date.clone(),
            created_at: date,
            chatbots: 0,
            tags: draft.tags,
            chunks: 0,
            total_chunks: 0,
        };

        log::info!("created dataset {} ({})", dataset.id, dataset.name);
        self.datasets.insert(0, dataset.clone());
        Ok(dataset)
    }

    /// Replace the record carrying the same id.
    pub fn update(&mut self, record: Dataset) -> Result<()> {
        match self.datasets.iter_mut().find(|d| d.id == record.id) {
            Some(slot) => {
                log::info!("updated dataset {}", record.id);
                *slot = record;
                Ok(())
            }
            None => Err(ConsoleError::DatasetNotFound(record.id)),
        }
    }

    pub fn delete(&mut self, id: &str) -> Result<Dataset> {
        let index = self
            .datasets
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| ConsoleError::DatasetNotFound(id.to_string()))?;
        log::info!("deleted dataset {}", id);
        Ok(self.datasets.remove(index))
    }

    /// Mark a dataset as processing. Nothing moves it on afterwards.
    pub fn reindex(&mut self, id: &str) -> Result<()> {
        let dataset = self
            .datasets
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| ConsoleError::DatasetNotFound(id.to_string()))?;
        dataset.status = IndexStatus::Processing;
        log::info!("re-index requested for dataset {}", id);
        Ok(())
    }

    pub fn stats(&self) -> DatasetStats {
        self.datasets.iter().fold(DatasetStats::default(), |mut acc, d| {
            match d.status {
                IndexStatus::Indexed => acc.indexed += 1,
                IndexStatus::Processing => acc.processing += 1,
                IndexStatus::Failed => acc.failed += 1,
            }
            acc.total_files += d.files as u64;
            acc
        })
    }
}

impl Default for DatasetCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn matches_dataset(dataset: &Dataset, query: &str) -> bool {
    contains_ignore_case(&dataset.name, query)
        || contains_ignore_case(&dataset.domain, query)
        || dataset.tags.iter().any(|t| contains_ignore_case(t, query))
}

// =============================================================================
// Tag Editor
// =============================================================================

/// Ordered, duplicate-free tag selection for the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEditor {
    tags: Vec<String>,
}

impl TagEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether `tag` would be accepted by [`TagEditor::add`].
    pub fn can_add(&self, tag: &str) -> bool {
        let tag = tag.trim();
        !tag.is_empty() && !self.contains(tag)
    }

    /// Append a tag; empty and repeated tags are ignored.
    pub fn add(&mut self, tag: &str) -> bool {
        if !self.can_add(tag) {
            return false;
        }
        self.tags.push(tag.trim().to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Preset tags not yet selected.
    pub fn suggestions(&self) -> Vec<&'static str> {
        mock::PRESET_TAGS
            .iter()
            .copied()
            .filter(|t| !self.contains(t))
            .collect()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}

// =============================================================================
// Dataset Files
// =============================================================================

/// File list of one dataset with its enable switches.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetFiles {
    files: Vec<DatasetFile>,
}

impl DatasetFiles {
    pub fn new(files: Vec<DatasetFile>) -> Self {
        Self { files }
    }

    pub fn seeded() -> Self {
        Self::new(mock::seed_files())
    }

    pub fn all(&self) -> &[DatasetFile] {
        &self.files
    }

    pub fn get(&self, id: &str) -> Option<&DatasetFile> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Flip a file's enabled flag and return the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let file = self
            .files
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| ConsoleError::FileNotFound(id.to_string()))?;
        file.enabled = !file.enabled;
        Ok(file.enabled)
    }

    /// Files per status: (indexed, processing, failed).
    pub fn status_counts(&self) -> (usize, usize, usize) {
        self.files.iter().fold((0, 0, 0), |(i, p, f), file| match file.status {
            IndexStatus::Indexed => (i + 1, p, f),
            IndexStatus::Processing => (i, p + 1, f),
            IndexStatus::Failed => (i, p, f + 1),
        })
    }

    pub fn total_chunks(&self) -> u32 {
        self.files.iter().map(|f| f.chunk_count).sum()
    }
}

// =============================================================================
// Dataset Configuration
// =============================================================================

pub const PERMISSIONS: &[Choice] = &[
    Choice::new("only-me", "Only me"),
    Choice::new("org", "Organization"),
    Choice::new("public", "Public"),
];

pub const CHUNK_METHODS: &[Choice] = &[
    Choice::new("general", "General"),
    Choice::new("metadata", "Metadata"),
    Choice::new("qa", "QA"),
];

pub const PDF_PARSERS: &[Choice] = &[
    Choice::new("deepdoc", "DeepDoc"),
    Choice::new("general", "General"),
];

pub const EMBEDDING_MODELS: &[Choice] = &[
    Choice::new("text-embedding-3-large", "text-embedding-3-large"),
    Choice::new("text-embedding-3-small", "text-embedding-3-small"),
    Choice::new("text-embedding-ada-002", "text-embedding-ada-002"),
];

pub const CHUNK_SIZE: SliderRange = SliderRange::new(128.0, 2048.0, 128.0);
pub const AUTO_KEYWORD: SliderRange = SliderRange::new(0.0, 10.0, 1.0);
pub const AUTO_QUESTION: SliderRange = SliderRange::new(0.0, 10.0, 1.0);
pub const RAPTOR_MAX_TOKEN: SliderRange = SliderRange::new(512.0, 4096.0, 256.0);
pub const RAPTOR_THRESHOLD: SliderRange = SliderRange::new(0.0, 1.0, 0.01);
pub const RAPTOR_MAX_CLUSTER: SliderRange = SliderRange::new(1.0, 50.0, 1.0);

/// Editable general section of the configuration tab.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralSettings {
    pub name: String,
    pub description: String,
    pub permission: String,
}

impl GeneralSettings {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            name: dataset.name.clone(),
            description: dataset.description.clone(),
            permission: "only-me".to_string(),
        }
    }

    /// Copy of `dataset` carrying the edited name and description.
    pub fn apply_to(&self, dataset: &Dataset) -> Result<Dataset> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ConsoleError::EmptyName);
        }
        let mut updated = dataset.clone();
        updated.name = name.to_string();
        updated.description = self.description.trim().to_string();
        Ok(updated)
    }
}

/// RAPTOR hierarchical clustering options.
#[derive(Debug, Clone, PartialEq)]
pub struct RaptorSettings {
    pub enabled: bool,
    pub prompt: String,
    pub max_token: u32,
    pub threshold: f64,
    pub max_cluster: u32,
    pub random_seed: i64,
}

impl Default for RaptorSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            prompt: String::new(),
            max_token: 2048,
            threshold: 0.78,
            max_cluster: 10,
            random_seed: 0,
        }
    }
}

/// Chunk method section of the configuration tab.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkSettings {
    pub method: String,
    pub pdf_parser: String,
    pub embedding_model: String,
    pub chunk_size: u32,
    pub delimiter: String,
    pub page_rank: bool,
    pub auto_keyword: u32,
    pub auto_question: u32,
    pub excel_to_html: bool,
    pub tag_sets: Vec<String>,
    pub raptor: RaptorSettings,
    pub knowledge_graph: bool,
}

impl Default for ChunkSettings {
    fn default() -> Self {
        Self {
            method: "general".to_string(),
            pdf_parser: "deepdoc".to_string(),
            embedding_model: "text-embedding-3-large".to_string(),
            chunk_size: 512,
            delimiter: "\\n".to_string(),
            page_rank: false,
            auto_keyword: 1,
            auto_question: 1,
            excel_to_html: false,
            tag_sets: vec!["Phật học".to_string(), "Kinh điển".to_string(), "Triết học".to_string()],
            raptor: RaptorSettings::default(),
            knowledge_graph: false,
        }
    }
}

impl ChunkSettings {
    pub fn set_chunk_size(&mut self, value: f64) {
        self.chunk_size = CHUNK_SIZE.snap(value) as u32;
    }

    pub fn set_auto_keyword(&mut self, value: f64) {
        self.auto_keyword = AUTO_KEYWORD.snap(value) as u32;
    }

    pub fn set_auto_question(&mut self, value: f64) {
        self.auto_question = AUTO_QUESTION.snap(value) as u32;
    }

    pub fn set_raptor_max_token(&mut self, value: f64) {
        self.raptor.max_token = RAPTOR_MAX_TOKEN.snap(value) as u32;
    }

    pub fn set_raptor_threshold(&mut self, value: f64) {
        self.raptor.threshold = RAPTOR_THRESHOLD.snap(value);
    }

    pub fn set_raptor_max_cluster(&mut self, value: f64) {
        self.raptor.max_cluster = RAPTOR_MAX_CLUSTER.snap(value) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    fn draft(name: &str) -> DatasetDraft {
        DatasetDraft {
            name: name.to_string(),
            description: "  notes  ".to_string(),
            tags: vec!["giáo dục".to_string()],
        }
    }

    #[test]
    fn test_filter_matches_name_domain_and_tags() {
        let catalog = DatasetCatalog::seeded();

        let by_name = catalog.filter("VĂN HỌC");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "ds-002");

        let by_domain = catalog.filter("science");
        assert_eq!(by_domain[0].id, "ds-004");

        let by_tag = catalog.filter("thảo dược");
        assert_eq!(by_tag[0].id, "ds-005");

        assert_eq!(catalog.filter("").len(), catalog.len());
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let catalog = DatasetCatalog::seeded();
        assert!(catalog.filter("quantum chromodynamics").is_empty());
    }

    #[test]
    fn test_create_defaults() {
        let mut catalog = DatasetCatalog::seeded();
        let before = catalog.len();

        let created = catalog.create(draft("  Kinh Trung Bộ "), today()).unwrap();
        assert_eq!(catalog.len(), before + 1);
        assert_eq!(created.id, "ds-006");
        assert_eq!(created.name, "Kinh Trung Bộ");
        assert_eq!(created.description, "notes");
        assert_eq!(created.files, 0);
        assert_eq!(created.status, IndexStatus::Indexed);
        assert_eq!(created.domain, "Custom");
        assert_eq!(created.created_at, "2024-02-01");
        assert_eq!(catalog.all()[0], created);
    }

    #[test]
    fn test_create_ids_stay_unique_after_delete() {
        let mut catalog = DatasetCatalog::seeded();
        catalog.delete("ds-002").unwrap();

        let a = catalog.create(draft("A"), today()).unwrap();
        let b = catalog.create(draft("B"), today()).unwrap();
        assert_ne!(a.id, b.id);
        assert!(catalog.all().iter().filter(|d| d.id == a.id).count() == 1);
        assert!(catalog.get("ds-005").is_some());
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let mut catalog = DatasetCatalog::seeded();
        let err = catalog.create(draft("   "), today()).unwrap_err();
        assert!(matches!(err, ConsoleError::EmptyName));
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut catalog = DatasetCatalog::seeded();
        let removed = catalog.delete("ds-003").unwrap();
        assert_eq!(removed.id, "ds-003");

        let ids: Vec<_> = catalog.all().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["ds-001", "ds-002", "ds-004", "ds-005"]);

        assert!(catalog.delete("ds-003").unwrap_err().is_not_found());
    }

    #[test]
    fn test_reindex_only_changes_status() {
        let mut catalog = DatasetCatalog::seeded();
        let before = catalog.get("ds-001").cloned().unwrap();

        catalog.reindex("ds-001").unwrap();
        let after = catalog.get("ds-001").cloned().unwrap();
        assert_eq!(after.status, IndexStatus::Processing);
        assert_eq!(Dataset { status: before.status, ..after }, before);

        // Re-indexing again leaves it processing.
        catalog.reindex("ds-001").unwrap();
        assert_eq!(catalog.get("ds-001").unwrap().status, IndexStatus::Processing);
    }

    #[test]
    fn test_update_replaces_matching_record() {
        let mut catalog = DatasetCatalog::seeded();
        let mut record = catalog.get("ds-004").cloned().unwrap();
        record.name = "Natural Sciences".to_string();
        catalog.update(record).unwrap();
        assert_eq!(catalog.get("ds-004").unwrap().name, "Natural Sciences");
        assert_eq!(catalog.all()[3].id, "ds-004");

        let mut ghost = catalog.get("ds-001").cloned().unwrap();
        ghost.id = "ds-999".to_string();
        assert!(catalog.update(ghost).is_err());
    }

    #[test]
    fn test_stats() {
        let stats = DatasetCatalog::seeded().stats();
        assert_eq!(stats.indexed, 3);
        assert_eq!(stats.processing, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.total_files, 12 + 45 + 28 + 67 + 23);
    }

    #[test]
    fn test_tag_editor() {
        let mut editor = TagEditor::new();
        assert!(editor.add("lịch sử"));
        assert!(!editor.add("lịch sử"));
        assert!(!editor.add("   "));
        assert!(editor.add("custom"));
        assert_eq!(editor.tags(), &["lịch sử".to_string(), "custom".to_string()]);

        assert!(!editor.suggestions().contains(&"lịch sử"));
        assert_eq!(editor.suggestions().len(), mock::PRESET_TAGS.len() - 1);

        editor.remove("lịch sử");
        assert_eq!(editor.into_tags(), vec!["custom".to_string()]);
    }

    #[test]
    fn test_file_toggle_and_counts() {
        let mut files = DatasetFiles::seeded();
        assert_eq!(files.toggle("f3").unwrap(), true);
        assert_eq!(files.toggle("f3").unwrap(), false);
        assert!(files.toggle("f9").is_err());
        assert_eq!(files.status_counts(), (1, 1, 1));
        assert_eq!(files.total_chunks(), 77);
    }

    #[test]
    fn test_general_settings_apply() {
        let catalog = DatasetCatalog::seeded();
        let dataset = catalog.get("ds-001").unwrap();
        let mut general = GeneralSettings::from_dataset(dataset);
        general.name = " Phật học nâng cao ".to_string();

        let updated = general.apply_to(dataset).unwrap();
        assert_eq!(updated.name, "Phật học nâng cao");
        assert_eq!(updated.tags, dataset.tags);

        general.name = String::new();
        assert!(general.apply_to(dataset).is_err());
    }

    #[test]
    fn test_chunk_settings_snap() {
        let mut settings = ChunkSettings::default();
        settings.set_chunk_size(700.0);
        assert_eq!(settings.chunk_size, 640);
        settings.set_raptor_max_token(100.0);
        assert_eq!(settings.raptor.max_token, 512);
        settings.set_raptor_max_cluster(75.0);
        assert_eq!(settings.raptor.max_cluster, 50);
        settings.set_auto_keyword(3.4);
        assert_eq!(settings.auto_keyword, 3);
    }
}

//! RAGFlow Admin Chunks - File Chunk Viewer
//!
//! Synthesises the chunk list and the extracted source text shown when a file
//! is opened from a dataset's file list.

use crate::error::{ConsoleError, Result};
use crate::types::{Chunk, DatasetFile};
use crate::utils::truncate_chars;

/// Characters kept per chunk in the compact layout.
pub const ELLIPSIS_CHARS: usize = 160;

const CHUNK_BODY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

/// Layout of the chunk column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkViewMode {
    Full,
    #[default]
    Ellipsis,
}

impl ChunkViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ChunkViewMode::Full => "Full Text",
            ChunkViewMode::Ellipsis => "Ellipsis",
        }
    }

    /// Text to render for `content` in this layout.
    pub fn display(&self, content: &str) -> String {
        match self {
            ChunkViewMode::Full => content.to_string(),
            ChunkViewMode::Ellipsis => truncate_chars(content, ELLIPSIS_CHARS),
        }
    }
}

/// One enabled chunk per declared chunk of `file`, numbered from 1.
pub fn synthesize_chunks(file: &DatasetFile) -> Vec<Chunk> {
    (1..=file.chunk_count)
        .map(|position| Chunk {
            id: format!("chunk-{}", position),
            content: format!("Đây là nội dung của chunk {}. {}", position, CHUNK_BODY),
            enabled: true,
            position,
        })
        .collect()
}

/// Extracted text of `file` as shown in the left column.
pub fn original_text(file: &DatasetFile) -> String {
    format!(
        "# {name}\n\n\
         ## Nội dung gốc của tài liệu\n\n\
         Đây là nội dung markdown hoặc plaintext được trích xuất từ file gốc.\n\n\
         ### Đoạn 1\n\
         Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.\n\n\
         ### Đoạn 2\n\
         Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.\n\n\
         ### Đoạn 3\n\
         Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
        name = file.name
    )
}

/// Chunk list of the open file with its enable switches.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkBoard {
    chunks: Vec<Chunk>,
    pub mode: ChunkViewMode,
}

impl ChunkBoard {
    pub fn for_file(file: &DatasetFile) -> Self {
        Self {
            chunks: synthesize_chunks(file),
            mode: ChunkViewMode::default(),
        }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn enabled_count(&self) -> usize {
        self.chunks.iter().filter(|c| c.enabled).count()
    }

    /// Flip one chunk's enabled flag and return the new value.
    pub fn toggle_chunk(&mut self, id: &str) -> Result<bool> {
        let chunk = self
            .chunks
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ConsoleError::ChunkNotFound(id.to_string()))?;
        chunk.enabled = !chunk.enabled;
        log::debug!("chunk {} enabled={}", id, chunk.enabled);
        Ok(chunk.enabled)
    }

    pub fn display_content(&self, chunk: &Chunk) -> String {
        self.mode.display(&chunk.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn file(chunks: u32) -> DatasetFile {
        let mut file = mock::seed_files().remove(0);
        file.chunk_count = chunks;
        file
    }

    #[test]
    fn test_synthesize_chunks() {
        let chunks = synthesize_chunks(&file(3));
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].id, "chunk-1");
        assert_eq!(chunks[2].position, 3);
        assert!(chunks.iter().all(|c| c.enabled));
        assert!(chunks[1].content.starts_with("Đây là nội dung của chunk 2."));

        assert!(synthesize_chunks(&file(0)).is_empty());
    }

    #[test]
    fn test_original_text_heading() {
        let f = file(1);
        assert!(original_text(&f).starts_with("# kinh_trung_bo_tap_1.pdf\n"));
    }

    #[test]
    fn test_toggle_chunk() {
        let mut board = ChunkBoard::for_file(&file(4));
        assert_eq!(board.mode, ChunkViewMode::Ellipsis);
        assert!(!board.toggle_chunk("chunk-2").unwrap());
        assert_eq!(board.enabled_count(), 3);
        assert!(board.toggle_chunk("chunk-2").unwrap());
        assert!(board.toggle_chunk("chunk-9").unwrap_err().is_not_found());
    }

    #[test]
    fn test_view_mode_display() {
        let board = ChunkBoard::for_file(&file(1));
        let chunk = &board.chunks()[0];
        let short = board.display_content(chunk);
        assert_eq!(short.chars().count(), ELLIPSIS_CHARS + 1);
        assert!(short.ends_with('…'));
        assert_eq!(ChunkViewMode::Full.display(&chunk.content), chunk.content);
    }
}

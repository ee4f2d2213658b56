//! Rendering result with metadata and statistics.

use crate::model::{Document, Element, Metadata};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: RenderStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }
}

/// Element and text counts for a rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of section headers
    pub section_count: u32,

    /// Number of subsection headers
    pub subsection_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of bullet items
    pub bullet_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Total number of table rows, header rows included
    pub table_row_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every element of a document without rendering it.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for element in doc.elements() {
            stats.add_element(element);
            if let Some(text) = element.plain_text() {
                stats.count_text(&text);
            }
        }
        stats
    }

    /// Count one element.
    pub fn add_element(&mut self, element: &Element) {
        match element {
            Element::SectionHeader { .. } => self.section_count += 1,
            Element::SubsectionHeader { .. } => self.subsection_count += 1,
            Element::Paragraph { .. } => self.paragraph_count += 1,
            Element::BulletItem { .. } => self.bullet_count += 1,
            Element::Table(table) => {
                self.table_count += 1;
                self.table_row_count += table.row_count() as u32;
            }
            Element::Spacer { .. } => {}
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

//! Element types.

use super::{FormattedText, Table};
use serde::{Deserialize, Serialize};

/// A single renderable unit of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A top-level section header
    SectionHeader {
        /// Header text without markers
        text: String,
    },

    /// A subsection header
    SubsectionHeader {
        /// Header text without the trailing colon
        text: String,
    },

    /// A paragraph of inline-formatted text
    Paragraph {
        /// Formatted content
        text: FormattedText,
    },

    /// A bullet list item
    BulletItem {
        /// Formatted content
        text: FormattedText,
    },

    /// A table with one header row
    Table(Table),

    /// Vertical whitespace; renderers may ignore it
    Spacer {
        /// Size hint in points
        size: f32,
    },
}

impl Element {
    /// Create a section header.
    pub fn section_header(text: impl Into<String>) -> Self {
        Element::SectionHeader { text: text.into() }
    }

    /// Create a subsection header.
    pub fn subsection_header(text: impl Into<String>) -> Self {
        Element::SubsectionHeader { text: text.into() }
    }

    /// Create a paragraph.
    pub fn paragraph(text: FormattedText) -> Self {
        Element::Paragraph { text }
    }

    /// Create a bullet item.
    pub fn bullet(text: FormattedText) -> Self {
        Element::BulletItem { text }
    }

    /// Create a spacer.
    pub fn spacer(size: f32) -> Self {
        Element::Spacer { size }
    }

    /// Check if this element is a header of either level.
    pub fn is_header(&self) -> bool {
        matches!(
            self,
            Element::SectionHeader { .. } | Element::SubsectionHeader { .. }
        )
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Element::Table(_))
    }

    /// Check if this element is a spacer.
    pub fn is_spacer(&self) -> bool {
        matches!(self, Element::Spacer { .. })
    }

    /// Plain text of the element, or `None` for spacers.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Element::SectionHeader { text } | Element::SubsectionHeader { text } => {
                Some(text.clone())
            }
            Element::Paragraph { text } | Element::BulletItem { text } => Some(text.plain_text()),
            Element::Table(t) => Some(t.plain_text()),
            Element::Spacer { .. } => None,
        }
    }
}

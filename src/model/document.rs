//! Document-level types.

use super::{Element, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parsed report document.
///
/// Elements are kept in rendering order. A document is assembled once by
/// the parsers and is not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Caller-supplied display metadata
    pub metadata: Metadata,

    /// Content elements in rendering order
    elements: Vec<Element>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from already-built elements.
    pub fn from_elements(metadata: Metadata, elements: Vec<Element>) -> Self {
        Self { metadata, elements }
    }

    /// Replace the metadata, keeping the elements.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Elements in rendering order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements, spacers included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document has any elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements with spacers filtered out.
    pub fn content_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| !e.is_spacer())
    }

    /// All tables in the document.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(|e| match e {
            Element::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|e| e.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Report metadata passed through verbatim from the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Report title
    pub title: Option<String>,

    /// Report subtitle
    pub subtitle: Option<String>,

    /// Free-form description shown under the title
    pub description: Option<String>,

    /// Generation timestamp
    pub generated: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Check if no metadata field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subtitle.is_none()
            && self.description.is_none()
            && self.generated.is_none()
    }

    /// The generation timestamp in the `YYYY-MM-DD HH:MM:SS` form used in
    /// report headers.
    pub fn generated_label(&self) -> Option<String> {
        self.generated
            .map(|ts| format!("Generated: {}", ts.format("%Y-%m-%d %H:%M:%S")))
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref subtitle) = self.subtitle {
            lines.push(format!("subtitle: \"{}\"", escape_yaml(subtitle)));
        }
        if let Some(ref description) = self.description {
            lines.push(format!("description: \"{}\"", escape_yaml(description)));
        }
        if let Some(ref generated) = self.generated {
            lines.push(format!("generated: {}", generated.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

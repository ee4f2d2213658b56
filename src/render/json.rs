//! JSON rendering for report documents.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    to_json_value(doc, format)
}

/// Serialize any model value (a `FlatTable`, stats, ...) to JSON.
pub fn to_json_value<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, FormattedText, Metadata};

    #[test]
    fn test_to_json_pretty() {
        let doc = Document::from_elements(
            Metadata::with_title("Test"),
            vec![Element::paragraph(FormattedText::from_markup("Hello"))],
        );

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"type\": \"paragraph\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let doc = Document::from_elements(
            Metadata::default(),
            vec![Element::section_header("Sales")],
        );

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains(r#"{"type":"section_header","text":"Sales"}"#));

        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}

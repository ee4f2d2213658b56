//! Plain text rendering for report documents.

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Markup is removed and table rows become tab-separated lines.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut parts: Vec<String> = Vec::new();

    if options.include_title_block {
        let metadata = &doc.metadata;
        parts.extend(metadata.title.iter().cloned());
        parts.extend(metadata.subtitle.iter().cloned());
        parts.extend(metadata.description.iter().cloned());
        parts.extend(metadata.generated_label());
    }

    let body = doc.plain_text();
    if !body.is_empty() {
        parts.push(body);
    }

    Ok(parts.join("\n\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, FormattedText, Metadata};

    #[test]
    fn test_to_text() {
        let doc = Document::from_elements(
            Metadata::with_title("Report"),
            vec![
                Element::section_header("Sales"),
                Element::paragraph(FormattedText::from_markup("Revenue <b>$5</b>")),
                Element::spacer(12.0),
            ],
        );

        let result = to_text(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(result, "Report\n\nSales\n\nRevenue $5");

        let options = RenderOptions::new().with_title_block(false);
        let result = to_text(&doc, &options).unwrap();
        assert_eq!(result, "Sales\n\nRevenue $5");
    }
}

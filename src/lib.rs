//! # reportdoc
//!
//! Turns loosely structured report content into typed documents.
//!
//! Input comes either as free-form annotated text (headers, bullets,
//! pipe tables, `**bold**`, currency and percentages) or as structured
//! values (sections, key/value mappings, record lists). The output is a
//! [`Document`] of typed elements that can be rendered to Markdown, plain
//! text, JSON or a styled HTML page. Column mappings can also be widened
//! into a [`FlatTable`] for CSV export.
//!
//! ## Quick Start
//!
//! ```
//! use reportdoc::{build_document, render, ReportInput};
//!
//! fn main() -> reportdoc::Result<()> {
//!     let text = "SECTION 1: Sales\n| Month | Revenue |\n| Jan | $1,000 |\nKey Insight: grew 10%";
//!     let doc = build_document(ReportInput::from(text))?;
//!
//!     let markdown = render::to_markdown(&doc, &render::RenderOptions::default())?;
//!     assert!(markdown.contains("## SECTION 1: Sales"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line classification**: section and subsection headers, bullets, tables
//! - **Inline highlighting**: bold spans, currency, percentages, trend arrows
//! - **Structured input**: nested sections, key/value mappings, record lists
//! - **Multiple output formats**: Markdown, plain text, JSON, HTML, CSV
//! - **Parallel processing**: batches are built with Rayon

pub mod error;
pub mod input;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, LimitKind, Result};
pub use input::{ReportInput, Section, SectionContent};
pub use model::{
    Document, Element, FlatTable, FormattedText, Metadata, Table, TextRun, TextStyle, Tone,
};
pub use parser::{ParseOptions, StructuredParser, TextParser};
pub use render::{JsonFormat, RenderOptions, RenderStats, StyleConfig, TableStyle};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde_json::Value;

/// Build a document from report input with default options.
///
/// # Example
///
/// ```
/// use reportdoc::{build_document, Element, ReportInput};
///
/// let doc = build_document(ReportInput::from("## Overview\nAll good.")).unwrap();
/// assert_eq!(doc.elements()[0], Element::section_header("Overview"));
/// ```
pub fn build_document(input: ReportInput) -> Result<Document> {
    build_document_with_options(input, &ParseOptions::default(), Metadata::default())
}

/// Build a document with custom options and caller metadata.
///
/// The metadata is attached verbatim.
pub fn build_document_with_options(
    input: ReportInput,
    options: &ParseOptions,
    metadata: Metadata,
) -> Result<Document> {
    let elements = StructuredParser::new(options).parse_input(&input)?;
    log::debug!(
        "built document from {} input: {} element(s)",
        input.kind(),
        elements.len()
    );
    Ok(Document::from_elements(metadata, elements))
}

/// Build many documents.
///
/// Results keep the input order. Inputs are processed in parallel unless
/// `options.parallel` is off.
pub fn build_documents(inputs: Vec<ReportInput>, options: &ParseOptions) -> Vec<Result<Document>> {
    let build = |input: ReportInput| build_document_with_options(input, options, Metadata::default());

    if options.parallel && inputs.len() > 1 {
        inputs.into_par_iter().map(build).collect()
    } else {
        inputs.into_iter().map(build).collect()
    }
}

/// Widen any payload into a flat table for delimited export.
///
/// # Example
///
/// ```
/// use reportdoc::{render, widen_to_flat_table};
/// use serde_json::json;
///
/// let table = widen_to_flat_table(&json!({"dates": ["2024-01", "2024-02"], "amount": 500}));
/// assert_eq!(render::to_csv(&table), "dates,amount\n2024-01,500\n2024-02,\n");
/// ```
pub fn widen_to_flat_table(value: &Value) -> FlatTable {
    parser::widen_value(value)
}

/// Builder for building and rendering report documents.
///
/// # Example
///
/// ```
/// use reportdoc::{ReportDoc, ReportInput};
///
/// let markdown = ReportDoc::new()
///     .with_title("Monthly Sales")
///     .with_frontmatter()
///     .build(ReportInput::from("Revenue **$5,000**"))?
///     .to_markdown()?;
/// assert!(markdown.contains("# Monthly Sales"));
/// # Ok::<(), reportdoc::Error>(())
/// ```
pub struct ReportDoc {
    metadata: Metadata,
    parse_options: ParseOptions,
    render_options: RenderOptions,
    style: StyleConfig,
}

impl ReportDoc {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
            style: StyleConfig::default(),
        }
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    /// Set the report subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.metadata.subtitle = Some(subtitle.into());
        self
    }

    /// Set the report description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = Some(description.into());
        self
    }

    /// Set the generation timestamp.
    pub fn with_generated_at(mut self, generated: DateTime<Utc>) -> Self {
        self.metadata.generated = Some(generated);
        self
    }

    /// Set parsing options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set the style used for HTML output.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Build the document and return a result wrapper.
    pub fn build(self, input: ReportInput) -> Result<ReportResult> {
        let document = build_document_with_options(input, &self.parse_options, self.metadata)?;
        Ok(ReportResult {
            document,
            render_options: self.render_options,
            style: self.style,
        })
    }
}

impl Default for ReportDoc {
    fn default() -> Self {
        Self::new()
    }
}

/// A built document together with its render settings.
pub struct ReportResult {
    /// The built document
    pub document: Document,
    render_options: RenderOptions,
    style: StyleConfig,
}

impl ReportResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to a styled HTML page.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.style)
    }

    /// Element statistics.
    pub fn stats(&self) -> RenderStats {
        RenderStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_builder_metadata_verbatim() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let result = ReportDoc::new()
            .with_title("  Sales  ")
            .with_subtitle("Q1")
            .with_description("Numbers")
            .with_generated_at(ts)
            .build(ReportInput::from(""))
            .unwrap();

        let metadata = &result.document().metadata;
        assert_eq!(metadata.title.as_deref(), Some("  Sales  "));
        assert_eq!(metadata.subtitle.as_deref(), Some("Q1"));
        assert_eq!(metadata.generated, Some(ts));
        assert!(result.document().is_empty());
    }

    #[test]
    fn test_builder_options() {
        let builder = ReportDoc::new()
            .with_options(ParseOptions::new().sequential())
            .with_frontmatter();
        assert!(!builder.parse_options.parallel);
        assert!(builder.render_options.include_frontmatter);
    }

    #[test]
    fn test_build_document_text() {
        let doc = build_document(ReportInput::from("SECTION 2: Costs\n- rent")).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.elements()[0], Element::section_header("SECTION 2: Costs"));
    }

    #[test]
    fn test_build_document_oversized() {
        let options = ParseOptions::new().with_max_input_bytes(4);
        let err = build_document_with_options(
            ReportInput::from("too long"),
            &options,
            Metadata::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::OversizedInput {
                kind: LimitKind::Bytes,
                ..
            }
        ));
    }

    #[test]
    fn test_build_documents_keeps_order() {
        let inputs: Vec<ReportInput> = (0..20)
            .map(|i| ReportInput::from(format!("## Part {i}")))
            .collect();

        for options in [ParseOptions::default(), ParseOptions::new().sequential()] {
            let docs = build_documents(inputs.clone(), &options);
            assert_eq!(docs.len(), 20);
            for (i, doc) in docs.into_iter().enumerate() {
                assert_eq!(
                    doc.unwrap().elements()[0],
                    Element::section_header(format!("Part {i}"))
                );
            }
        }
    }

    #[test]
    fn test_build_documents_isolates_errors() {
        let options = ParseOptions::new().with_max_lines(1);
        let docs = build_documents(
            vec![ReportInput::from("ok"), ReportInput::from("a\nb")],
            &options,
        );
        assert!(docs[0].is_ok());
        assert!(docs[1].as_ref().unwrap_err().is_oversized());
    }

    #[test]
    fn test_widen_to_flat_table() {
        let table = widen_to_flat_table(&json!({"x": [1, 2], "y": "a"}));
        assert_eq!(table.headers(), &["x", "y"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_result_outputs() {
        let result = ReportDoc::new()
            .with_title("T")
            .build(ReportInput::from("Growth 5% ↑"))
            .unwrap();

        assert!(result.to_markdown().unwrap().contains("**5%**"));
        assert_eq!(result.to_text().unwrap(), "T\n\nGrowth 5% ↑");
        assert!(result.to_html().unwrap().contains("tone-up"));
        assert!(result.to_json(JsonFormat::Compact).unwrap().contains("\"paragraph\""));
        assert_eq!(result.stats().paragraph_count, 1);
    }
}

//! Markdown rendering for report documents.

use crate::error::Result;
use crate::model::{Document, Element, FormattedText, Metadata, Table, TextRun};

use super::{RenderOptions, RenderResult, RenderStats, TableStyle};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to Markdown with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;

        // Count words and characters in final content
        self.stats.count_text(&content);

        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
            output.push('\n');
        }

        if self.options.include_title_block {
            self.render_title_block(&mut output, &doc.metadata);
        }

        for element in doc.elements() {
            self.render_element(&mut output, element);
        }

        Ok(output.trim().to_string())
    }

    fn render_title_block(&self, output: &mut String, metadata: &Metadata) {
        if let Some(title) = &metadata.title {
            output.push_str(&format!("# {}\n\n", self.escape(title)));
        }
        if let Some(subtitle) = &metadata.subtitle {
            output.push_str(&format!("## {}\n\n", self.escape(subtitle)));
        }
        if let Some(description) = &metadata.description {
            output.push_str(&self.escape(description));
            output.push_str("\n\n");
        }
        if let Some(label) = metadata.generated_label() {
            output.push_str(&format!("*{}*\n\n", label));
        }
    }

    fn render_element(&mut self, output: &mut String, element: &Element) {
        if self.options.collect_stats {
            self.stats.add_element(element);
        }

        match element {
            Element::SectionHeader { text } => {
                ensure_blank_line(output);
                output.push_str(&format!("## {}\n\n", self.escape(text)));
            }
            Element::SubsectionHeader { text } => {
                ensure_blank_line(output);
                output.push_str(&format!("### {}\n\n", self.escape(text)));
            }
            Element::Paragraph { text } => {
                ensure_blank_line(output);
                self.render_formatted(output, text);
                output.push_str("\n\n");
            }
            Element::BulletItem { text } => {
                // consecutive bullets form one list
                output.push(self.options.list_marker);
                output.push(' ');
                self.render_formatted(output, text);
                output.push('\n');
            }
            Element::Table(table) => {
                ensure_blank_line(output);
                match self.options.table_style {
                    TableStyle::Markdown => self.render_table_markdown(output, table),
                    TableStyle::Html => self.render_table_html(output, table),
                }
            }
            Element::Spacer { .. } => {}
        }
    }

    fn render_formatted(&self, output: &mut String, text: &FormattedText) {
        for run in text.runs() {
            self.render_text_run(output, &run);
        }
    }

    fn render_text_run(&self, output: &mut String, run: &TextRun) {
        let text = self.escape(&run.text);

        // Markdown has no color; tones only keep their bold
        if run.style.bold && !text.trim().is_empty() {
            let leading = &text[..text.len() - text.trim_start().len()];
            let trailing = &text[text.trim_end().len()..];
            output.push_str(leading);
            output.push_str("**");
            output.push_str(text.trim());
            output.push_str("**");
            output.push_str(trailing);
        } else {
            output.push_str(&text);
        }
    }

    fn render_table_markdown(&self, output: &mut String, table: &Table) {
        for (i, row) in table.rows().iter().enumerate() {
            output.push('|');
            for cell in row {
                output.push_str(&format!(" {} |", escape_cell(cell)));
            }
            output.push('\n');

            if i + 1 == table.header_rows() as usize {
                output.push('|');
                for _ in 0..table.column_count() {
                    output.push_str(" --- |");
                }
                output.push('\n');
            }
        }

        output.push('\n');
    }

    fn render_table_html(&self, output: &mut String, table: &Table) {
        output.push_str("<table>\n<thead>\n");
        render_html_row(output, table.header(), "th");
        output.push_str("</thead>\n<tbody>\n");
        for row in table.body() {
            render_html_row(output, row, "td");
        }
        output.push_str("</tbody>\n</table>\n\n");
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

fn render_html_row(output: &mut String, cells: &[String], tag: &str) {
    output.push_str("<tr>");
    for cell in cells {
        output.push_str(&format!("<{tag}>{}</{tag}>", super::html::escape_html(cell)));
    }
    output.push_str("</tr>\n");
}

/// Terminate a bullet list before a block element.
fn ensure_blank_line(output: &mut String) {
    if output.ends_with('\n') && !output.ends_with("\n\n") {
        output.push('\n');
    }
}

/// Escape special Markdown characters.
/// Only characters that could be misread as inline syntax are escaped.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace(['\r', '\n'], " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn doc(elements: Vec<Element>) -> Document {
        Document::from_elements(Metadata::default(), elements)
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("[link]"), "\\[link\\]");
        assert_eq!(escape_markdown("$1,000 (10%)"), "$1,000 (10%)");
    }

    #[test]
    fn test_render_headers() {
        let doc = doc(vec![
            Element::section_header("SECTION 1: Sales"),
            Element::subsection_header("Key Insight"),
        ]);
        let result = to_markdown(&doc, &RenderOptions::new()).unwrap();
        assert_eq!(result, "## SECTION 1: Sales\n\n### Key Insight");
    }

    #[test]
    fn test_render_bold_runs() {
        let doc = doc(vec![Element::paragraph(FormattedText::from_markup(
            "grew <b><tone name=\"proportion\">10%</tone></b> ok",
        ))]);
        let result = to_markdown(&doc, &RenderOptions::new()).unwrap();
        assert_eq!(result, "grew **10%** ok");
    }

    #[test]
    fn test_render_bullets_then_paragraph() {
        let doc = doc(vec![
            Element::bullet(FormattedText::from_markup("one")),
            Element::bullet(FormattedText::from_markup("two")),
            Element::paragraph(FormattedText::from_markup("after")),
        ]);
        let options = RenderOptions::new().with_list_marker('*');
        let result = to_markdown(&doc, &options).unwrap();
        assert_eq!(result, "* one\n* two\n\nafter");
    }

    #[test]
    fn test_render_table() {
        let table = Table::from_rows(vec![
            strings(&["Month", "Revenue"]),
            strings(&["Jan", "$1,000"]),
        ])
        .unwrap();
        let doc = doc(vec![Element::spacer(12.0), Element::Table(table), Element::spacer(12.0)]);
        let result = to_markdown(&doc, &RenderOptions::new()).unwrap();
        assert_eq!(
            result,
            "| Month | Revenue |\n| --- | --- |\n| Jan | $1,000 |"
        );
    }

    #[test]
    fn test_render_table_html() {
        let table = Table::from_rows(vec![strings(&["A"]), strings(&["<1>"])]).unwrap();
        let doc = doc(vec![Element::Table(table)]);
        let options = RenderOptions::new().with_table_style(TableStyle::Html);
        let result = to_markdown(&doc, &options).unwrap();
        assert!(result.contains("<th>A</th>"));
        assert!(result.contains("<td>&lt;1&gt;</td>"));
    }

    #[test]
    fn test_cell_pipe_escaped() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("line\nbreak"), "line break");
    }

    #[test]
    fn test_render_title_block() {
        let metadata = Metadata {
            title: Some("Monthly Sales".to_string()),
            description: Some("Figures for March".to_string()),
            ..Default::default()
        };
        let doc = Document::from_elements(metadata, vec![Element::section_header("Totals")]);
        let result = to_markdown(&doc, &RenderOptions::new()).unwrap();
        assert!(result.starts_with("# Monthly Sales\n\nFigures for March\n\n## Totals"));

        let options = RenderOptions::new().with_title_block(false);
        let result = to_markdown(&doc, &options).unwrap();
        assert_eq!(result, "## Totals");
    }

    #[test]
    fn test_render_with_frontmatter() {
        let doc = Document::new().with_metadata(Metadata::with_title("Test Doc"));
        let options = RenderOptions::new().with_frontmatter(true);
        let result = to_markdown(&doc, &options).unwrap();
        assert!(result.starts_with("---"));
        assert!(result.contains("title: \"Test Doc\""));
    }

    #[test]
    fn test_render_with_stats() {
        let doc = doc(vec![
            Element::section_header("A"),
            Element::paragraph(FormattedText::from_markup("one two")),
        ]);
        let result = to_markdown_with_stats(&doc, &RenderOptions::new()).unwrap();
        assert_eq!(result.stats.section_count, 1);
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.content, "## A\n\none two");
    }
}

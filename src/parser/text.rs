//! Free-text report parser.
//!
//! A single forward pass over the input lines. The parser is a small state
//! machine: it is either scanning line by line, or collecting a run of
//! table lines. A table run ends at the first line without a delimiter;
//! that line is then handled like any other.

use crate::error::Result;
use crate::model::{Document, Element, FormattedText, Metadata};

use super::classify::{classify, LineRole, TABLE_DELIMITER};
use super::inline::{format_inline, strip_pictographs};
use super::table::extract_table;
use super::ParseOptions;

/// Parser for free-form annotated text.
pub struct TextParser<'o> {
    options: &'o ParseOptions,
}

/// Parser state between lines.
#[derive(Debug)]
enum State<'a> {
    /// Looking at lines one by one
    Scanning,
    /// Collecting consecutive delimiter lines
    InTableRun(Vec<&'a str>),
}

impl<'o> TextParser<'o> {
    /// Create a parser with the given options.
    pub fn new(options: &'o ParseOptions) -> Self {
        Self { options }
    }

    /// Parse text into a document with empty metadata.
    pub fn parse(&self, text: &str) -> Result<Document> {
        Ok(Document::from_elements(
            Metadata::default(),
            self.parse_elements(text)?,
        ))
    }

    /// Parse text into an element list.
    pub fn parse_elements(&self, text: &str) -> Result<Vec<Element>> {
        self.options.check_text(text)?;

        let mut elements = Vec::new();
        let mut state = State::Scanning;
        for line in text.lines() {
            state = self.step(state, line, &mut elements);
        }
        if let State::InTableRun(run) = state {
            self.close_run(&run, &mut elements);
        }

        log::trace!("parsed {} element(s) from text", elements.len());
        Ok(elements)
    }

    /// Advance the state machine by one line.
    fn step<'a>(&self, state: State<'a>, line: &'a str, out: &mut Vec<Element>) -> State<'a> {
        match state {
            State::InTableRun(mut run) if line.contains(TABLE_DELIMITER) => {
                run.push(line);
                State::InTableRun(run)
            }
            State::InTableRun(run) => {
                self.close_run(&run, out);
                self.scan(line, out)
            }
            State::Scanning => self.scan(line, out),
        }
    }

    fn scan<'a>(&self, line: &'a str, out: &mut Vec<Element>) -> State<'a> {
        match classify(line) {
            LineRole::TableStart => State::InTableRun(vec![line]),
            role => {
                self.emit(role, out);
                State::Scanning
            }
        }
    }

    fn emit(&self, role: LineRole, out: &mut Vec<Element>) {
        match role {
            LineRole::Skip | LineRole::TableStart => {}
            LineRole::SectionHeader(text) => {
                if let Some(text) = header_text(&text) {
                    out.push(Element::section_header(text));
                }
            }
            LineRole::SubsectionHeader(text) => {
                if let Some(text) = header_text(&text) {
                    out.push(Element::subsection_header(text));
                }
            }
            LineRole::Bullet(body) => {
                if let Some(text) = formatted(&body) {
                    out.push(Element::bullet(text));
                }
            }
            LineRole::LabeledParagraph { label, body } => {
                if let Some(label) = header_text(&label) {
                    out.push(Element::subsection_header(label));
                }
                if let Some(text) = formatted(&body) {
                    out.push(Element::paragraph(text));
                }
            }
            LineRole::Paragraph(body) => {
                if let Some(text) = formatted(&body) {
                    out.push(Element::paragraph(text));
                }
            }
        }
    }

    fn close_run(&self, run: &[&str], out: &mut Vec<Element>) {
        let Some(table) = extract_table(run, self.options.table_width) else {
            return;
        };
        if self.options.table_spacers {
            out.push(Element::spacer(self.options.spacer_size));
            out.push(Element::Table(table));
            out.push(Element::spacer(self.options.spacer_size));
        } else {
            out.push(Element::Table(table));
        }
    }
}

/// Header text without pictographs, or `None` if nothing is left.
fn header_text(text: &str) -> Option<String> {
    let text = strip_pictographs(text);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Inline-format a body, dropping it if nothing visible is left.
fn formatted(body: &str) -> Option<FormattedText> {
    let text = format_inline(body);
    let trimmed = text.as_markup().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(FormattedText::from_markup(trimmed))
    }
}

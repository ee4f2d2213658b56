//! Structured report parser.
//!
//! Turns the non-text input shapes into document elements. Section text is
//! handed to the [`TextParser`], so a section body behaves exactly like a
//! free-text report.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::input::{ReportInput, Section, SectionContent};
use crate::model::{Element, Table};

use super::inline::format_inline;
use super::table::table_from_records;
use super::text::TextParser;
use super::widen::stringify;
use super::ParseOptions;

/// Header row of a key/value table.
const KEY_VALUE_HEADER: [&str; 2] = ["Key", "Value"];

/// Header of the single-cell table for values of no recognized shape.
pub const DATA_HEADER: &str = "Data";

/// Parser for every [`ReportInput`] shape.
pub struct StructuredParser<'o> {
    options: &'o ParseOptions,
    text: TextParser<'o>,
}

impl<'o> StructuredParser<'o> {
    /// Create a parser with the given options.
    pub fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            text: TextParser::new(options),
        }
    }

    /// Parse any input shape into an element list.
    pub fn parse_input(&self, input: &ReportInput) -> Result<Vec<Element>> {
        log::debug!("building elements from {} input", input.kind());
        match input {
            ReportInput::Text(text) => self.text.parse_elements(text),
            ReportInput::KeyValueMapping(map) => Ok(self.parse_mapping(map)),
            ReportInput::SectionedDocument(sections) => self.parse_sections(sections),
            ReportInput::RecordList(records) => Ok(self.parse_records(records)),
            ReportInput::Unstructured(value) => Ok(self.parse_unstructured(value)),
        }
    }

    /// Parse ordered sections.
    pub fn parse_sections(&self, sections: &[Section]) -> Result<Vec<Element>> {
        let mut elements = Vec::new();
        for section in sections {
            self.parse_section(section, 1, &mut elements)?;
        }
        Ok(elements)
    }

    fn parse_section(&self, section: &Section, depth: usize, out: &mut Vec<Element>) -> Result<()> {
        self.options.check_depth(depth)?;

        if let Some(title) = &section.title {
            let title = title.trim();
            if !title.is_empty() {
                out.push(Element::section_header(title));
            }
        }

        match &section.content {
            SectionContent::None => {}
            SectionContent::Text(text) => out.extend(self.text.parse_elements(text)?),
            SectionContent::Items(items) => {
                for item in items {
                    let text = format_inline(stringify(item).trim());
                    if !text.is_empty() {
                        out.push(Element::paragraph(text));
                    }
                }
            }
        }

        if let Some(value) = &section.table {
            match table_from_records(value, self.options.table_width) {
                Some(table) => self.push_table(table, out),
                None => log::debug!("section table dropped: not a usable table value"),
            }
        }

        for nested in &section.sections {
            self.parse_section(nested, depth + 1, out)?;
        }
        Ok(())
    }

    /// Parse a flat mapping into a single key/value table.
    ///
    /// An empty mapping produces no elements.
    pub fn parse_mapping(&self, map: &Map<String, Value>) -> Vec<Element> {
        let mut rows = vec![KEY_VALUE_HEADER.iter().map(|h| h.to_string()).collect()];
        rows.extend(
            map.iter()
                .map(|(key, value)| vec![key.clone(), stringify(value)]),
        );

        let mut elements = Vec::new();
        if let Some(table) = Table::from_rows(rows) {
            self.push_table(table.with_even_widths(self.options.table_width), &mut elements);
        }
        elements
    }

    /// Parse a list of records into a single table.
    ///
    /// A list that is not records or rows falls back to a single `Data`
    /// cell. An empty list produces no elements.
    pub fn parse_records(&self, records: &[Value]) -> Vec<Element> {
        if records.is_empty() {
            return Vec::new();
        }

        let value = Value::Array(records.to_vec());
        match table_from_records(&value, self.options.table_width) {
            Some(table) => {
                let mut elements = Vec::new();
                self.push_table(table, &mut elements);
                elements
            }
            None => self.parse_unstructured(&value),
        }
    }

    /// Show a value of no recognized shape as a one-cell table under
    /// [`DATA_HEADER`].
    pub fn parse_unstructured(&self, value: &Value) -> Vec<Element> {
        log::debug!("unsupported input shape, using a single `{DATA_HEADER}` cell");
        let rows = vec![vec![DATA_HEADER.to_string()], vec![stringify(value)]];

        let mut elements = Vec::new();
        if let Some(table) = Table::from_rows(rows) {
            self.push_table(table.with_even_widths(self.options.table_width), &mut elements);
        }
        elements
    }

    fn push_table(&self, table: Table, out: &mut Vec<Element>) {
        if self.options.table_spacers {
            out.push(Element::spacer(self.options.spacer_size));
            out.push(Element::Table(table));
            out.push(Element::spacer(self.options.spacer_size));
        } else {
            out.push(Element::Table(table));
        }
    }
}

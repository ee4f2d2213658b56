//! Caller input shapes.
//!
//! Callers pick the variant that matches their payload instead of the
//! parser guessing from runtime types. [`ReportInput::from_json`] is the one
//! place where a JSON value is mapped onto a variant.

use serde_json::{Map, Value};

use crate::parser::stringify;

/// Deepest section nesting kept when mapping JSON. Deeper levels are
/// dropped, which still trips any smaller `max_depth` at parse time.
pub const MAX_SECTION_NESTING: usize = 128;

/// Report content handed to [`build_document`](crate::build_document).
#[derive(Debug, Clone, PartialEq)]
pub enum ReportInput {
    /// Free-form annotated text
    Text(String),

    /// Flat key/value pairs, rendered as a `Key` / `Value` table
    KeyValueMapping(Map<String, Value>),

    /// Ordered sections with titles, content and tables
    SectionedDocument(Vec<Section>),

    /// A list of records (or rows), rendered as one table
    RecordList(Vec<Value>),

    /// A value of no recognized shape, rendered as a single `Data` cell
    Unstructured(Value),
}

impl ReportInput {
    /// Map a JSON value onto an input variant.
    ///
    /// - strings become [`ReportInput::Text`]
    /// - objects with a `sections` array become [`ReportInput::SectionedDocument`]
    /// - other objects become [`ReportInput::KeyValueMapping`]
    /// - arrays become [`ReportInput::RecordList`]
    /// - any other scalar becomes [`ReportInput::Unstructured`]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(text) => ReportInput::Text(text),
            Value::Object(map) => match map.get("sections") {
                Some(Value::Array(sections)) => {
                    ReportInput::SectionedDocument(sections.iter().map(Section::from_json).collect())
                }
                _ => ReportInput::KeyValueMapping(map),
            },
            Value::Array(items) => ReportInput::RecordList(items),
            other => ReportInput::Unstructured(other),
        }
    }

    /// Parse a JSON string and map it onto an input variant.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_json(value))
    }

    /// Short name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ReportInput::Text(_) => "text",
            ReportInput::KeyValueMapping(_) => "mapping",
            ReportInput::SectionedDocument(_) => "sections",
            ReportInput::RecordList(_) => "records",
            ReportInput::Unstructured(_) => "unstructured",
        }
    }
}

impl From<String> for ReportInput {
    fn from(text: String) -> Self {
        ReportInput::Text(text)
    }
}

impl From<&str> for ReportInput {
    fn from(text: &str) -> Self {
        ReportInput::Text(text.to_string())
    }
}

/// One section of a sectioned document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    /// Optional section title
    pub title: Option<String>,

    /// Section body
    pub content: SectionContent,

    /// Optional table value (records, rows, or a column mapping)
    pub table: Option<Value>,

    /// Nested subsections
    pub sections: Vec<Section>,
}

impl Section {
    /// Create a section with a title and text content.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: SectionContent::Text(text.into()),
            ..Default::default()
        }
    }

    /// Set the table value.
    pub fn with_table(mut self, table: Value) -> Self {
        self.table = Some(table);
        self
    }

    /// Add a nested section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Map one JSON section entry.
    ///
    /// A bare string is taken as the section's text content. Nesting below
    /// [`MAX_SECTION_NESTING`] levels is dropped.
    pub fn from_json(value: &Value) -> Self {
        Self::from_json_at(value, 1)
    }

    fn from_json_at(value: &Value, depth: usize) -> Self {
        match value {
            Value::Object(map) => Self {
                title: map
                    .get("title")
                    .map(stringify)
                    .filter(|t| !t.trim().is_empty()),
                content: map
                    .get("content")
                    .map(SectionContent::from_json)
                    .unwrap_or_default(),
                table: map.get("table").filter(|t| !t.is_null()).cloned(),
                sections: match map.get("sections") {
                    Some(Value::Array(nested)) if depth < MAX_SECTION_NESTING => nested
                        .iter()
                        .map(|section| Section::from_json_at(section, depth + 1))
                        .collect(),
                    Some(Value::Array(_)) => {
                        log::debug!("dropping sections nested deeper than {MAX_SECTION_NESTING}");
                        Vec::new()
                    }
                    _ => Vec::new(),
                },
            },
            other => Self {
                content: SectionContent::from_json(other),
                ..Default::default()
            },
        }
    }
}

/// Body of a section.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SectionContent {
    /// No body
    #[default]
    None,

    /// Free text, parsed like a text report
    Text(String),

    /// A list of items, one paragraph each
    Items(Vec<Value>),
}

impl SectionContent {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => SectionContent::None,
            Value::String(text) => SectionContent::Text(text.clone()),
            Value::Array(items) => SectionContent::Items(items.clone()),
            other => SectionContent::Text(stringify(other)),
        }
    }
}

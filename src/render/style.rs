//! Visual style for style-aware renderers.

use serde::{Deserialize, Serialize};

use crate::model::Tone;

/// Page size of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// US Letter, 8.5 x 11 in
    #[default]
    Letter,
    /// ISO A4, 210 x 297 mm
    A4,
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
        }
    }
}

/// Colors, fonts and spacing used when rendering a report.
///
/// A style is an immutable value handed to the renderer; nothing reads it
/// from global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Color of currency amounts
    pub monetary_color: String,
    /// Color of percentages
    pub proportion_color: String,
    /// Color of upward trend markers
    pub up_color: String,
    /// Color of downward trend markers
    pub down_color: String,

    /// Font for the title and table headers
    pub heading_font: String,
    /// Font for body text and table cells
    pub body_font: String,
    /// Table header font size in points
    pub header_font_size: f32,
    /// Table body font size in points
    pub body_font_size: f32,

    /// Table header background
    pub table_header_background: String,
    /// Table header text color
    pub table_header_text: String,
    /// Table body background
    pub table_body_background: String,
    /// Table grid color
    pub table_grid_color: String,
    /// Table grid line width in points
    pub table_grid_width: f32,

    /// Space after the title in inches
    pub title_spacing: f32,
    /// Space after the description in inches
    pub description_spacing: f32,

    /// Page size
    pub page_size: PageSize,
}

impl StyleConfig {
    /// Create the default report style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for a tone.
    pub fn tone_color(&self, tone: Tone) -> &str {
        match tone {
            Tone::Monetary => &self.monetary_color,
            Tone::Proportion => &self.proportion_color,
            Tone::Up => &self.up_color,
            Tone::Down => &self.down_color,
        }
    }

    /// Set the color for a tone.
    pub fn with_tone_color(mut self, tone: Tone, color: impl Into<String>) -> Self {
        let color = color.into();
        match tone {
            Tone::Monetary => self.monetary_color = color,
            Tone::Proportion => self.proportion_color = color,
            Tone::Up => self.up_color = color,
            Tone::Down => self.down_color = color,
        }
        self
    }

    /// Set heading and body fonts.
    pub fn with_fonts(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.heading_font = heading.into();
        self.body_font = body.into();
        self
    }

    /// Set table header and body font sizes.
    pub fn with_font_sizes(mut self, header: f32, body: f32) -> Self {
        self.header_font_size = header;
        self.body_font_size = body;
        self
    }

    /// Set the table header colors.
    pub fn with_table_header(
        mut self,
        background: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.table_header_background = background.into();
        self.table_header_text = text.into();
        self
    }

    /// Set the table body background.
    pub fn with_table_body(mut self, background: impl Into<String>) -> Self {
        self.table_body_background = background.into();
        self
    }

    /// Set the table grid color and width.
    pub fn with_table_grid(mut self, color: impl Into<String>, width: f32) -> Self {
        self.table_grid_color = color.into();
        self.table_grid_width = width;
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Load a style from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            monetary_color: "#27ae60".to_string(),
            proportion_color: "#2980b9".to_string(),
            up_color: "#27ae60".to_string(),
            down_color: "#c0392b".to_string(),
            heading_font: "Helvetica-Bold".to_string(),
            body_font: "Helvetica".to_string(),
            header_font_size: 12.0,
            body_font_size: 10.0,
            table_header_background: "grey".to_string(),
            table_header_text: "whitesmoke".to_string(),
            table_body_background: "beige".to_string(),
            table_grid_color: "black".to_string(),
            table_grid_width: 1.0,
            title_spacing: 0.3,
            description_spacing: 0.2,
            page_size: PageSize::Letter,
        }
    }
}

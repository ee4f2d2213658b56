//! Rendering module for converting documents to various output formats.

mod csv;
mod html;
mod json;
mod markdown;
mod options;
mod result;
mod style;
mod text;

pub use csv::{to_csv, write_csv};
pub use html::to_html;
pub use json::{to_json, to_json_value, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::{RenderOptions, TableStyle};
pub use result::{RenderResult, RenderStats};
pub use style::{PageSize, StyleConfig};
pub use text::to_text;

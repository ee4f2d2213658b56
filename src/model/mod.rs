//! Document model types for report content.
//!
//! This module defines the renderer-agnostic representation that bridges
//! report parsing and rendering. A [`Document`] is an ordered list of
//! [`Element`]s; a [`FlatTable`] is the rectangular shape used for
//! delimited export.

mod document;
mod element;
mod flat_table;
mod table;
mod text;

pub use document::{Document, Metadata};
pub use element::Element;
pub use flat_table::FlatTable;
pub use table::Table;
pub use text::{FormattedText, TextRun, TextStyle, Tone};

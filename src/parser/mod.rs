//! Report parsing module.

mod classify;
mod inline;
mod options;
mod structured;
mod table;
mod text;
mod widen;

pub use classify::{classify, LineRole, BULLET_GLYPHS, SECTION_KEYWORD, TABLE_DELIMITER};
pub use inline::{format_inline, strip_emphasis, strip_pictographs};
pub use options::{
    ParseOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_BYTES, DEFAULT_MAX_LINES,
    DEFAULT_TABLE_WIDTH,
};
pub use structured::{StructuredParser, DATA_HEADER};
pub use table::{extract_table, is_separator_row, split_cells, table_from_records};
pub use text::TextParser;
pub use widen::{stringify, widen, widen_value, FALLBACK_HEADER};

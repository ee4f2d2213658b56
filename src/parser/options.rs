//! Parsing options and configuration.

use crate::error::{Error, LimitKind, Result};

/// Default line limit for free-text input.
pub const DEFAULT_MAX_LINES: usize = 10_000;

/// Default byte limit for free-text input (4 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 4 * 1024 * 1024;

/// Default nesting limit for sectioned input.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Letter width (612pt) minus two one-inch margins.
pub const DEFAULT_TABLE_WIDTH: f32 = 468.0;

/// Options for building documents from report input.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum number of lines in one text block
    pub max_lines: usize,

    /// Maximum size of one text block in bytes
    pub max_input_bytes: usize,

    /// Maximum nesting depth of sections
    pub max_depth: usize,

    /// Total width in points that table columns are spread over
    pub table_width: f32,

    /// Whether to surround tables with spacers
    pub table_spacers: bool,

    /// Spacer size in points
    pub spacer_size: f32,

    /// Whether batch builds run in parallel
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line limit.
    pub fn with_max_lines(mut self, lines: usize) -> Self {
        self.max_lines = lines;
        self
    }

    /// Set the byte limit.
    pub fn with_max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = bytes;
        self
    }

    /// Set the nesting limit.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the total table width in points.
    pub fn with_table_width(mut self, width: f32) -> Self {
        self.table_width = width;
        self
    }

    /// Enable or disable spacers around tables.
    pub fn with_table_spacers(mut self, enabled: bool) -> Self {
        self.table_spacers = enabled;
        self
    }

    /// Set the spacer size in points.
    pub fn with_spacer_size(mut self, size: f32) -> Self {
        self.spacer_size = size;
        self
    }

    /// Enable or disable parallel batch processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Fail if a text block exceeds the byte or line limit.
    pub(crate) fn check_text(&self, text: &str) -> Result<()> {
        if text.len() > self.max_input_bytes {
            return Err(Error::oversized(
                LimitKind::Bytes,
                self.max_input_bytes,
                text.len(),
            ));
        }
        let lines = text.lines().count();
        if lines > self.max_lines {
            return Err(Error::oversized(LimitKind::Lines, self.max_lines, lines));
        }
        Ok(())
    }

    /// Fail if a section nesting depth exceeds the limit.
    pub(crate) fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::oversized(LimitKind::Depth, self.max_depth, depth));
        }
        Ok(())
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
            table_width: DEFAULT_TABLE_WIDTH,
            table_spacers: true,
            spacer_size: 12.0,
            parallel: true,
        }
    }
}

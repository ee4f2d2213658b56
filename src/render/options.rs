//! Rendering options and configuration.

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include YAML frontmatter with metadata
    pub include_frontmatter: bool,

    /// Render the title block (title, subtitle, description, timestamp)
    pub include_title_block: bool,

    /// How to render tables in Markdown
    pub table_style: TableStyle,

    /// Character to use for bullet markers
    pub list_marker: char,

    /// Escape special Markdown characters in text
    pub escape_special_chars: bool,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable the title block.
    pub fn with_title_block(mut self, include: bool) -> Self {
        self.include_title_block = include;
        self
    }

    /// Set the table style.
    pub fn with_table_style(mut self, style: TableStyle) -> Self {
        self.table_style = style;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            include_title_block: true,
            table_style: TableStyle::Markdown,
            list_marker: '-',
            escape_special_chars: true,
            collect_stats: false,
        }
    }
}

/// How tables are written in Markdown output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// GitHub-flavored pipe table
    #[default]
    Markdown,
    /// Inline HTML `<table>`
    Html,
}

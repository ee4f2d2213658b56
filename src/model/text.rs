//! Inline-formatted text.
//!
//! Paragraph and bullet content carries a tiny markup dialect produced by
//! the inline formatter:
//!
//! - `<b>…</b>` for bold spans
//! - `<tone name="monetary">…</tone>` for semantic colors
//!
//! Renderers either pass the markup through or decompose it into
//! [`TextRun`]s with [`FormattedText::runs`]. Anything that looks like a
//! tag but is not one of the above is treated as literal text.

use serde::{Deserialize, Serialize};

const BOLD_OPEN: &str = "<b>";
const BOLD_CLOSE: &str = "</b>";
const TONE_OPEN_PREFIX: &str = "<tone name=\"";
const TONE_CLOSE: &str = "</tone>";

/// Semantic highlight color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Currency amounts
    Monetary,
    /// Percentages and ratios
    Proportion,
    /// Upward trend marker
    Up,
    /// Downward trend marker
    Down,
}

impl Tone {
    /// Name used in markup.
    pub fn name(self) -> &'static str {
        match self {
            Tone::Monetary => "monetary",
            Tone::Proportion => "proportion",
            Tone::Up => "up",
            Tone::Down => "down",
        }
    }

    /// Look up a tone by its markup name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "monetary" => Some(Tone::Monetary),
            "proportion" => Some(Tone::Proportion),
            "up" => Some(Tone::Up),
            "down" => Some(Tone::Down),
            _ => None,
        }
    }

    /// Wrap `text` in this tone's markup.
    pub fn wrap(self, text: &str) -> String {
        format!("{}{}\">{}{}", TONE_OPEN_PREFIX, self.name(), text, TONE_CLOSE)
    }
}

/// Text carrying inline markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormattedText(String);

impl FormattedText {
    /// Wrap a string that already uses the markup dialect.
    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The raw markup.
    pub fn as_markup(&self) -> &str {
        &self.0
    }

    /// Check if there is no visible text.
    pub fn is_empty(&self) -> bool {
        self.plain_text().trim().is_empty()
    }

    /// Text with all markup removed.
    pub fn plain_text(&self) -> String {
        self.runs().into_iter().map(|run| run.text).collect()
    }

    /// Decompose the markup into styled runs.
    ///
    /// Adjacent runs with identical style are merged. Unbalanced closing
    /// tags are ignored.
    pub fn runs(&self) -> Vec<TextRun> {
        let mut runs: Vec<TextRun> = Vec::new();
        let mut bold_depth = 0usize;
        let mut tones: Vec<Tone> = Vec::new();
        let mut buf = String::new();
        let mut rest = self.0.as_str();

        while let Some(idx) = rest.find('<') {
            buf.push_str(&rest[..idx]);
            let tail = &rest[idx..];

            match Tag::parse(tail) {
                Some((tag, len)) => {
                    let style = TextStyle {
                        bold: bold_depth > 0,
                        tone: tones.last().copied(),
                    };
                    push_run(&mut runs, &mut buf, style);

                    match tag {
                        Tag::BoldOpen => bold_depth += 1,
                        Tag::BoldClose => bold_depth = bold_depth.saturating_sub(1),
                        Tag::ToneOpen(tone) => tones.push(tone),
                        Tag::ToneClose => {
                            tones.pop();
                        }
                    }
                    rest = &tail[len..];
                }
                None => {
                    buf.push('<');
                    rest = &tail[1..];
                }
            }
        }

        buf.push_str(rest);
        let style = TextStyle {
            bold: bold_depth > 0,
            tone: tones.last().copied(),
        };
        push_run(&mut runs, &mut buf, style);
        runs
    }
}

impl std::fmt::Display for FormattedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn push_run(runs: &mut Vec<TextRun>, buf: &mut String, style: TextStyle) {
    if buf.is_empty() {
        return;
    }
    let text = std::mem::take(buf);
    match runs.last_mut() {
        Some(last) if last.style == style => last.text.push_str(&text),
        _ => runs.push(TextRun { text, style }),
    }
}

/// Markup tags recognized by [`FormattedText::runs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    BoldOpen,
    BoldClose,
    ToneOpen(Tone),
    ToneClose,
}

impl Tag {
    /// Parse a tag at the start of `s`, returning it with its byte length.
    fn parse(s: &str) -> Option<(Tag, usize)> {
        if s.starts_with(BOLD_OPEN) {
            return Some((Tag::BoldOpen, BOLD_OPEN.len()));
        }
        if s.starts_with(BOLD_CLOSE) {
            return Some((Tag::BoldClose, BOLD_CLOSE.len()));
        }
        if s.starts_with(TONE_CLOSE) {
            return Some((Tag::ToneClose, TONE_CLOSE.len()));
        }
        let after = s.strip_prefix(TONE_OPEN_PREFIX)?;
        let end = after.find("\">")?;
        let tone = Tone::from_name(&after[..end])?;
        Some((Tag::ToneOpen(tone), TONE_OPEN_PREFIX.len() + end + 2))
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                bold: true,
                ..Default::default()
            },
        }
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Semantic color
    pub tone: Option<Tone>,
}

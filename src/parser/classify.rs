//! Structural classification of single input lines.

use once_cell::sync::Lazy;
use regex::Regex;

use super::inline::strip_emphasis;

/// Cell delimiter for tables.
pub const TABLE_DELIMITER: char = '|';

/// Literal keyword that opens a section header.
pub const SECTION_KEYWORD: &str = "SECTION";

/// Subsection headers must be shorter than this many characters.
pub const SUBSECTION_MAX_CHARS: usize = 80;

/// Glyphs that open a bullet item.
pub const BULLET_GLYPHS: [char; 5] = ['•', '-', '*', '✓', '✔'];

/// Maximum number of words in a `Label: body` label.
const LABEL_MAX_WORDS: usize = 5;

static MARKDOWN_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6}(?:\s+|$)").unwrap());

static HORIZONTAL_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-{3,}").unwrap());

static LABELED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\*\*)?(?P<label>[A-Z][^:|*]{0,39}?)(?::\*\*|\*\*:|:)\s+(?P<body>\S.*)$")
        .unwrap()
});

/// The structural role of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRole {
    /// Blank line
    Skip,
    /// Section header with markers removed
    SectionHeader(String),
    /// Subsection header without the trailing colon
    SubsectionHeader(String),
    /// First line of a table run
    TableStart,
    /// Bullet item body with the glyph removed
    Bullet(String),
    /// `Label: body` line, rendered as a subsection header and a paragraph
    LabeledParagraph {
        /// Label before the colon
        label: String,
        /// Text after the colon
        body: String,
    },
    /// Anything else
    Paragraph(String),
}

/// Classify a single line. The first matching rule wins.
pub fn classify(line: &str) -> LineRole {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineRole::Skip;
    }

    if let Some(text) = section_header(trimmed) {
        return if text.is_empty() {
            LineRole::Skip
        } else {
            LineRole::SectionHeader(text)
        };
    }

    if let Some(text) = subsection_header(trimmed) {
        return LineRole::SubsectionHeader(text);
    }

    if trimmed.contains(TABLE_DELIMITER) {
        return LineRole::TableStart;
    }

    if let Some(body) = bullet_body(trimmed) {
        return if body.is_empty() {
            LineRole::Skip
        } else {
            LineRole::Bullet(body.to_string())
        };
    }

    if let Some(caps) = LABELED.captures(trimmed) {
        let label = caps["label"].trim();
        if label.split_whitespace().count() <= LABEL_MAX_WORDS {
            return LineRole::LabeledParagraph {
                label: label.to_string(),
                body: caps["body"].to_string(),
            };
        }
    }

    LineRole::Paragraph(trimmed.to_string())
}

fn section_header(trimmed: &str) -> Option<String> {
    if let Some(m) = MARKDOWN_HEADING.find(trimmed) {
        let rest = trimmed[m.end()..].trim_start_matches('#');
        return Some(strip_emphasis(rest).trim().to_string());
    }

    let plain = strip_emphasis(trimmed);
    let rest = plain.strip_prefix(SECTION_KEYWORD)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(plain.trim().to_string())
    } else {
        None
    }
}

fn subsection_header(trimmed: &str) -> Option<String> {
    if trimmed.contains(TABLE_DELIMITER) {
        return None;
    }
    let plain = strip_emphasis(trimmed);
    let plain = plain.trim();
    if !plain.ends_with(':') || plain.chars().count() >= SUBSECTION_MAX_CHARS {
        return None;
    }
    let text = plain.trim_end_matches(':').trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Body of a bullet line, with exactly one leading glyph removed.
///
/// A run of three or more `-` is a horizontal rule, and `**` opens emphasis;
/// neither is a bullet.
fn bullet_body(trimmed: &str) -> Option<&str> {
    let glyph = trimmed.chars().next()?;
    if !BULLET_GLYPHS.contains(&glyph) || HORIZONTAL_RULE.is_match(trimmed) {
        return None;
    }
    let rest = &trimmed[glyph.len_utf8()..];
    if glyph == '*' && rest.starts_with('*') {
        return None;
    }
    Some(rest.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(s: &str) -> LineRole {
        LineRole::Paragraph(s.to_string())
    }

    #[test]
    fn test_skip_blank() {
        assert_eq!(classify(""), LineRole::Skip);
        assert_eq!(classify("   \t"), LineRole::Skip);
    }

    #[test]
    fn test_section_keyword() {
        assert_eq!(
            classify("SECTION 1: Sales"),
            LineRole::SectionHeader("SECTION 1: Sales".to_string())
        );
        assert_eq!(
            classify("**SECTION 2: Costs**"),
            LineRole::SectionHeader("SECTION 2: Costs".to_string())
        );
        assert_eq!(classify("SECTIONAL results"), para("SECTIONAL results"));
    }

    #[test]
    fn test_markdown_heading() {
        assert_eq!(
            classify("### **Revenue** Overview"),
            LineRole::SectionHeader("Revenue Overview".to_string())
        );
        assert_eq!(
            classify("# Title"),
            LineRole::SectionHeader("Title".to_string())
        );
        assert_eq!(classify("###"), LineRole::Skip);
        assert_eq!(classify("#hashtag"), para("#hashtag"));
    }

    #[test]
    fn test_subsection() {
        assert_eq!(
            classify("Totals:"),
            LineRole::SubsectionHeader("Totals".to_string())
        );
        assert_eq!(
            classify("**Key Findings:**"),
            LineRole::SubsectionHeader("Key Findings".to_string())
        );

        let long = format!("{}:", "x".repeat(SUBSECTION_MAX_CHARS));
        assert_eq!(classify(&long), para(&long));
    }

    #[test]
    fn test_table_start() {
        assert_eq!(classify("| A | B |"), LineRole::TableStart);
        assert_eq!(classify("| A | B:"), LineRole::TableStart);
        assert_eq!(classify("a|b"), LineRole::TableStart);
    }

    #[test]
    fn test_bullets() {
        assert_eq!(classify("• First"), LineRole::Bullet("First".to_string()));
        assert_eq!(classify("- Second"), LineRole::Bullet("Second".to_string()));
        assert_eq!(classify("* Third"), LineRole::Bullet("Third".to_string()));
        assert_eq!(classify("✓ Done"), LineRole::Bullet("Done".to_string()));
        assert_eq!(classify("- - nested"), LineRole::Bullet("- nested".to_string()));
        assert_eq!(classify("•"), LineRole::Skip);
    }

    #[test]
    fn test_glyph_without_space_is_bullet() {
        assert_eq!(classify("-5 degrees"), LineRole::Bullet("5 degrees".to_string()));
        assert_eq!(classify("*Third"), LineRole::Bullet("Third".to_string()));
        assert_eq!(classify("•First"), LineRole::Bullet("First".to_string()));
    }

    #[test]
    fn test_emphasis_is_not_bullet() {
        assert_eq!(classify("**bold** start"), para("**bold** start"));
    }

    #[test]
    fn test_horizontal_rule_is_paragraph() {
        assert_eq!(classify("---"), para("---"));
        assert_eq!(classify("------"), para("------"));
        assert_eq!(classify("--- end ---"), para("--- end ---"));
        // spaced dashes are not a consecutive run
        assert_eq!(classify("- - -"), LineRole::Bullet("- -".to_string()));
    }

    #[test]
    fn test_labeled_paragraph() {
        assert_eq!(
            classify("Key Insight: grew 10%"),
            LineRole::LabeledParagraph {
                label: "Key Insight".to_string(),
                body: "grew 10%".to_string(),
            }
        );
        assert_eq!(
            classify("**Note:** check the totals"),
            LineRole::LabeledParagraph {
                label: "Note".to_string(),
                body: "check the totals".to_string(),
            }
        );
    }

    #[test]
    fn test_not_labeled() {
        assert_eq!(
            classify("see https://example.com"),
            para("see https://example.com")
        );
        assert_eq!(
            classify("This sentence has far too many words before it: done"),
            para("This sentence has far too many words before it: done")
        );
        assert_eq!(classify("Ratio:1"), para("Ratio:1"));
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(classify("  Plain text.  "), para("Plain text."));
    }
}

//! Inline formatting of a single line of report text.
//!
//! Formatting runs in a fixed order:
//!
//! 1. pictographic symbols are removed
//! 2. `**text**` becomes a bold span
//! 3. currency amounts, percentages and trend arrows are highlighted
//!
//! Step 3 is one combined pass that copies existing markup spans through
//! untouched, so a value is never wrapped twice and formatting its own
//! output is a no-op.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::model::{FormattedText, Tone};

/// Emoji and dingbat ranges that renderers cannot display.
static PICTOGRAPHS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{1F300}-\x{1F5FF}\x{1F600}-\x{1F64F}\x{1F680}-\x{1F6FF}\x{2600}-\x{27BF}]")
        .unwrap()
});

static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Existing markup spans first so they win over the token alternatives.
static HIGHLIGHTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?s)<b>.*?</b>|<tone name="[a-z]+">.*?</tone>"#,
        r"|(?P<money>\$\d(?:[\d,]*\d)?(?:\.\d+)?)",
        r"|(?P<pct>\d+(?:\.\d+)?%)",
        r"|(?P<up>[↑↗])",
        r"|(?P<down>[↓↘])",
    ))
    .unwrap()
});

/// Format one line of text.
pub fn format_inline(line: &str) -> FormattedText {
    let stripped = strip_pictographs(line);
    let emphasized = EMPHASIS.replace_all(&stripped, "<b>$1</b>");
    let highlighted = HIGHLIGHTS.replace_all(&emphasized, |caps: &Captures| highlight(caps));
    FormattedText::from_markup(highlighted.into_owned())
}

/// Remove pictographic symbols, leaving surrounding text as is.
pub fn strip_pictographs(text: &str) -> Cow<'_, str> {
    PICTOGRAPHS.replace_all(text, "")
}

/// Remove `**` emphasis markers.
pub fn strip_emphasis(text: &str) -> Cow<'_, str> {
    if text.contains("**") {
        Cow::Owned(text.replace("**", ""))
    } else {
        Cow::Borrowed(text)
    }
}

fn highlight(caps: &Captures) -> String {
    if let Some(m) = caps.name("money") {
        format!("<b>{}</b>", Tone::Monetary.wrap(m.as_str()))
    } else if let Some(m) = caps.name("pct") {
        format!("<b>{}</b>", Tone::Proportion.wrap(m.as_str()))
    } else if let Some(m) = caps.name("up") {
        Tone::Up.wrap(m.as_str())
    } else if let Some(m) = caps.name("down") {
        Tone::Down.wrap(m.as_str())
    } else {
        caps[0].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(line: &str) -> String {
        format_inline(line).as_markup().to_string()
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(fmt("Nothing to see here."), "Nothing to see here.");
    }

    #[test]
    fn test_strip_pictographs() {
        assert_eq!(strip_pictographs("🚀 Launch ☀ day 😀"), " Launch  day ");
        assert_eq!(strip_pictographs("Trend ↑ kept"), "Trend ↑ kept");
    }

    #[test]
    fn test_bold() {
        assert_eq!(fmt("a **bold** b"), "a <b>bold</b> b");
        assert_eq!(fmt("**one** and **two**"), "<b>one</b> and <b>two</b>");
    }

    #[test]
    fn test_unmatched_emphasis_is_literal() {
        assert_eq!(fmt("a ** b"), "a ** b");
        assert_eq!(fmt("**a** **b"), "<b>a</b> **b");
    }

    #[test]
    fn test_currency() {
        assert_eq!(
            fmt("Revenue $15,000 today"),
            "Revenue <b><tone name=\"monetary\">$15,000</tone></b> today"
        );
        assert_eq!(
            fmt("$1,000, then"),
            "<b><tone name=\"monetary\">$1,000</tone></b>, then"
        );
        assert_eq!(
            fmt("avg $13,333.33."),
            "avg <b><tone name=\"monetary\">$13,333.33</tone></b>."
        );
    }

    #[test]
    fn test_currency_irregular_grouping() {
        assert_eq!(fmt("$1,0000"), "<b><tone name=\"monetary\">$1,0000</tone></b>");
        assert_eq!(
            fmt("cost $1,23 now"),
            "cost <b><tone name=\"monetary\">$1,23</tone></b> now"
        );
        assert_eq!(fmt("$5,"), "<b><tone name=\"monetary\">$5</tone></b>,");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(
            fmt("retention 78.5%"),
            "retention <b><tone name=\"proportion\">78.5%</tone></b>"
        );
        assert_eq!(
            fmt("grew 10%"),
            "grew <b><tone name=\"proportion\">10%</tone></b>"
        );
    }

    #[test]
    fn test_trend_arrows() {
        assert_eq!(
            fmt("↑ 3 ↓ 2"),
            "<tone name=\"up\">↑</tone> 3 <tone name=\"down\">↓</tone> 2"
        );
    }

    #[test]
    fn test_bold_span_not_highlighted_again() {
        assert_eq!(fmt("**$500**"), "<b>$500</b>");
        assert_eq!(fmt("**up 5%**, total $20"), "<b>up 5%</b>, total <b><tone name=\"monetary\">$20</tone></b>");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Sales $15,000 (**up 12%**) ↑ vs 9.5% 📈",
            "$1,000 and 50% and ↓",
            "plain",
        ];
        for input in inputs {
            let once = fmt(input);
            let twice = format_inline(&once).as_markup().to_string();
            assert_eq!(once, twice, "formatting {input:?} twice changed it");
        }
    }

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(strip_emphasis("**Totals**:"), "Totals:");
        assert!(matches!(strip_emphasis("plain"), Cow::Borrowed(_)));
    }
}

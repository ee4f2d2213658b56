//! Standalone HTML rendering.
//!
//! Produces a single page laid out like the printed report: title block,
//! then elements in order. Tones become colored spans and tables take
//! their colors, fonts and grid from the [`StyleConfig`].

use crate::error::Result;
use crate::model::{Document, Element, FormattedText, Metadata, Table, Tone};

use super::StyleConfig;

/// One-inch margins on each side.
const PAGE_MARGIN_PT: f32 = 72.0;

/// Convert a document to a standalone HTML page.
pub fn to_html(doc: &Document, style: &StyleConfig) -> Result<String> {
    let mut out = String::new();
    let title = doc.metadata.title.as_deref().unwrap_or("Report");

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str("<style>\n");
    out.push_str(&stylesheet(style));
    out.push_str("</style>\n</head>\n<body>\n");

    render_title_block(&mut out, &doc.metadata);

    let mut in_list = false;
    for element in doc.elements() {
        let is_bullet = matches!(element, Element::BulletItem { .. });
        if in_list && !is_bullet {
            out.push_str("</ul>\n");
        }
        if is_bullet && !in_list {
            out.push_str("<ul>\n");
        }
        in_list = is_bullet;

        match element {
            Element::SectionHeader { text } => {
                out.push_str(&format!("<h2>{}</h2>\n", escape_html(text)));
            }
            Element::SubsectionHeader { text } => {
                out.push_str(&format!("<h3>{}</h3>\n", escape_html(text)));
            }
            Element::Paragraph { text } => {
                out.push_str(&format!("<p>{}</p>\n", inline_html(text)));
            }
            Element::BulletItem { text } => {
                out.push_str(&format!("<li>{}</li>\n", inline_html(text)));
            }
            Element::Table(table) => render_table(&mut out, table),
            Element::Spacer { size } => {
                out.push_str(&format!("<div class=\"spacer\" style=\"height:{size}pt\"></div>\n"));
            }
        }
    }
    if in_list {
        out.push_str("</ul>\n");
    }

    out.push_str("</body>\n</html>\n");
    Ok(out)
}

fn stylesheet(style: &StyleConfig) -> String {
    let (page_width, _) = style.page_size.dimensions();
    let content_width = page_width - 2.0 * PAGE_MARGIN_PT;
    let mut css = String::new();

    css.push_str(&format!(
        "body {{ font-family: {}, sans-serif; font-size: {}pt; max-width: {}pt; margin: 0 auto; }}\n",
        css_font(&style.body_font),
        style.body_font_size,
        content_width
    ));
    css.push_str(&format!(
        "h1 {{ font-family: {}, sans-serif; margin-bottom: {}in; }}\n",
        css_font(&style.heading_font),
        style.title_spacing
    ));
    css.push_str(&format!(
        ".description {{ margin-bottom: {}in; }}\n",
        style.description_spacing
    ));
    css.push_str(&format!(
        "table {{ border-collapse: collapse; width: 100%; border: {w}pt solid {c}; }}\n\
         th, td {{ border: {w}pt solid {c}; padding: 4pt; text-align: center; }}\n",
        w = style.table_grid_width,
        c = style.table_grid_color
    ));
    css.push_str(&format!(
        "th {{ background: {}; color: {}; font-family: {}, sans-serif; font-size: {}pt; }}\n",
        style.table_header_background,
        style.table_header_text,
        css_font(&style.heading_font),
        style.header_font_size
    ));
    css.push_str(&format!(
        "td {{ background: {}; font-size: {}pt; }}\n",
        style.table_body_background, style.body_font_size
    ));
    for tone in [Tone::Monetary, Tone::Proportion, Tone::Up, Tone::Down] {
        css.push_str(&format!(
            ".tone-{} {{ color: {}; }}\n",
            tone.name(),
            style.tone_color(tone)
        ));
    }
    css
}

/// `Helvetica-Bold` style names are not CSS families; keep the family part.
fn css_font(name: &str) -> &str {
    name.split('-').next().unwrap_or(name)
}

fn render_title_block(out: &mut String, metadata: &Metadata) {
    if let Some(title) = &metadata.title {
        out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    }
    if let Some(subtitle) = &metadata.subtitle {
        out.push_str(&format!("<h2 class=\"subtitle\">{}</h2>\n", escape_html(subtitle)));
    }
    if let Some(description) = &metadata.description {
        out.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            escape_html(description)
        ));
    }
    if let Some(label) = metadata.generated_label() {
        out.push_str(&format!("<p class=\"generated\">{}</p>\n", escape_html(&label)));
    }
}

fn render_table(out: &mut String, table: &Table) {
    out.push_str("<table>\n");
    if let Some(widths) = table.column_widths() {
        out.push_str("<colgroup>");
        for width in widths {
            out.push_str(&format!("<col style=\"width:{width}pt\">"));
        }
        out.push_str("</colgroup>\n");
    }
    out.push_str("<thead>\n<tr>");
    for cell in table.header() {
        out.push_str(&format!("<th>{}</th>", escape_html(cell)));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in table.body() {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

/// Translate formatted text into HTML, escaping the text of each run.
fn inline_html(text: &FormattedText) -> String {
    let mut html = String::new();
    for run in text.runs() {
        let mut piece = escape_html(&run.text);
        if let Some(tone) = run.style.tone {
            piece = format!("<span class=\"tone-{}\">{}</span>", tone.name(), piece);
        }
        if run.style.bold {
            piece = format!("<strong>{}</strong>", piece);
        }
        html.push_str(&piece);
    }
    html
}

/// Escape text for HTML element content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

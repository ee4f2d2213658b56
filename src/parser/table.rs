//! Table extraction from pipe-delimited lines and record lists.

use serde_json::Value;

use super::classify::TABLE_DELIMITER;
use super::inline::strip_emphasis;
use super::widen::{stringify, widen};
use crate::model::Table;

/// Split a pipe-delimited line into trimmed cells.
///
/// One leading and one trailing delimiter are removed before splitting, so
/// `| a | b |` and `a | b` both yield `["a", "b"]`.
pub fn split_cells(line: &str) -> Vec<String> {
    let mut s = line.trim();
    if let Some(stripped) = s.strip_prefix(TABLE_DELIMITER) {
        s = stripped;
    }
    if let Some(stripped) = s.strip_suffix(TABLE_DELIMITER) {
        s = stripped;
    }
    s.split(TABLE_DELIMITER)
        .map(|cell| strip_emphasis(cell.trim()).into_owned())
        .collect()
}

/// Check if a row is a Markdown rule row such as `|---|:---:|`.
pub fn is_separator_row(cells: &[String]) -> bool {
    cells.iter().any(|c| c.contains('-'))
        && cells
            .iter()
            .all(|c| c.chars().all(|ch| matches!(ch, '-' | ':' | ' ')))
}

fn is_blank_row(cells: &[String]) -> bool {
    cells.iter().all(|c| c.is_empty())
}

/// Extract a table from a run of pipe-delimited lines.
///
/// Separator and blank rows are dropped. Returns `None` when fewer than two
/// rows survive; the first surviving row fixes the column count.
pub fn extract_table<S: AsRef<str>>(lines: &[S], total_width: f32) -> Option<Table> {
    let rows: Vec<Vec<String>> = lines
        .iter()
        .map(|line| split_cells(line.as_ref()))
        .filter(|cells| !is_separator_row(cells) && !is_blank_row(cells))
        .collect();

    if rows.len() < 2 {
        log::debug!(
            "dropping malformed table run: {} line(s), {} usable row(s)",
            lines.len(),
            rows.len()
        );
        return None;
    }

    Table::from_rows(rows).map(|t| t.with_even_widths(total_width))
}

/// Build a table from a structured `table` value.
///
/// - a list of records uses the first record's keys as the header and looks
///   each key up per record, missing keys becoming empty cells
/// - a list of lists is used verbatim, first row as header
/// - a column mapping is widened like a flat table
pub fn table_from_records(value: &Value, total_width: f32) -> Option<Table> {
    let table = match value {
        Value::Array(items) => match items.first()? {
            Value::Object(first) => {
                let header: Vec<String> = first.keys().cloned().collect();
                let mut rows = vec![header.clone()];
                for item in items {
                    match item {
                        Value::Object(record) => rows.push(
                            header
                                .iter()
                                .map(|key| record.get(key).map(stringify).unwrap_or_default())
                                .collect(),
                        ),
                        other => log::debug!("skipping non-record table item: {}", other),
                    }
                }
                Table::from_rows(rows)
            }
            Value::Array(_) => Table::from_rows(
                items
                    .iter()
                    .map(|row| match row {
                        Value::Array(cells) => cells.iter().map(stringify).collect(),
                        other => vec![stringify(other)],
                    })
                    .collect(),
            ),
            _ => None,
        },
        Value::Object(columns) => widen(columns).to_table(),
        _ => None,
    };

    if table.is_none() {
        log::debug!("table value did not produce a header and data row");
    }
    table.map(|t| t.with_even_widths(total_width))
}

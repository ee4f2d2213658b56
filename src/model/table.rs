//! Table types.

use serde::{Deserialize, Serialize};

/// A rectangular table with a single header row.
///
/// Every row has the header row's column count and there is at least one
/// data row. [`Table::from_rows`] establishes both, and deserialization
/// rejects tables that break them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    /// Rows in the table, header first
    rows: Vec<Vec<String>>,

    /// Number of header rows
    header_rows: u8,

    /// Column widths in points (rendering hint)
    column_widths: Option<Vec<f32>>,
}

/// Unchecked wire form of [`Table`].
#[derive(Deserialize)]
struct RawTable {
    rows: Vec<Vec<String>>,
    header_rows: u8,
    column_widths: Option<Vec<f32>>,
}

impl TryFrom<RawTable> for Table {
    type Error = String;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        let columns = raw.rows.first().map(Vec::len).unwrap_or(0);
        if raw.rows.len() < 2 || columns == 0 {
            return Err("table needs a non-empty header and at least one data row".into());
        }
        if let Some(row) = raw.rows.iter().position(|row| row.len() != columns) {
            return Err(format!(
                "table row {row} has {} cells, expected {columns}",
                raw.rows[row].len()
            ));
        }
        if raw.header_rows == 0 || raw.header_rows as usize >= raw.rows.len() {
            return Err(format!("invalid header row count {}", raw.header_rows));
        }
        if let Some(widths) = &raw.column_widths {
            if widths.len() != columns {
                return Err(format!(
                    "{} column widths for {columns} columns",
                    widths.len()
                ));
            }
        }

        Ok(Self {
            rows: raw.rows,
            header_rows: raw.header_rows,
            column_widths: raw.column_widths,
        })
    }
}

impl Table {
    /// Build a table from raw rows, the first of which is the header.
    ///
    /// Rows shorter than the header are right-padded with empty cells and
    /// longer rows are truncated. Returns `None` when there is no data row
    /// or the header has no columns.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Option<Self> {
        let columns = rows.first().map(Vec::len)?;
        if rows.len() < 2 || columns == 0 {
            return None;
        }

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(columns, String::new());
                row
            })
            .collect();

        Some(Self {
            rows,
            header_rows: 1,
            column_widths: None,
        })
    }

    /// Attach column widths spread evenly over `total_width` points.
    pub fn with_even_widths(mut self, total_width: f32) -> Self {
        let columns = self.column_count();
        if columns > 0 && total_width > 0.0 {
            let width = total_width / columns as f32;
            self.column_widths = Some(vec![width; columns]);
        }
        self
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Get the number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Number of header rows.
    pub fn header_rows(&self) -> u8 {
        self.header_rows
    }

    /// Column width hint, if one was attached.
    pub fn column_widths(&self) -> Option<&[f32]> {
        self.column_widths.as_deref()
    }

    /// Get the header row.
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get body rows (non-header).
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(self.header_rows as usize..).unwrap_or(&[])
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_table_requires_data_row() {
        assert!(Table::from_rows(vec![]).is_none());
        assert!(Table::from_rows(vec![row(&["Name", "Age"])]).is_none());
        assert!(Table::from_rows(vec![row(&[]), row(&[])]).is_none());
    }

    #[test]
    fn test_table_with_data() {
        let table = Table::from_rows(vec![
            row(&["Name", "Age"]),
            row(&["Alice", "30"]),
            row(&["Bob", "25"]),
        ])
        .unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.header(), &["Name", "Age"]);
        assert_eq!(table.body().len(), 2);
        assert_eq!(table.header_rows(), 1);
    }

    #[test]
    fn test_rows_normalized_to_header_width() {
        let table = Table::from_rows(vec![
            row(&["A", "B", "C"]),
            row(&["1"]),
            row(&["1", "2", "3", "4"]),
        ])
        .unwrap();

        assert_eq!(table.rows()[1], row(&["1", "", ""]));
        assert_eq!(table.rows()[2], row(&["1", "2", "3"]));
    }

    #[test]
    fn test_even_widths() {
        let table = Table::from_rows(vec![row(&["A", "B", "C", "D"]), row(&["1", "2", "3", "4"])])
            .unwrap()
            .with_even_widths(400.0);

        assert_eq!(table.column_widths(), Some(&[100.0, 100.0, 100.0, 100.0][..]));
    }

    #[test]
    fn test_plain_text() {
        let table = Table::from_rows(vec![row(&["Month", "Revenue"]), row(&["Jan", "$1,000"])])
            .unwrap();
        assert_eq!(table.plain_text(), "Month\tRevenue\nJan\t$1,000");
    }

    #[test]
    fn test_deserialize_valid_table() {
        let table = Table::from_rows(vec![row(&["Month", "Revenue"]), row(&["Jan", "$1,000"])])
            .unwrap()
            .with_even_widths(468.0);
        let json = serde_json::to_string(&table).unwrap();

        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_deserialize_rejects_broken_tables() {
        let ragged = r#"{"rows":[["a","b"],["1"]],"header_rows":1,"column_widths":null}"#;
        let err = serde_json::from_str::<Table>(ragged).unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 cells"));

        let header_only = r#"{"rows":[["a"]],"header_rows":1,"column_widths":null}"#;
        assert!(serde_json::from_str::<Table>(header_only).is_err());

        let no_header = r#"{"rows":[["a"],["1"]],"header_rows":0,"column_widths":null}"#;
        assert!(serde_json::from_str::<Table>(no_header).is_err());

        let widths = r#"{"rows":[["a"],["1"]],"header_rows":1,"column_widths":[1.0,2.0]}"#;
        assert!(serde_json::from_str::<Table>(widths).is_err());
    }
}

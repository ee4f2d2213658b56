//! Flat tabular output used for delimited export.

use super::Table;
use serde::{Deserialize, Serialize};

/// A rectangular header + rows structure.
///
/// `rows[i][j]` belongs to `headers[j]`, and every row has exactly
/// `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl FlatTable {
    /// Build a flat table from column-major data.
    ///
    /// Each column is right-padded with empty strings to the length of the
    /// longest column before being transposed into rows.
    pub fn from_columns(columns: Vec<(String, Vec<String>)>) -> Self {
        let row_count = columns.iter().map(|(_, c)| c.len()).max().unwrap_or(0);
        let mut headers = Vec::with_capacity(columns.len());
        let mut padded = Vec::with_capacity(columns.len());

        for (header, mut values) in columns {
            values.resize(row_count, String::new());
            headers.push(header);
            padded.push(values);
        }

        let rows = (0..row_count)
            .map(|i| padded.iter().map(|col| col[i].clone()).collect())
            .collect();

        Self { headers, rows }
    }

    /// Column headers in source order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Check if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Convert to a document table with the headers as the header row.
    ///
    /// Returns `None` when there are no data rows.
    pub fn to_table(&self) -> Option<Table> {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(self.headers.clone());
        rows.extend(self.rows.iter().cloned());
        Table::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_from_columns_pads_short_columns() {
        let table = FlatTable::from_columns(vec![
            ("dates".to_string(), strings(&["2024-01", "2024-02", "2024-03"])),
            ("amount".to_string(), strings(&["500"])),
        ]);

        assert_eq!(table.headers(), &["dates", "amount"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows()[0], strings(&["2024-01", "500"]));
        assert_eq!(table.rows()[2], strings(&["2024-03", ""]));
    }

    #[test]
    fn test_empty_flat_table() {
        let table = FlatTable::from_columns(vec![]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert!(table.to_table().is_none());
    }

    #[test]
    fn test_to_table() {
        let flat = FlatTable::from_columns(vec![
            ("a".to_string(), strings(&["1", "2"])),
            ("b".to_string(), strings(&["x"])),
        ]);
        let table = flat.to_table().unwrap();

        assert_eq!(table.header(), &["a", "b"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows()[2], strings(&["2", ""]));
    }
}

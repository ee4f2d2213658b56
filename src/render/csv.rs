//! Comma-separated export of flat tables.

use std::io::Write;

use crate::error::Result;
use crate::model::FlatTable;

const DELIMITER: char = ',';

/// Encode a flat table as CSV text.
///
/// The header line comes first, then one line per row, each terminated by
/// `\n`. A table without columns encodes to an empty string.
pub fn to_csv(table: &FlatTable) -> String {
    let mut out = String::new();
    if table.is_empty() {
        return out;
    }

    push_record(&mut out, table.headers());
    for row in table.rows() {
        push_record(&mut out, row);
    }
    out
}

/// Write a flat table as CSV to any writer.
pub fn write_csv<W: Write>(table: &FlatTable, mut writer: W) -> Result<()> {
    writer.write_all(to_csv(table).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn push_record(out: &mut String, cells: &[String]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        push_field(out, cell);
    }
    out.push('\n');
}

/// Quote a field if it contains the delimiter, a quote, or a line break.
fn push_field(out: &mut String, field: &str) {
    if field.contains([DELIMITER, '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[(&str, &[&str])]) -> FlatTable {
        FlatTable::from_columns(
            columns
                .iter()
                .map(|(h, values)| (h.to_string(), values.iter().map(|v| v.to_string()).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_to_csv() {
        let t = table(&[("dates", &["2024-01", "2024-02"]), ("amount", &["500"])]);
        assert_eq!(to_csv(&t), "dates,amount\n2024-01,500\n2024-02,\n");
    }

    #[test]
    fn test_quoting() {
        let t = table(&[("name", &["Widget, large", "say \"hi\"", "two\nlines"])]);
        assert_eq!(
            to_csv(&t),
            "name\n\"Widget, large\"\n\"say \"\"hi\"\"\"\n\"two\nlines\"\n"
        );
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(to_csv(&FlatTable::default()), "");
    }

    #[test]
    fn test_write_csv_to_file() {
        let t = table(&[("a", &["1"]), ("b", &["2"])]);
        let file = tempfile::NamedTempFile::new().unwrap();

        write_csv(&t, file.as_file()).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, "a,b\n1,2\n");
    }
}

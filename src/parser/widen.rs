//! Widening column mappings into flat tables.

use serde_json::{Map, Value};

use crate::model::FlatTable;

/// Header used when the payload is not a mapping.
pub const FALLBACK_HEADER: &str = "data";

/// Widen a column mapping into a rectangular table.
///
/// Columns keep the mapping's key order. A list value contributes one cell
/// per item, a scalar contributes a single cell, and every column is
/// right-padded with empty strings to the longest column.
pub fn widen(mapping: &Map<String, Value>) -> FlatTable {
    let columns = mapping
        .iter()
        .map(|(key, value)| {
            let cells = match value {
                Value::Array(items) => items.iter().map(stringify).collect(),
                scalar => vec![stringify(scalar)],
            };
            (key.clone(), cells)
        })
        .collect();

    FlatTable::from_columns(columns)
}

/// Widen any payload.
///
/// Mappings go through [`widen`]; anything else becomes a single `data`
/// column holding the stringified payload.
pub fn widen_value(value: &Value) -> FlatTable {
    match value {
        Value::Object(mapping) => widen(mapping),
        other => {
            log::debug!("payload is not a mapping, using single `{FALLBACK_HEADER}` column");
            FlatTable::from_columns(vec![(FALLBACK_HEADER.to_string(), vec![stringify(other)])])
        }
    }
}

/// Render a value as a table cell.
///
/// Strings are used verbatim and `null` becomes an empty cell; everything
/// else uses its compact JSON text.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn mapping(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_widen_mixed_columns() {
        let table = widen(&mapping(json!({
            "dates": ["2024-01", "2024-02"],
            "amount": 500
        })));

        assert_eq!(table.headers(), &["dates", "amount"]);
        assert_eq!(
            table.rows(),
            &[strings(&["2024-01", "500"]), strings(&["2024-02", ""])]
        );
    }

    #[test]
    fn test_widen_scalars_single_row() {
        let table = widen(&mapping(json!({"a": 1, "b": "two", "c": true})));

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0], strings(&["1", "two", "true"]));
    }

    #[test]
    fn test_widen_pads_to_longest() {
        let table = widen(&mapping(json!({
            "x": [1, 2, 3, 4],
            "y": [1.5],
            "z": []
        })));

        assert_eq!(table.row_count(), 4);
        for row in table.rows() {
            assert_eq!(row.len(), 3);
        }
        assert_eq!(table.rows()[0], strings(&["1", "1.5", ""]));
        assert_eq!(table.rows()[3], strings(&["4", "", ""]));
    }

    #[test]
    fn test_widen_preserves_key_order() {
        let table = widen(&mapping(json!({"zeta": 1, "alpha": 2, "mid": 3})));
        assert_eq!(table.headers(), &["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_widen_empty_mapping() {
        let table = widen(&Map::new());
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_fallback_for_non_mapping() {
        let table = widen_value(&json!("hello"));
        assert_eq!(table.headers(), &["data"]);
        assert_eq!(table.rows(), &[strings(&["hello"])]);

        let table = widen_value(&json!([1, 2]));
        assert_eq!(table.rows(), &[strings(&["[1,2]"])]);
    }

    #[test]
    fn test_stringify() {
        assert_eq!(stringify(&json!("x")), "x");
        assert_eq!(stringify(&json!(null)), "");
        assert_eq!(stringify(&json!(78.5)), "78.5");
        assert_eq!(stringify(&json!({"k": 1})), r#"{"k":1}"#);
    }
}

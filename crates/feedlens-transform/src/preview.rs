//! Upload preview statistics.

use std::collections::HashMap;

use feedlens_core::types::{Row, Table};
use serde::{Deserialize, Serialize};

/// Number of sample rows included in a preview.
const SAMPLE_ROWS: usize = 5;

/// Summary of an uploaded table, shown before the user commits to an
/// ingest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePreview {
    /// Number of data rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Column names in file order.
    pub headers: Vec<String>,
    /// Columns whose non-empty values all parse as numbers.
    pub numeric_columns: Vec<String>,
    /// The remaining columns.
    pub text_columns: Vec<String>,
    /// Per-column count of missing (empty or null) cells; columns without
    /// missing values are omitted.
    pub missing_values: HashMap<String, usize>,
    /// Up to the first five rows.
    pub sample: Vec<Row>,
}

impl TablePreview {
    /// Builds a preview of the given table.
    pub fn of(table: &Table) -> Self {
        let mut numeric_columns = Vec::new();
        let mut text_columns = Vec::new();
        let mut missing_values = HashMap::new();

        for header in table.headers() {
            let mut missing = 0usize;
            let mut non_empty = 0usize;
            let mut numeric = true;

            for row in table.rows() {
                match row.get(header) {
                    None | Some(serde_json::Value::Null) => missing += 1,
                    Some(serde_json::Value::String(text)) if text.is_empty() => missing += 1,
                    Some(serde_json::Value::String(text)) => {
                        non_empty += 1;
                        if text.trim().parse::<f64>().is_err() {
                            numeric = false;
                        }
                    }
                    Some(serde_json::Value::Number(_)) => non_empty += 1,
                    Some(_) => {
                        non_empty += 1;
                        numeric = false;
                    }
                }
            }

            if numeric && non_empty > 0 {
                numeric_columns.push(header.clone());
            } else {
                text_columns.push(header.clone());
            }
            if missing > 0 {
                missing_values.insert(header.clone(), missing);
            }
        }

        Self {
            rows: table.len(),
            columns: table.headers().len(),
            headers: table.headers().to_vec(),
            numeric_columns,
            text_columns,
            missing_values,
            sample: table.rows().iter().take(SAMPLE_ROWS).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::read_csv;

    use super::*;

    #[test]
    fn test_classifies_columns_and_counts_missing() {
        let input = "description,likes,city\nfirst,10,NYC\nsecond,20,\nthird,,LA\n";
        let table = read_csv(input.as_bytes()).unwrap();

        let preview = TablePreview::of(&table);

        assert_eq!(preview.rows, 3);
        assert_eq!(preview.columns, 3);
        assert_eq!(preview.numeric_columns, ["likes"]);
        assert_eq!(preview.text_columns, ["description", "city"]);
        assert_eq!(preview.missing_values.get("likes"), Some(&1));
        assert_eq!(preview.missing_values.get("city"), Some(&1));
        assert!(!preview.missing_values.contains_key("description"));
    }

    #[test]
    fn test_sample_is_capped_at_five_rows() {
        let mut input = String::from("description\n");
        for i in 0..8 {
            input.push_str(&format!("row {i}\n"));
        }
        let table = read_csv(input.as_bytes()).unwrap();

        let preview = TablePreview::of(&table);

        assert_eq!(preview.rows, 8);
        assert_eq!(preview.sample.len(), 5);
    }

    #[test]
    fn test_all_empty_column_is_text() {
        let table = read_csv("description,extra\nx,\ny,\n".as_bytes()).unwrap();
        let preview = TablePreview::of(&table);
        assert!(preview.text_columns.contains(&"extra".to_string()));
        assert_eq!(preview.missing_values.get("extra"), Some(&2));
    }
}

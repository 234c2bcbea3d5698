//! Row-to-document shaping.

use feedlens_core::types::{Document, Row};
use feedlens_core::{Error, Result};

/// The distinguished free-text column promoted to the vectorize field.
pub const DESCRIPTION_COLUMN: &str = "description";

/// Converts a tabular row into a storable document.
///
/// Missing values are rendered as empty strings across all columns before
/// anything is extracted. The `description` column is removed from the row
/// and becomes the document's vectorization input; every remaining column
/// lands in the metadata mapping under its original name.
///
/// # Errors
///
/// Fails with [`Error::MissingColumn`] if the row has no `description`
/// column.
pub fn shape(row: &Row) -> Result<Document> {
    let mut row = row.clone();
    fill_missing(&mut row);

    let description = row
        .remove(DESCRIPTION_COLUMN)
        .ok_or_else(|| Error::missing_column(DESCRIPTION_COLUMN))?;

    Ok(Document {
        vectorize: value_text(&description),
        metadata: row.into_values(),
    })
}

/// Renders every null value in the row as an empty string.
pub(crate) fn fill_missing(row: &mut Row) {
    for (_, value) in row.iter_mut() {
        if value.is_null() {
            *value = serde_json::Value::String(String::new());
        }
    }
}

/// Renders a scalar value as free text.
pub(crate) fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_promotes_description_and_keeps_the_rest() {
        let row = Row::from_iter([
            ("description", json!("x")),
            ("city", json!("NYC")),
            ("age", json!(null)),
        ]);

        let document = shape(&row).unwrap();

        assert_eq!(document.vectorize, "x");
        assert_eq!(document.metadata.get("city"), Some(&json!("NYC")));
        assert_eq!(document.metadata.get("age"), Some(&json!("")));
        assert!(!document.metadata.contains_key(DESCRIPTION_COLUMN));
    }

    #[test]
    fn test_missing_description_fails() {
        let row = Row::from_iter([("city", json!("NYC"))]);
        let err = shape(&row).unwrap_err();
        assert_eq!(err, Error::missing_column(DESCRIPTION_COLUMN));
    }

    #[test]
    fn test_null_description_becomes_empty_text() {
        let row = Row::from_iter([("description", json!(null))]);
        let document = shape(&row).unwrap();
        assert_eq!(document.vectorize, "");
    }

    #[test]
    fn test_numeric_metadata_passes_through() {
        let row = Row::from_iter([("description", json!("x")), ("id", json!(1))]);
        let document = shape(&row).unwrap();
        assert_eq!(document.metadata.get("id"), Some(&json!(1)));
    }

    #[test]
    fn test_caller_row_is_untouched() {
        let row = Row::from_iter([("description", json!("x")), ("age", json!(null))]);
        let before = row.clone();

        shape(&row).unwrap();

        assert_eq!(row, before);
    }
}

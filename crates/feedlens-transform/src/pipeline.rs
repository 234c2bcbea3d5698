//! The transform driver: table in, documents out.

use feedlens_core::Result;
use feedlens_core::types::{Document, Table};

use crate::TRACING_TARGET;
use crate::normalize::normalize;
use crate::shape::{DESCRIPTION_COLUMN, shape, value_text};

/// Transforms a table into a sequence of storable documents.
///
/// For each row in input order, the `description` field is normalized and
/// the row is shaped into a document; the output preserves input order and
/// yields exactly one document per row. The caller's table is never
/// mutated; the driver works on row copies.
///
/// # Errors
///
/// Fails fast on the first row without a `description` column
/// ([`MissingColumn`]) or with an invalid timestamp token ([`Parse`]); no
/// partial output is produced.
///
/// [`MissingColumn`]: feedlens_core::Error::MissingColumn
/// [`Parse`]: feedlens_core::Error::Parse
pub fn transform(table: &Table) -> Result<Vec<Document>> {
    let mut documents = Vec::with_capacity(table.len());

    for row in table.rows() {
        let mut working = row.clone();

        let description = working
            .get(DESCRIPTION_COLUMN)
            .ok_or_else(|| feedlens_core::Error::missing_column(DESCRIPTION_COLUMN))?;
        let normalized = normalize(&value_text(description))?;
        working.insert(DESCRIPTION_COLUMN, serde_json::Value::String(normalized));

        documents.push(shape(&working)?);
    }

    tracing::debug!(
        target: TRACING_TARGET,
        rows = table.len(),
        documents = documents.len(),
        "Table transformed"
    );

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use feedlens_core::Error;
    use feedlens_core::types::Row;
    use serde_json::json;

    use super::*;

    fn table_of(rows: Vec<Row>) -> Table {
        let mut table = Table::new(vec![DESCRIPTION_COLUMN.into(), "id".into()]);
        for row in rows {
            table.push(row);
        }
        table
    }

    #[test]
    fn test_single_row() {
        let table = table_of(vec![Row::from_iter([
            ("description", json!("42 years old at 10:00:00.000000")),
            ("id", json!(1)),
        ])]);

        let documents = transform(&table).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].vectorize, "Middle-aged people at morning");
        assert_eq!(documents[0].metadata.get("id"), Some(&json!(1)));
    }

    #[test]
    fn test_preserves_row_order() {
        let table = table_of(vec![
            Row::from_iter([("description", json!("first")), ("id", json!(1))]),
            Row::from_iter([("description", json!("second")), ("id", json!(2))]),
            Row::from_iter([("description", json!("third")), ("id", json!(3))]),
        ]);

        let documents = transform(&table).unwrap();

        let ids: Vec<_> = documents
            .iter()
            .map(|d| d.metadata.get("id").unwrap())
            .collect();
        assert_eq!(ids, vec![&json!(1), &json!(2), &json!(3)]);
    }

    #[test]
    fn test_fails_fast_without_description() {
        let table = table_of(vec![
            Row::from_iter([("description", json!("ok")), ("id", json!(1))]),
            Row::from_iter([("id", json!(2))]),
        ]);

        let err = transform(&table).unwrap_err();
        assert_eq!(err, Error::missing_column(DESCRIPTION_COLUMN));
    }

    #[test]
    fn test_bad_timestamp_aborts_the_pass() {
        let table = table_of(vec![Row::from_iter([
            ("description", json!("at 99:00:00.0")),
            ("id", json!(1)),
        ])]);

        assert!(matches!(transform(&table), Err(Error::Parse(_))));
    }

    #[test]
    fn test_caller_table_is_untouched() {
        let table = table_of(vec![Row::from_iter([
            ("description", json!("5 years old")),
            ("id", json!(null)),
        ])]);
        let before = table.clone();

        transform(&table).unwrap();

        assert_eq!(table, before);
    }
}

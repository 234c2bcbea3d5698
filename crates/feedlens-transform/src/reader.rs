//! CSV reading.

use std::io::Read;

use feedlens_core::types::{Row, Table};
use feedlens_core::{Error, Result};

use crate::TRACING_TARGET;

/// Reads a CSV document into a table.
///
/// The first record names the columns; defaults are assumed throughout
/// (comma-separated, UTF-8). Every field is read as a string, so empty
/// cells arrive as empty strings.
///
/// # Errors
///
/// Malformed input (bad UTF-8, ragged records) fails with a parse error
/// carrying the underlying message.
pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|err| Error::parse(format!("invalid CSV header: {err}")))?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut table = Table::new(headers.clone());

    for record in csv_reader.records() {
        let record = record.map_err(|err| Error::parse(format!("invalid CSV record: {err}")))?;
        let row: Row = headers
            .iter()
            .cloned()
            .zip(
                record
                    .iter()
                    .map(|field| serde_json::Value::String(field.to_owned())),
            )
            .collect();
        table.push(row);
    }

    tracing::debug!(
        target: TRACING_TARGET,
        rows = table.len(),
        columns = table.headers().len(),
        "CSV parsed"
    );

    Ok(table)
}

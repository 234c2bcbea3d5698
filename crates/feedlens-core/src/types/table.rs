//! Tabular data carried through one upload-and-transform pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row: a mapping from column name to a scalar value.
///
/// Values are JSON scalars (string, number, or null as the missing
/// marker). One distinguished column, `description`, holds free text; all
/// other columns are opaque and pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: HashMap<String, serde_json::Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column value.
    pub fn insert(&mut self, column: impl Into<String>, value: serde_json::Value) {
        self.values.insert(column.into(), value);
    }

    /// Returns a column value, if present.
    pub fn get(&self, column: &str) -> Option<&serde_json::Value> {
        self.values.get(column)
    }

    /// Removes a column and returns its value.
    pub fn remove(&mut self, column: &str) -> Option<serde_json::Value> {
        self.values.remove(column)
    }

    /// Returns true if the row has the named column.
    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over column/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.values.iter()
    }

    /// Mutably iterates over column/value pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut serde_json::Value)> {
        self.values.iter_mut()
    }

    /// Consumes the row, returning the underlying mapping.
    pub fn into_values(self) -> HashMap<String, serde_json::Value> {
        self.values
    }
}

impl<K: Into<String>> FromIterator<(K, serde_json::Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, serde_json::Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A parsed table: ordered headers plus a row sequence.
///
/// Tables own their data outright. The transform driver works on copies,
/// so caller-owned tables are never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table with the given column headers.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Returns the column headers in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the rows in file order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if the named column is in the header row.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

//! Raw Table - Untyped string grid handed over by table ingestion.

use serde::{Deserialize, Serialize};

/// A table of strings as read from an uploaded sheet.
///
/// The first row holds the column headers; `headers[0]` labels the
/// identifier column. Every following row is one alternative. Rows are not
/// required to be rectangular here; the validator decides what to accept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Creates a table from rows, header row first.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Creates a table from anything that yields rows of string-like cells.
    pub fn from_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Returns the number of rows including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the width of the header row.
    pub fn column_count(&self) -> usize {
        self.header().len()
    }

    /// Returns the header row, or an empty slice for an empty table.
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the data rows (everything after the header).
    pub fn records(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Returns true if the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

//! Table data model
//!
//! The `Table` owns the column sequence and every row. Rows are stored
//! positionally (one value per column, aligned with `columns`), so every row
//! carries exactly the known field set by construction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Byte form, as the csv reader/writer wants it
    pub fn byte(self) -> u8 {
        self.char() as u8
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Errors from misuse of the table API.
///
/// Callers inside the crate always derive row indices and field names from the
/// table's current state, so either variant indicates a bug in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("row {index} out of range (table has {len} rows)")]
    OutOfRange { index: usize, len: usize },

    #[error("unknown field {0:?}")]
    UnknownField(String),
}

/// Read-only view of one row, addressable by field name
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl<'a> RowRef<'a> {
    /// Value of `field`, or None if the field is not a column
    pub fn get(&self, field: &str) -> Option<&'a str> {
        let col = self.columns.iter().position(|c| c == field)?;
        self.values.get(col).map(String::as_str)
    }

    /// Value at a column index
    pub fn value(&self, col: usize) -> Option<&'a str> {
        self.values.get(col).map(String::as_str)
    }

    /// Values in column order
    pub fn values(&self) -> &'a [String] {
        self.values
    }

    /// (field, value) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    /// Owned (field, value) pairs, convenient for comparisons
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(f, v)| (f.to_string(), v.to_string()))
            .collect()
    }
}

/// Suffix repeated header names (`name`, `name_2`, ...) so columns stay unique.
///
/// Returns the columns and the (original, renamed) pairs.
pub(crate) fn unique_columns(raw: Vec<String>) -> (Vec<String>, Vec<(String, String)>) {
    let mut seen: HashSet<String> = raw.iter().cloned().collect();
    let mut used: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut columns = Vec::with_capacity(raw.len());
    let mut renamed_columns = Vec::new();

    for name in raw {
        if used.insert(name.clone()) {
            columns.push(name);
            continue;
        }

        let mut n = 2;
        let renamed = loop {
            let candidate = format!("{}_{}", name, n);
            if !seen.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        tracing::warn!("Renaming duplicate column {:?} to {:?}", name, renamed);
        seen.insert(renamed.clone());
        used.insert(renamed.clone());
        renamed_columns.push((name, renamed.clone()));
        columns.push(renamed);
    }

    (columns, renamed_columns)
}

/// The in-memory source of truth: columns plus rows, with dirty tracking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    delimiter: Delimiter,
    /// Set by every successful mutation until the host takes it
    #[serde(skip)]
    dirty: bool,
    /// Bumped on every mutation; never reset
    #[serde(skip)]
    revision: u64,
}

impl Table {
    /// Create an empty table (no columns, no rows)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a header and rows that already match it.
    ///
    /// Repeated column names are suffixed to stay unique. Short rows are
    /// padded with empty values and long rows truncated so the positional
    /// invariant always holds; the codec only passes exact matches.
    pub fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>, delimiter: Delimiter) -> Self {
        let (columns, _) = unique_columns(columns);
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self {
            columns,
            rows,
            delimiter,
            dirty: false,
            revision: 0,
        }
    }

    /// Ordered field names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Delimiter used when serializing
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Index of a field in the column sequence
    pub fn column_index(&self, field: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == field)
    }

    /// Read a row
    pub fn row(&self, index: usize) -> Option<RowRef<'_>> {
        self.rows.get(index).map(|values| RowRef {
            columns: &self.columns,
            values,
        })
    }

    /// Iterate over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> {
        self.rows.iter().map(move |values| RowRef {
            columns: &self.columns,
            values,
        })
    }

    /// Get cell value at position, empty string when out of range
    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Overwrite one cell in place and mark the table dirty
    pub fn set_cell_value(
        &mut self,
        row_index: usize,
        field: &str,
        value: &str,
    ) -> Result<(), TableError> {
        let len = self.rows.len();
        if row_index >= len {
            return Err(TableError::OutOfRange {
                index: row_index,
                len,
            });
        }
        let col = self
            .column_index(field)
            .ok_or_else(|| TableError::UnknownField(field.to_string()))?;

        self.rows[row_index][col] = value.to_string();
        self.touch();
        Ok(())
    }

    /// Prepend a row built from (field, value) pairs.
    ///
    /// Missing fields default to the empty string; unknown fields are ignored.
    pub fn insert_row_at_top<K, V, I>(&mut self, row_data: I)
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut row = vec![String::new(); self.columns.len()];
        for (field, value) in row_data {
            match self.column_index(field.as_ref()) {
                Some(col) => row[col] = value.into(),
                None => tracing::warn!("Ignoring unknown field {:?} in new row", field.as_ref()),
            }
        }
        self.rows.insert(0, row);
        self.touch();
    }

    /// Whether a mutation happened since the last `take_dirty`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Mutation counter
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.revision = self.revision.wrapping_add(1);
    }
}

//! Draft rows: blank rows above the data used to insert new records

use crate::editable::CellBuffer;

use super::cell::RowId;

/// An uncommitted row. Never part of the table until every field is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRow {
    pub id: RowId,
    pub values: Vec<CellBuffer>,
}

impl DraftRow {
    pub fn new(id: RowId, column_count: usize) -> Self {
        Self {
            id,
            values: vec![CellBuffer::new(); column_count],
        }
    }

    /// Every field blank: leaving it does nothing
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(CellBuffer::is_blank)
    }

    /// Every field filled: ready to commit
    pub fn is_complete(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(|v| !v.is_blank())
    }

    /// Field values in column order
    pub fn field_values(&self) -> Vec<String> {
        self.values.iter().map(|v| v.as_str().to_string()).collect()
    }
}

//! Grid materialization
//!
//! Builds a disposable snapshot of what a rendering layer should draw:
//! header cells, draft rows, then data rows. Column widths come from the
//! single `ColumnWidths` table so header and body always agree.

use serde::Serialize;

use crate::host::RenderedLink;
use crate::model::{CellMode, Focus, GridModel, RowId};

/// Check if a string looks like a number (for right-alignment)
pub fn is_number(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.parse::<f64>().is_ok()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub field: String,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Draft,
    Data,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    /// Raw buffer when editing, rendered markup otherwise (raw value until
    /// the first render lands)
    pub text: String,
    pub width: u32,
    pub editing: bool,
    pub focused: bool,
    pub align_right: bool,
    pub links: Vec<RenderedLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: RowId,
    pub kind: RowKind,
    pub cells: Vec<CellView>,
}

/// Snapshot of the whole grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridView {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<RowView>,
    /// Column currently being dragged
    pub resizing: Option<usize>,
}

impl GridView {
    pub fn build(model: &GridModel) -> Self {
        let columns = model.table.columns();
        let header = columns
            .iter()
            .enumerate()
            .map(|(col, field)| HeaderCell {
                field: field.clone(),
                width: model.widths.get(col),
            })
            .collect();

        let mut rows = Vec::with_capacity(model.drafts.len() + model.rows.len());

        for draft in &model.drafts {
            let cells = draft
                .values
                .iter()
                .enumerate()
                .map(|(col, buffer)| CellView {
                    text: buffer.as_str().to_string(),
                    width: model.widths.get(col),
                    editing: true,
                    focused: model.focus
                        == Some(Focus::Draft {
                            row: draft.id,
                            column: col,
                        }),
                    align_right: false,
                    links: Vec::new(),
                })
                .collect();
            rows.push(RowView {
                id: draft.id,
                kind: RowKind::Draft,
                cells,
            });
        }

        for (row_index, row) in model.rows.iter().enumerate() {
            let cells = row
                .cells
                .iter()
                .enumerate()
                .map(|(col, state)| {
                    let raw = model.table.get(row_index, col);
                    let focused = matches!(
                        model.focus,
                        Some(Focus::Cell(c)) if c.row == row.id && c.column == col
                    );
                    let (text, editing, links) = match &state.mode {
                        CellMode::Editing { buffer, .. } => {
                            (buffer.as_str().to_string(), true, Vec::new())
                        }
                        CellMode::Display {
                            rendered: Some(rendered),
                        } => (rendered.markup.clone(), false, rendered.links.clone()),
                        CellMode::Display { rendered: None } => {
                            (raw.to_string(), false, Vec::new())
                        }
                    };
                    CellView {
                        text,
                        width: model.widths.get(col),
                        editing,
                        focused,
                        align_right: !editing && is_number(raw),
                        links,
                    }
                })
                .collect();
            rows.push(RowView {
                id: row.id,
                kind: RowKind::Data,
                cells,
            });
        }

        Self {
            header,
            rows,
            resizing: model.resize.map(|d| d.column),
        }
    }

    /// Widths of every cell in a column, header first
    pub fn column_widths(&self, column: usize) -> Vec<u32> {
        self.header
            .get(column)
            .map(|h| h.width)
            .into_iter()
            .chain(
                self.rows
                    .iter()
                    .filter_map(|r| r.cells.get(column).map(|c| c.width)),
            )
            .collect()
    }

    /// Rows of the given kind
    pub fn rows_of(&self, kind: RowKind) -> impl Iterator<Item = &RowView> {
        self.rows.iter().filter(move |r| r.kind == kind)
    }
}

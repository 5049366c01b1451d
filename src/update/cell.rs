//! Cell edit controller
//!
//! ```text
//! Display ──activate──▶ Editing ──commit (blur / Enter)──▶ Display
//!                          └──────cancel (Escape)─────────▶ Display
//! ```
//!
//! A commit writes the buffer to the table only when it differs from the
//! current value; only then is a new render requested.

use crate::commands::Cmd;
use crate::model::{CellRef, Focus, GridModel};

use super::render::request_render;

/// Switch a data cell to editing, seeding the buffer from the table
pub(crate) fn activate_cell(model: &mut GridModel, cell: CellRef) -> Option<Cmd> {
    if model.focus == Some(Focus::Cell(cell)) {
        return None;
    }
    let blurred = super::focus::blur(model);

    let Some(row_index) = model.row_index(cell.row) else {
        tracing::warn!("Activate on unknown row {:?}", cell.row);
        return blurred;
    };
    let value = model.table.get(row_index, cell.column).to_string();
    let Some(state) = model.cell_mut(cell) else {
        tracing::warn!("Activate on unknown column {}", cell.column);
        return blurred;
    };

    if state.begin_editing(&value) {
        tracing::debug!("Cell {:?} Display -> Editing", cell);
    }
    model.focus = Some(Focus::Cell(cell));
    model.ensure_draft_row();

    Cmd::merge(blurred, Some(Cmd::Redraw))
}

/// Leave editing, writing the buffer to the table if it changed
pub(crate) fn commit_cell(model: &mut GridModel, cell: CellRef) -> Option<Cmd> {
    let row_index = model.row_index(cell.row)?;
    let raw = model.rows[row_index]
        .cells
        .get_mut(cell.column)?
        .finish_editing()?;

    if raw == model.table.get(row_index, cell.column) {
        tracing::debug!("Cell {:?} committed unchanged", cell);
        return Some(Cmd::Redraw);
    }

    let field = model.table.columns()[cell.column].clone();
    if let Err(e) = model.table.set_cell_value(row_index, &field, &raw) {
        tracing::error!("Commit of {:?} rejected: {}", cell, e);
        return Some(Cmd::Redraw);
    }
    tracing::debug!("Cell {:?} committed ({} = {:?})", cell, field, raw);

    let mut cmds = vec![Cmd::MarkModified, Cmd::Redraw];
    cmds.extend(request_render(model, row_index, cell.column));
    Some(Cmd::batch(cmds))
}

/// Leave editing without touching the table
pub(crate) fn cancel_cell(model: &mut GridModel, cell: CellRef) -> Option<Cmd> {
    if model.focus == Some(Focus::Cell(cell)) {
        model.focus = None;
    }
    model.cell_mut(cell)?.finish_editing()?;
    tracing::debug!("Cell {:?} edit cancelled", cell);
    Some(Cmd::Redraw)
}

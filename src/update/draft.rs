//! Draft-row controller
//!
//! Drafts live above the data. Leaving a draft cell checks the whole row:
//! all blank does nothing, partially filled stays a draft, fully filled is
//! inserted at the top of the table and becomes a data row in place (same
//! `RowId`). After every draft event `GridModel::ensure_draft_row` restores
//! the single idle blank draft.

use crate::commands::Cmd;
use crate::model::{Focus, GridModel, GridRow, RowId};

use super::render::render_row;

/// Move focus to a draft cell
pub(crate) fn focus_draft(model: &mut GridModel, row: RowId, column: usize) -> Option<Cmd> {
    if model.focus == Some(Focus::Draft { row, column }) {
        return None;
    }
    let left = super::focus::leave_focus(model);

    match model.draft(row) {
        Some(draft) if column < draft.values.len() => {
            model.focus = Some(Focus::Draft { row, column });
        }
        Some(_) => tracing::warn!("Focus on unknown draft column {}", column),
        // Committed by the focus change itself, or already gone
        None => tracing::debug!("Draft {:?} no longer exists", row),
    }
    model.ensure_draft_row();

    Cmd::merge(left, Some(Cmd::Redraw))
}

/// Run the commit check for a draft that lost focus
pub(crate) fn leave_draft(model: &mut GridModel, row: RowId) -> Option<Cmd> {
    let idx = model.draft_index(row)?;
    let draft = &model.drafts[idx];

    if draft.is_blank() {
        return None;
    }
    if !draft.is_complete() {
        tracing::debug!("Draft {:?} partially filled, not committing", row);
        return None;
    }
    commit_draft(model, idx)
}

/// Insert a complete draft at the top of the table
fn commit_draft(model: &mut GridModel, idx: usize) -> Option<Cmd> {
    let draft = model.drafts.remove(idx);
    let columns = model.table.columns().to_vec();
    model
        .table
        .insert_row_at_top(columns.iter().zip(draft.field_values()));
    model
        .rows
        .insert(0, GridRow::new(draft.id, columns.len()));
    tracing::debug!("Draft {:?} committed as row 0", draft.id);

    let mut cmds = vec![Cmd::MarkModified, Cmd::Redraw];
    cmds.extend(render_row(model, 0));
    Some(Cmd::batch(cmds))
}

//! Focus routing between data cells and draft cells

use crate::commands::Cmd;
use crate::messages::FocusMsg;
use crate::model::{Focus, GridModel};

use super::cell::{activate_cell, commit_cell};
use super::draft::{focus_draft, leave_draft};

/// Handle focus messages
pub fn update_focus(model: &mut GridModel, msg: FocusMsg) -> Option<Cmd> {
    match msg {
        FocusMsg::ActivateCell(cell) => activate_cell(model, cell),
        FocusMsg::FocusDraft { row, column } => focus_draft(model, row, column),
        FocusMsg::Blur => blur(model),
    }
}

/// Take focus away from the current surface and run its commit rules,
/// without restoring the draft invariant
pub(crate) fn leave_focus(model: &mut GridModel) -> Option<Cmd> {
    match model.focus.take()? {
        Focus::Cell(cell) => commit_cell(model, cell),
        Focus::Draft { row, .. } => leave_draft(model, row),
    }
}

/// Focus left the grid
pub(crate) fn blur(model: &mut GridModel) -> Option<Cmd> {
    let cmd = leave_focus(model);
    model.ensure_draft_row();
    cmd
}

//! Text editing on the focused surface (data cell in editing mode, or draft cell)

use crate::commands::Cmd;
use crate::editable::CellBuffer;
use crate::messages::{EditMsg, MoveTarget};
use crate::model::{Focus, GridModel};

use super::cell::cancel_cell;
use super::focus::blur;

/// Opening link marker inserted around a selection by `[`
pub const LINK_OPEN: &str = "[[";
/// Closing link marker
pub const LINK_CLOSE: &str = "]]";

/// Handle text editing messages
pub fn update_edit(model: &mut GridModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        // Commit trigger; never inserts a newline
        EditMsg::Enter { modifier: false } => blur(model),
        EditMsg::Cancel => match model.focus? {
            Focus::Cell(cell) => cancel_cell(model, cell),
            Focus::Draft { .. } => blur(model),
        },
        msg => {
            let buffer = model.focused_buffer_mut()?;
            apply(buffer, msg);
            if model.focused_draft().is_some() {
                model.ensure_draft_row();
            }
            Some(Cmd::Redraw)
        }
    }
}

fn apply(buffer: &mut CellBuffer, msg: EditMsg) {
    match msg {
        EditMsg::InsertChar('[') if buffer.has_selection() => {
            buffer.wrap_selection(LINK_OPEN, LINK_CLOSE);
        }
        EditMsg::InsertChar(ch) => buffer.insert_char(ch),
        EditMsg::InsertText(text) => buffer.insert_text(&text),
        EditMsg::DeleteBackward => buffer.delete_backward(),
        EditMsg::DeleteForward => buffer.delete_forward(),
        EditMsg::Move { target, extend } => match target {
            MoveTarget::Left => buffer.move_left(extend),
            MoveTarget::Right => buffer.move_right(extend),
            MoveTarget::LineStart => buffer.move_line_start(extend),
            MoveTarget::LineEnd => buffer.move_line_end(extend),
        },
        EditMsg::SelectAll => buffer.select_all(),
        EditMsg::SetSelection { anchor, head } => buffer.set_selection(anchor, head),
        EditMsg::Enter { modifier: true } => buffer.insert_char('\n'),
        // Handled by update_edit before reaching the buffer
        EditMsg::Enter { modifier: false } | EditMsg::Cancel => {}
    }
}

//! Column resize controller
//!
//! `width = start_width + (x - start_x)`, floored at the configured minimum.
//! The width lands in `GridModel::widths`, which the view applies to the
//! header and every body cell of the column.

use crate::commands::Cmd;
use crate::messages::ResizeMsg;
use crate::model::{GridModel, ResizeDrag};

/// Handle column drag messages
pub fn update_resize(model: &mut GridModel, msg: ResizeMsg) -> Option<Cmd> {
    match msg {
        ResizeMsg::Start { column, x } => {
            if column >= model.table.column_count() {
                tracing::warn!("Resize start on unknown column {}", column);
                return None;
            }
            model.resize = Some(ResizeDrag {
                column,
                start_x: x,
                start_width: model.widths.get(column),
            });
            None
        }
        ResizeMsg::Move { x } => {
            let drag = model.resize?;
            let requested = drag.requested_width(x).clamp(0, u32::MAX as i64) as u32;
            let applied = model.widths.set(drag.column, requested);
            tracing::trace!(
                "Column {} resized to {}px (requested {})",
                drag.column,
                applied,
                requested
            );
            Some(Cmd::Redraw)
        }
        ResizeMsg::End => model.resize.take().map(|drag| {
            tracing::debug!(
                "Column {} resize ended at {}px",
                drag.column,
                model.widths.get(drag.column)
            );
            Cmd::Redraw
        }),
    }
}

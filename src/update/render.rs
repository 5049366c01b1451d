//! Render request and completion handling
//!
//! Every request bumps the cell's generation and carries the value the table
//! holds at that moment. A completion is applied only if its generation is
//! still the cell's current one, so a slow render of an old value can never
//! overwrite a newer projection.

use crate::commands::Cmd;
use crate::messages::RenderMsg;
use crate::model::{CellRef, GridModel};

/// Build a render request for one data cell from its latest committed value
pub(crate) fn request_render(model: &mut GridModel, row_index: usize, column: usize) -> Option<Cmd> {
    let raw = model.table.get(row_index, column).to_string();
    let source_path = model.source_path.clone();
    let row = model.rows.get_mut(row_index)?;
    let cell = CellRef::new(row.id, column);
    let generation = row.cells.get_mut(column)?.next_generation();

    Some(Cmd::RenderCell {
        cell,
        generation,
        raw,
        source_path,
    })
}

/// Render requests for every cell of one row
pub(crate) fn render_row(model: &mut GridModel, row_index: usize) -> Vec<Cmd> {
    (0..model.table.column_count())
        .filter_map(|col| request_render(model, row_index, col))
        .collect()
}

/// Render requests for the whole table
pub(crate) fn render_all(model: &mut GridModel) -> Option<Cmd> {
    let cmds: Vec<Cmd> = (0..model.rows.len())
        .flat_map(|row| render_row(model, row))
        .collect();

    if cmds.is_empty() {
        None
    } else {
        Some(Cmd::batch(cmds))
    }
}

/// Handle render results
pub fn update_render(model: &mut GridModel, msg: RenderMsg) -> Option<Cmd> {
    match msg {
        RenderMsg::Completed {
            cell,
            generation,
            result,
        } => {
            let Some(state) = model.cell_mut(cell) else {
                tracing::debug!("Discarding render for vanished cell {:?}", cell);
                return None;
            };

            if state.generation != generation {
                tracing::debug!(
                    "Discarding stale render for {:?}: generation {} != current {}",
                    cell,
                    generation,
                    state.generation
                );
                return None;
            }

            match result {
                Ok(rendered) => {
                    state.set_rendered(rendered);
                    Some(Cmd::Redraw)
                }
                Err(e) => {
                    // Previous projection stays visible
                    tracing::warn!("Render failed for {:?}: {}", cell, e);
                    None
                }
            }
        }
    }
}

/// A rendered link was clicked: hand its target to the navigator
pub fn link_clicked(model: &GridModel, cell: CellRef, link: usize, new_pane: bool) -> Option<Cmd> {
    let state = model.cell(cell)?;
    if state.is_editing() {
        return None;
    }
    let Some(target) = state.rendered().and_then(|r| r.links.get(link)) else {
        tracing::warn!("Click on unknown link {} in {:?}", link, cell);
        return None;
    };

    Some(Cmd::OpenLink {
        target: target.target.clone(),
        source_path: model.source_path.clone(),
        new_pane,
    })
}

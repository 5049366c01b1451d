//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod cell;
mod document;
mod draft;
mod edit;
mod focus;
mod render;
mod resize;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::GridModel;

pub use document::update_document;
pub use edit::{update_edit, LINK_CLOSE, LINK_OPEN};
pub use focus::update_focus;
pub use render::{link_clicked, update_render};
pub use resize::update_resize;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    tracing::trace!("update: {:?}", msg);

    match msg {
        Msg::Document(m) => update_document(model, m),
        Msg::Focus(m) => update_focus(model, m),
        Msg::Edit(m) => update_edit(model, m),
        Msg::Resize(m) => update_resize(model, m),
        Msg::Render(m) => update_render(model, m),
        Msg::LinkClicked {
            cell,
            link,
            new_pane,
        } => link_clicked(model, cell, link, new_pane),
    }
}

//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! `crate::runtime::GridRuntime` executes them against the host collaborators.

use std::path::PathBuf;

use crate::model::CellRef;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the grid
    Redraw,
    /// Render a cell's raw value in the background.
    /// Sends `Msg::Render(RenderMsg::Completed)` when done.
    RenderCell {
        cell: CellRef,
        generation: u64,
        raw: String,
        source_path: PathBuf,
    },
    /// Tell the document host a committed mutation happened
    MarkModified,
    /// Hand a clicked link to the navigator
    OpenLink {
        target: String,
        source_path: PathBuf,
        new_pane: bool,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Combine two optional commands into one
    pub fn merge(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (None, None) => None,
            (Some(cmd), None) | (None, Some(cmd)) => Some(cmd),
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None | Cmd::OpenLink { .. } | Cmd::RenderCell { .. } => false,
            Cmd::Redraw | Cmd::MarkModified => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

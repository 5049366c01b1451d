//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::csv::Delimiter;
use crate::host::{RenderError, RenderedCell};
use crate::model::{CellRef, RowId};

/// Document lifecycle messages, pushed by the host
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Replace the whole table with freshly loaded text.
    /// Uncommitted drafts and in-progress edits are discarded.
    Load {
        text: String,
        source_path: PathBuf,
        /// Overrides the configured/detected delimiter
        delimiter: Option<Delimiter>,
    },
    /// Drop all data (empty document)
    Clear,
}

/// Focus changes between editable surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMsg {
    /// Switch a data cell to editing and focus it (double-click)
    ActivateCell(CellRef),
    /// Focus a cell of a draft row
    FocusDraft { row: RowId, column: usize },
    /// Focus left the grid's editable surfaces
    Blur,
}

/// Cursor movement targets inside a cell buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    Left,
    Right,
    LineStart,
    LineEnd,
}

/// Text editing messages, applied to the focused surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Type a character. `[` with a selection wraps it in a link marker.
    InsertChar(char),
    /// Insert text (paste)
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    /// Move the cursor, optionally extending the selection (Shift)
    Move { target: MoveTarget, extend: bool },
    SelectAll,
    /// Selection from pointer input, in character offsets
    SetSelection { anchor: usize, head: usize },
    /// Enter key. Without modifier it commits; with one it inserts a newline.
    Enter { modifier: bool },
    /// Escape key: leave editing without committing
    Cancel,
}

/// Column boundary drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeMsg {
    Start { column: usize, x: f64 },
    Move { x: f64 },
    End,
}

/// Results coming back from background renders
#[derive(Debug, Clone)]
pub enum RenderMsg {
    Completed {
        cell: CellRef,
        generation: u64,
        result: Result<RenderedCell, RenderError>,
    },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Document(DocumentMsg),
    Focus(FocusMsg),
    Edit(EditMsg),
    Resize(ResizeMsg),
    Render(RenderMsg),
    /// A rendered link was clicked. Default navigation is suppressed; the
    /// target goes to the link navigator.
    LinkClicked {
        cell: CellRef,
        link: usize,
        new_pane: bool,
    },
}

//! Per-cell display/editing state

use serde::Serialize;

use crate::editable::CellBuffer;
use crate::host::RenderedCell;

/// Stable identity of a grid row (data or draft).
///
/// Row indices shift when a row is inserted at the top; ids do not, so
/// background renders can find their cell again. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RowId(pub u64);

/// A data cell: row identity plus column index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellRef {
    pub row: RowId,
    pub column: usize,
}

impl CellRef {
    pub fn new(row: RowId, column: usize) -> Self {
        Self { row, column }
    }
}

/// The two modes of a data cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellMode {
    /// Showing the rendered projection. `None` until the first render lands.
    Display { rendered: Option<RenderedCell> },
    /// Showing the raw buffer. The last projection is kept for when the cell
    /// returns to display without a new render.
    Editing {
        buffer: CellBuffer,
        last_rendered: Option<RenderedCell>,
    },
}

impl Default for CellMode {
    fn default() -> Self {
        CellMode::Display { rendered: None }
    }
}

/// State of one data cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellState {
    pub mode: CellMode,
    /// Generation of the most recent render request; older results are stale
    pub generation: u64,
}

impl CellState {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CellMode::Editing { .. })
    }

    /// Latest projection, whichever mode the cell is in
    pub fn rendered(&self) -> Option<&RenderedCell> {
        match &self.mode {
            CellMode::Display { rendered } => rendered.as_ref(),
            CellMode::Editing { last_rendered, .. } => last_rendered.as_ref(),
        }
    }

    pub fn buffer(&self) -> Option<&CellBuffer> {
        match &self.mode {
            CellMode::Editing { buffer, .. } => Some(buffer),
            CellMode::Display { .. } => None,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut CellBuffer> {
        match &mut self.mode {
            CellMode::Editing { buffer, .. } => Some(buffer),
            CellMode::Display { .. } => None,
        }
    }

    /// Display -> Editing, seeding the buffer from `value`.
    /// Returns false if the cell was already editing.
    pub fn begin_editing(&mut self, value: &str) -> bool {
        if self.is_editing() {
            return false;
        }
        let last_rendered = match std::mem::take(&mut self.mode) {
            CellMode::Display { rendered } => rendered,
            CellMode::Editing { last_rendered, .. } => last_rendered,
        };
        self.mode = CellMode::Editing {
            buffer: CellBuffer::from_text(value),
            last_rendered,
        };
        true
    }

    /// Editing -> Display, returning the raw buffer text.
    /// The previous projection stays visible until a new render arrives.
    pub fn finish_editing(&mut self) -> Option<String> {
        match std::mem::take(&mut self.mode) {
            CellMode::Editing {
                buffer,
                last_rendered,
            } => {
                self.mode = CellMode::Display {
                    rendered: last_rendered,
                };
                Some(buffer.as_str().to_string())
            }
            display => {
                self.mode = display;
                None
            }
        }
    }

    /// Store a finished render in whichever mode the cell is in
    pub fn set_rendered(&mut self, result: RenderedCell) {
        match &mut self.mode {
            CellMode::Display { rendered } => *rendered = Some(result),
            CellMode::Editing { last_rendered, .. } => *last_rendered = Some(result),
        }
    }

    /// Start a new render request and return its generation
    pub fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}

/// One materialized data row, parallel to the table row at the same index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub id: RowId,
    pub cells: Vec<CellState>,
}

impl GridRow {
    pub fn new(id: RowId, column_count: usize) -> Self {
        Self {
            id,
            cells: vec![CellState::default(); column_count],
        }
    }
}

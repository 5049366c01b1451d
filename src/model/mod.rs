//! Grid model - the complete state of the grid view
//!
//! The `Table` is the single writable copy of the data. `rows` is a
//! projection of it (one `GridRow` per table row, same index), `drafts` are
//! uncommitted rows shown above the data, and `widths` is presentation only.
//!
//! ```text
//! GridModel
//! ├── table: Table            (source of truth)
//! ├── drafts: [DraftRow]      (top of grid, index 0 topmost)
//! ├── rows: [GridRow]         (parallel to table rows)
//! │       └── cells: [CellState { Display | Editing }]
//! ├── widths: ColumnWidths    (+ resize: Option<ResizeDrag>)
//! └── focus: Option<Focus>
//! ```

mod cell;
mod columns;
mod draft;

pub use cell::{CellMode, CellRef, CellState, GridRow, RowId};
pub use columns::{ColumnWidths, ResizeDrag, MIN_COLUMN_WIDTH};
pub use draft::DraftRow;

use std::path::PathBuf;

use crate::config::GridConfig;
use crate::csv::{serialize, CodecError, ParseReport, Table};
use crate::editable::CellBuffer;

/// The editable surface keyboard input goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Cell(CellRef),
    Draft { row: RowId, column: usize },
}

/// The complete grid model
#[derive(Debug)]
pub struct GridModel {
    /// Parsed data, the only writable copy
    pub table: Table,
    /// Materialized data rows, index-aligned with `table`
    pub rows: Vec<GridRow>,
    /// Draft rows shown above the data
    pub drafts: Vec<DraftRow>,
    /// Column widths in pixels
    pub widths: ColumnWidths,
    /// Active column drag, if any
    pub resize: Option<ResizeDrag>,
    /// Focused editable surface
    pub focus: Option<Focus>,
    /// Path of the document being viewed, for link resolution
    pub source_path: PathBuf,
    /// What the last load had to drop
    pub last_report: ParseReport,
    pub config: GridConfig,
    next_row_id: u64,
}

impl GridModel {
    /// Create an empty grid
    pub fn new(config: GridConfig) -> Self {
        let config = config.sanitized();
        Self {
            table: Table::new(),
            rows: Vec::new(),
            drafts: Vec::new(),
            widths: ColumnWidths::default(),
            resize: None,
            focus: None,
            source_path: PathBuf::new(),
            last_report: ParseReport::default(),
            config,
            next_row_id: 0,
        }
    }

    /// A grid is active once it has columns to edit
    pub fn is_active(&self) -> bool {
        self.table.column_count() > 0
    }

    /// Serialized table, available at any time
    pub fn get_view_data(&self) -> Result<String, CodecError> {
        serialize(&self.table)
    }

    /// Replace everything with a new table.
    ///
    /// Drafts, edits in progress, focus and widths are discarded.
    pub fn replace_table(&mut self, table: Table, report: ParseReport) {
        let column_count = table.column_count();
        self.widths = ColumnWidths::estimate(
            &table,
            self.config.min_column_width,
            self.config.max_initial_column_width,
            self.config.char_width_px,
        );
        self.table = table;
        self.last_report = report;
        let mut rows = Vec::with_capacity(self.table.row_count());
        for _ in 0..self.table.row_count() {
            let id = self.alloc_row_id();
            rows.push(GridRow::new(id, column_count));
        }
        self.rows = rows;
        self.drafts.clear();
        self.focus = None;
        self.resize = None;
        self.ensure_draft_row();
    }

    pub(crate) fn alloc_row_id(&mut self) -> RowId {
        self.next_row_id += 1;
        RowId(self.next_row_id)
    }

    /// Current table index of a data row
    pub fn row_index(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    /// Reference to the data cell at a table position
    pub fn cell_ref(&self, row_index: usize, column: usize) -> Option<CellRef> {
        let row = self.rows.get(row_index)?;
        (column < row.cells.len()).then(|| CellRef::new(row.id, column))
    }

    pub fn cell(&self, cell: CellRef) -> Option<&CellState> {
        let idx = self.row_index(cell.row)?;
        self.rows[idx].cells.get(cell.column)
    }

    pub fn cell_mut(&mut self, cell: CellRef) -> Option<&mut CellState> {
        let idx = self.row_index(cell.row)?;
        self.rows[idx].cells.get_mut(cell.column)
    }

    /// Position of a draft in `drafts`
    pub fn draft_index(&self, id: RowId) -> Option<usize> {
        self.drafts.iter().position(|d| d.id == id)
    }

    pub fn draft(&self, id: RowId) -> Option<&DraftRow> {
        self.drafts.iter().find(|d| d.id == id)
    }

    /// Draft row holding focus, if any
    pub fn focused_draft(&self) -> Option<RowId> {
        match self.focus {
            Some(Focus::Draft { row, .. }) => Some(row),
            _ => None,
        }
    }

    /// Buffer of the focused surface
    pub fn focused_buffer_mut(&mut self) -> Option<&mut CellBuffer> {
        match self.focus? {
            Focus::Cell(cell) => self.cell_mut(cell)?.buffer_mut(),
            Focus::Draft { row, column } => {
                let idx = self.draft_index(row)?;
                self.drafts[idx].values.get_mut(column)
            }
        }
    }

    /// Drafts nobody has typed into and nobody is focused on
    pub fn idle_blank_drafts(&self) -> usize {
        let focused = self.focused_draft();
        self.drafts
            .iter()
            .filter(|d| Some(d.id) != focused && d.is_blank())
            .count()
    }

    /// Keep exactly one idle blank draft row at the top.
    ///
    /// Runs after every draft-related event. Spawns a fresh draft above the
    /// others when the last idle blank one gets focus or content, and drops
    /// surplus idle blank drafts (keeping the topmost). Partially filled
    /// drafts are left alone.
    pub fn ensure_draft_row(&mut self) {
        if !self.is_active() {
            self.drafts.clear();
            return;
        }

        let focused = self.focused_draft();
        let mut kept_blank = false;
        self.drafts.retain(|d| {
            if Some(d.id) == focused || !d.is_blank() {
                return true;
            }
            if kept_blank {
                tracing::debug!("Dropping surplus blank draft {:?}", d.id);
                return false;
            }
            kept_blank = true;
            true
        });

        if !kept_blank {
            let id = self.alloc_row_id();
            tracing::debug!("Spawning draft row {:?}", id);
            self.drafts
                .insert(0, DraftRow::new(id, self.table.column_count()));
        }
    }
}

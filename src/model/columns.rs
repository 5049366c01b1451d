//! Column width state
//!
//! Widths are keyed by column index and applied by the view layer to the
//! header cell and every body cell of that column. They never reach the
//! serialized text.

use serde::Serialize;

use crate::csv::Table;

/// Smallest width a drag may produce, in pixels
pub const MIN_COLUMN_WIDTH: u32 = 50;

/// Per-column pixel widths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnWidths {
    widths: Vec<u32>,
    min: u32,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            widths: Vec::new(),
            min: MIN_COLUMN_WIDTH,
        }
    }
}

impl ColumnWidths {
    /// Initial widths estimated from content (first 100 rows plus header).
    ///
    /// `min` never goes below `MIN_COLUMN_WIDTH`.
    pub fn estimate(table: &Table, min: u32, max: u32, char_width_px: u32) -> Self {
        const SAMPLE_ROWS: usize = 100;
        const PADDING_PX: u32 = 16;

        let min = min.max(MIN_COLUMN_WIDTH);
        let max = max.max(min);
        let mut chars: Vec<usize> = table.columns().iter().map(|c| c.chars().count()).collect();

        for row in table.rows().take(SAMPLE_ROWS) {
            for (col, value) in row.values().iter().enumerate() {
                let longest_line = value.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                chars[col] = chars[col].max(longest_line);
            }
        }

        let widths = chars
            .into_iter()
            .map(|n| {
                let px = (n as u32).saturating_mul(char_width_px).saturating_add(PADDING_PX);
                px.clamp(min, max)
            })
            .collect();

        Self { widths, min }
    }

    /// Width of a column, or the minimum for unknown columns
    pub fn get(&self, column: usize) -> u32 {
        self.widths.get(column).copied().unwrap_or(self.min)
    }

    /// Set a width, clamped to the minimum. Returns the applied width.
    pub fn set(&mut self, column: usize, width: u32) -> u32 {
        let applied = width.max(self.min);
        if column >= self.widths.len() {
            self.widths.resize(column + 1, self.min);
        }
        self.widths[column] = applied;
        applied
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// An in-progress boundary drag; holds pointer capture until released
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDrag {
    pub column: usize,
    pub start_x: f64,
    pub start_width: u32,
}

impl ResizeDrag {
    /// Width requested by the pointer at `x`, before clamping
    pub fn requested_width(&self, x: f64) -> i64 {
        (self.start_width as f64 + (x - self.start_x)).round() as i64
    }
}

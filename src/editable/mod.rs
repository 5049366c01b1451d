//! Raw text editing for cells in editing mode.
//!
//! - [`CellBuffer`]: the raw text of one cell with a cursor and selection
//! - [`Selection`]: anchor/head pair over character offsets
//!
//! # Example
//!
//! ```
//! use tablet::editable::CellBuffer;
//!
//! let mut buf = CellBuffer::from_text("see note");
//! buf.set_selection(4, 8);
//! buf.wrap_selection("[[", "]]");
//!
//! assert_eq!(buf.as_str(), "see [[note]]");
//! ```

mod buffer;
mod selection;

pub use buffer::CellBuffer;
pub use selection::Selection;

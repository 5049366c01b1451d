//! Delimited-text codec and table model
//!
//! ```text
//! text ──parse──▶ Table ──serialize──▶ text
//! ```
//!
//! The `Table` is the only writable copy of the data. Everything in
//! `crate::model` is a projection of it plus presentation state.

mod model;
mod parser;

pub use model::{Delimiter, RowRef, Table, TableError};
pub use parser::{
    detect_delimiter, parse, parse_with_report, serialize, CodecError, MalformedRecord,
    ParseReport,
};

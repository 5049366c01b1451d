//! Delimited-text codec using the csv crate
//!
//! RFC 4180 compliant parsing and writing with support for quoted fields,
//! escaped quotes, and custom delimiters.

use std::io::Cursor;

use thiserror::Error;

use super::model::{unique_columns, Delimiter, Table};

/// Error type for serialization
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer flush failed: {0}")]
    Flush(String),

    #[error("serialized CSV is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A record that was dropped during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based line where the record starts
    pub line: u64,
    /// Number of cells found
    pub found: usize,
    /// Number of cells the header defines
    pub expected: usize,
}

/// What the parser had to skip to produce its table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Records whose cell count disagreed with the header
    pub dropped: Vec<MalformedRecord>,
    /// Records the reader itself rejected (line, message)
    pub unreadable: Vec<(Option<u64>, String)>,
    /// Header names that were renamed to stay unique (original, renamed)
    pub renamed_columns: Vec<(String, String)>,
}

impl ParseReport {
    /// True when nothing had to be dropped or renamed
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && self.unreadable.is_empty() && self.renamed_columns.is_empty()
    }
}

/// Parse delimited text into a Table, best-effort
pub fn parse(content: &str, delimiter: Delimiter) -> Table {
    parse_with_report(content, delimiter).0
}

/// Parse delimited text into a Table and report what was skipped.
///
/// The first non-empty record is the header. Records whose cell count differs
/// from the header are dropped rather than failing the whole parse.
pub fn parse_with_report(content: &str, delimiter: Delimiter) -> (Table, ParseReport) {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(content.as_bytes()));

    let mut report = ParseReport::default();
    let mut columns: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map(|p| p.line());
                tracing::warn!("Skipping unreadable record at line {:?}: {}", line, e);
                report.unreadable.push((line, e.to_string()));
                continue;
            }
        };

        let Some(header) = &columns else {
            let raw: Vec<String> = record.iter().map(str::to_string).collect();
            let (unique, renamed) = unique_columns(raw);
            report.renamed_columns = renamed;
            columns = Some(unique);
            continue;
        };

        if record.len() != header.len() {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            tracing::warn!(
                "Dropping malformed record at line {}: {} cells, expected {}",
                line,
                record.len(),
                header.len()
            );
            report.dropped.push(MalformedRecord {
                line,
                found: record.len(),
                expected: header.len(),
            });
            continue;
        }

        rows.push(record.iter().map(str::to_string).collect());
    }

    let table = Table::from_parts(columns.unwrap_or_default(), rows, delimiter);
    tracing::debug!(
        "Parsed table: {} columns, {} rows, {} dropped",
        table.column_count(),
        table.row_count(),
        report.dropped.len()
    );
    (table, report)
}

/// Serialize a Table back to delimited text.
///
/// Emits the header then one record per row, quoting only where needed.
/// A table without columns serializes to the empty string.
pub fn serialize(table: &Table) -> Result<String, CodecError> {
    if table.column_count() == 0 {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(table.delimiter().byte())
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.values())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CodecError::Flush(e.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return Delimiter::Comma;
    }

    if comma_count == max {
        Delimiter::Comma
    } else if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else {
        Delimiter::Semicolon
    }
}

//! Document load/clear, pushed by the host

use std::path::Path;

use crate::commands::Cmd;
use crate::csv::{detect_delimiter, parse_with_report, Delimiter, ParseReport, Table};
use crate::messages::DocumentMsg;
use crate::model::GridModel;

use super::render::render_all;

/// Handle document messages
pub fn update_document(model: &mut GridModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::Load {
            text,
            source_path,
            delimiter,
        } => {
            let delimiter = delimiter
                .or_else(|| model.config.delimiter.fixed())
                .unwrap_or_else(|| choose_delimiter(&source_path, &text));

            let (table, report) = parse_with_report(&text, delimiter);
            if !report.is_clean() {
                tracing::warn!(
                    "Loaded {} with {} dropped and {} unreadable records",
                    source_path.display(),
                    report.dropped.len(),
                    report.unreadable.len()
                );
            }

            model.source_path = source_path;
            model.replace_table(table, report);
            Cmd::merge(render_all(model), Some(Cmd::Redraw))
        }
        DocumentMsg::Clear => {
            model.replace_table(Table::new(), ParseReport::default());
            Some(Cmd::Redraw)
        }
    }
}

/// Known extensions decide; anything else is sniffed from content
fn choose_delimiter(path: &Path, text: &str) -> Delimiter {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some(ext @ ("csv" | "tsv" | "psv")) => Delimiter::from_extension(ext),
        _ => detect_delimiter(text),
    }
}

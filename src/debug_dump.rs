//! Debug state dump for development diagnostics
//!
//! Serializes a snapshot of the grid state to JSON for easier debugging.

use serde::Serialize;

use crate::model::GridModel;
use crate::view::GridView;

#[derive(Serialize)]
pub struct StateDump {
    pub source_path: String,
    pub table: TableDump,
    pub draft_count: usize,
    pub editing_cells: usize,
    pub focus: Option<String>,
    pub view: GridView,
}

#[derive(Serialize)]
pub struct TableDump {
    pub columns: Vec<String>,
    pub row_count: usize,
    pub revision: u64,
    pub dirty: bool,
    pub dropped_records: usize,
}

impl StateDump {
    pub fn from_model(model: &GridModel) -> Self {
        Self {
            source_path: model.source_path.display().to_string(),
            table: TableDump {
                columns: model.table.columns().to_vec(),
                row_count: model.table.row_count(),
                revision: model.table.revision(),
                dirty: model.table.is_dirty(),
                dropped_records: model.last_report.dropped.len(),
            },
            draft_count: model.drafts.len(),
            editing_cells: model
                .rows
                .iter()
                .flat_map(|r| &r.cells)
                .filter(|c| c.is_editing())
                .count(),
            focus: model.focus.map(|f| format!("{:?}", f)),
            view: GridView::build(model),
        }
    }
}

/// Pretty-printed JSON dump of the model
pub fn dump_json(model: &GridModel) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&StateDump::from_model(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::csv::{parse, Delimiter, ParseReport};

    #[test]
    fn test_dump_json_contains_table_summary() {
        let mut model = GridModel::new(GridConfig::default());
        model.replace_table(parse("a,b\n1,2\n", Delimiter::Comma), ParseReport::default());

        let json = dump_json(&model).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["table"]["row_count"], 1);
        assert_eq!(value["table"]["columns"][1], "b");
        assert_eq!(value["draft_count"], 1);
        assert_eq!(value["view"]["rows"][0]["kind"], "draft");
    }
}

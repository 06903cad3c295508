//=============================================================================
// File: src/components/feed_table.rs
//=============================================================================
use api::block_record::BLOCK_HASH_KEY;
use api::block_record::BLOCK_NUMBER_KEY;
use api::block_record::TIMESTAMP_KEY;
use api::BlockRecord;
use api::ColumnMode;
use dioxus::prelude::*;

const FIXED_HEADERS: [&str; 4] = ["Serial Number", "Block Number", "Block Hash", "Time"];

/// Headers and text cells, ready to render.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TableModel {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    /// One row per record, in stored order. Absent fields become empty cells;
    /// strings are shown bare and other JSON values in their JSON form.
    pub fn build(records: &[BlockRecord], columns: ColumnMode) -> Self {
        match columns {
            ColumnMode::Fixed => Self {
                headers: FIXED_HEADERS.iter().map(|h| h.to_string()).collect(),
                rows: records
                    .iter()
                    .enumerate()
                    .map(|(index, record)| {
                        let mut row = vec![(index + 1).to_string()];
                        row.extend(
                            [BLOCK_NUMBER_KEY, BLOCK_HASH_KEY, TIMESTAMP_KEY]
                                .iter()
                                .map(|key| record.text(key).unwrap_or_default()),
                        );
                        row
                    })
                    .collect(),
            },
            ColumnMode::DynamicFromKeys => {
                // columns come from whichever record is stored first.
                let headers = records.first().map(BlockRecord::keys).unwrap_or_default();
                let rows = records
                    .iter()
                    .map(|record| {
                        headers
                            .iter()
                            .map(|key| record.text(key).unwrap_or_default())
                            .collect()
                    })
                    .collect();
                Self { headers, rows }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[component]
pub fn FeedTable(model: TableModel) -> Element {
    rsx! {
        table {
            class: "container",
            thead {
                tr {
                    for header in model.headers.iter() {
                        th { h1 { "{header}" } }
                    }
                }
            }
            tbody {
                for (index, row) in model.rows.iter().enumerate() {
                    tr {
                        key: "{index}",
                        for cell in row.iter() {
                            td { "{cell}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fixed_columns_render_serial_number_first() {
        let records = vec![BlockRecord::new(100, "0xabc", "T1")];
        let model = TableModel::build(&records, ColumnMode::Fixed);

        assert_eq!(
            model.headers,
            vec!["Serial Number", "Block Number", "Block Hash", "Time"]
        );
        assert_eq!(model.rows, vec![vec!["1", "100", "0xabc", "T1"]]);
    }

    #[test]
    fn serial_numbers_follow_stored_order() {
        let records = vec![
            BlockRecord::new(7, "0x7", "T7"),
            BlockRecord::new(3, "0x3", "T3"),
        ];
        let model = TableModel::build(&records, ColumnMode::Fixed);

        let serials: Vec<_> = model.rows.iter().map(|r| r[0].as_str()).collect();
        let numbers: Vec<_> = model.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(serials, vec!["1", "2"]);
        assert_eq!(numbers, vec!["7", "3"]);
    }

    #[test]
    fn absent_fields_are_blank_cells() {
        let record: BlockRecord =
            serde_json::from_value(json!({ "latestBlockHash": "0xdef" })).unwrap();
        let model = TableModel::build(&[record], ColumnMode::Fixed);

        assert_eq!(model.rows, vec![vec!["1", "", "0xdef", ""]]);
    }

    #[test]
    fn dynamic_columns_come_from_the_first_record() {
        let first: BlockRecord =
            serde_json::from_value(json!({ "name": "ada", "id": 1, "admin": true })).unwrap();
        let second: BlockRecord =
            serde_json::from_value(json!({ "id": 2, "email": "bob@example.com" })).unwrap();
        let model = TableModel::build(&[first, second], ColumnMode::DynamicFromKeys);

        assert_eq!(model.headers, vec!["name", "id", "admin"]);
        assert_eq!(
            model.rows,
            vec![vec!["ada", "1", "true"], vec!["", "2", ""]]
        );
    }

    #[test]
    fn dynamic_columns_keep_known_keys_where_they_arrived() {
        let first: BlockRecord =
            serde_json::from_value(json!({ "name": "ada", "timestamp": 1_700_000_000, "id": 3 }))
                .unwrap();
        let model = TableModel::build(&[first], ColumnMode::DynamicFromKeys);

        assert_eq!(model.headers, vec!["name", "timestamp", "id"]);
        assert_eq!(model.rows, vec![vec!["ada", "1700000000", "3"]]);
    }

    #[test]
    fn fixed_cells_show_values_as_sent() {
        let record: BlockRecord = serde_json::from_value(json!({
            "latestBlockNumber": "0x64",
            "latestBlockHash": "0xabc",
            "timestamp": 1_700_000_000,
        }))
        .unwrap();
        let model = TableModel::build(&[record], ColumnMode::Fixed);

        assert_eq!(model.rows, vec![vec!["1", "0x64", "0xabc", "1700000000"]]);
    }

    #[test]
    fn empty_fixed_feed_still_has_headers() {
        let model = TableModel::build(&[], ColumnMode::Fixed);

        assert!(model.is_empty());
        assert_eq!(
            model.headers,
            vec!["Serial Number", "Block Number", "Block Hash", "Time"]
        );
    }

    #[test]
    fn empty_feed_has_no_rows() {
        assert!(TableModel::build(&[], ColumnMode::Fixed).is_empty());

        let dynamic = TableModel::build(&[], ColumnMode::DynamicFromKeys);
        assert!(dynamic.is_empty());
        assert!(dynamic.headers.is_empty());
    }
}

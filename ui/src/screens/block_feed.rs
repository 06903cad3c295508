//=============================================================================
// File: src/screens/block_feed.rs
//=============================================================================
use api::FeedConfig;
use dioxus::prelude::*;

use crate::components::feed_table::FeedTable;
use crate::components::feed_table::TableModel;
use crate::components::pico::Card;
use crate::hooks::use_block_feed::use_block_feed;

/// Polls the collaborator for its latest block and lists every block seen.
#[component]
pub fn BlockFeedView(config: FeedConfig) -> Element {
    let columns = config.columns;
    let state = use_block_feed(config).state();

    let model = use_memo(move || TableModel::build(&state.read().records, columns));
    let last_error = use_memo(move || state.read().last_error.clone());

    rsx! {
        Card {
            h1 {
                class: "title",
                "Latest Blocks"
            }
            if let Some(e) = last_error() {
                p {
                    small {
                        style: "color: var(--pico-del-color);",
                        "Last poll failed: {e}"
                    }
                }
            }
            // the table is always there; before the first block it has only headers.
            FeedTable {
                model: model(),
            }
            if model.read().is_empty() {
                p {
                    "Waiting for the first block..."
                }
                progress {}
            }
        }
    }
}

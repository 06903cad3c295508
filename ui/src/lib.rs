// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod block_feed;
pub mod compat;
mod components;
pub mod hooks;
pub mod poll_task;
mod screens;

use api::FeedConfig;
use components::pico::Container;
use screens::block_feed::BlockFeedView;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";
const OPEN_SANS: &str = "https://fonts.googleapis.com/css?family=Open+Sans:300,400,700";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    body {
        font-family: 'Open Sans', sans-serif;
    }

    .main_container {
        padding: 1rem;
    }

    .title {
        text-align: center;
        font-size: 1.75rem;
    }

    /* the table can outgrow narrow screens; scroll instead of squeezing hashes */
    article table.container {
        display: block;
        overflow-x: auto;
        white-space: nowrap;
    }

    table.container th h1 {
        font-size: 1rem;
        margin: 0;
    }
"#;

    // read once; the view keeps its settings for as long as it is mounted.
    let config = use_hook(FeedConfig::from_env);

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: PICO_CSS,
        }
        document::Link {
            rel: "stylesheet",
            href: OPEN_SANS,
        }
        style {
            "{app_css}"
        }
        div {
            class: "main_container",
            Container {
                BlockFeedView {
                    config,
                }
            }
        }
    }
}

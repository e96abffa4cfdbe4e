//! Canned prompts shown until the user starts typing.

use crate::state::ChatContext;
use dioxus::prelude::*;
use gw_model::role::QUICK_QUERIES;

#[component]
pub fn QuickQueries() -> Element {
    let mut chat = use_context::<ChatContext>();
    if !(chat.show_quick_queries)() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "padding: 16px; border-bottom: 1px solid #E5E7EB;",
            h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Quick Queries" }
            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 8px;",
                for query in QUICK_QUERIES {
                    button {
                        key: "{query}",
                        style: "padding: 8px; border: 1px solid #BFDBFE; background: #EFF6FF; border-radius: 8px; cursor: pointer; font-size: 12px;",
                        onclick: move |_| chat.pick_quick_query(query),
                        "{query}"
                    }
                }
            }
        }
    }
}

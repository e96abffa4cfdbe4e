use crate::View;
use dioxus::prelude::*;
use gw_chart_ui::components::{ChatInput, QuickQueries, RolePicker, TranscriptView};
use gw_chart_ui::state::ChatContext;

#[component]
pub fn ChatView() -> Element {
    let mut chat = use_context_provider(ChatContext::new);
    let mut view = use_context::<Signal<View>>();
    let sidebar_open = (chat.sidebar_open)();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; background: white; border-bottom: 1px solid #E5E7EB;",
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    button {
                        style: "padding: 6px 10px; border: 1px solid #D1D5DB; background: white; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| view.set(View::Home),
                        "← Home"
                    }
                    button {
                        style: "padding: 6px 10px; border: 1px solid #D1D5DB; background: white; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| chat.sidebar_open.set(!sidebar_open),
                        if sidebar_open { "Hide roles" } else { "Show roles" }
                    }
                    h2 { style: "margin: 0; font-size: 18px; color: #1E3A8A;", "INGRES AI Assistant" }
                }
                button {
                    style: "padding: 8px 14px; background: #2563EB; color: white; border: none; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| view.set(View::Visualization),
                    "📊 Visualize"
                }
            }
            div {
                style: "display: flex; flex: 1; min-height: 0;",
                if sidebar_open {
                    div {
                        style: "width: 300px; padding: 16px; background: white; border-right: 1px solid #E5E7EB; overflow-y: auto;",
                        RolePicker {}
                        button {
                            style: "margin-top: 16px; width: 100%; padding: 8px; border: 1px solid #FCA5A5; color: #B91C1C; background: #FEF2F2; border-radius: 6px; cursor: pointer;",
                            onclick: move |_| chat.clear(),
                            "🗑️ Clear Chat"
                        }
                    }
                }
                div {
                    style: "display: flex; flex-direction: column; flex: 1; min-width: 0; background: white;",
                    QuickQueries {}
                    TranscriptView {}
                    ChatInput {}
                }
            }
        }
    }
}

//! Backend connection indicator for the filter sidebar.

use crate::state::VisualizationContext;
use dioxus::prelude::*;

#[component]
pub fn BackendStatus() -> Element {
    let viz = use_context::<VisualizationContext>();
    let connected = viz.backend_connected();
    let (dot, text) = if connected {
        ("#22C55E", "Connected")
    } else {
        ("#EF4444", "Offline - Using fallback data")
    };

    rsx! {
        div {
            style: "margin-top: 24px; padding: 12px; background: #F9FAFB; border-radius: 8px; font-size: 12px; color: #4B5563;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 4px;",
                span { "Backend Status:" }
                span {
                    style: "display: inline-block; width: 8px; height: 8px; border-radius: 50%; background: {dot};",
                }
            }
            div {
                style: "color: #6B7280;",
                "{text}"
            }
        }
    }
}

use crate::View;
use dioxus::prelude::*;

const FEATURES: [(&str, &str, &str); 4] = [
    ("💬", "Ask in plain language", "Query assessment data, recharge and extraction figures without writing a query."),
    ("👥", "Role-aware answers", "Answers tuned for farmers, policymakers, researchers or general users."),
    ("📊", "Interactive charts", "Compare states, districts, years or metrics with bar, line, pie, doughnut and radar charts."),
    ("📤", "Export", "Download any chart as a PNG for reports."),
];

#[component]
pub fn HomeView() -> Element {
    let mut view = use_context::<Signal<View>>();

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 48px 16px; text-align: center;",
            div { style: "font-size: 48px;", "💧" }
            h1 { style: "margin: 8px 0; font-size: 32px; color: #1E3A8A;", "INGRES Groundwater Assistant" }
            p {
                style: "color: #4B5563; font-size: 16px; margin-bottom: 32px;",
                "Explore India's groundwater resource assessments through conversation and charts."
            }
            div {
                style: "display: flex; gap: 12px; justify-content: center; margin-bottom: 40px;",
                button {
                    style: "padding: 12px 24px; background: #2563EB; color: white; border: none; border-radius: 8px; cursor: pointer; font-size: 15px;",
                    onclick: move |_| view.set(View::Chat),
                    "Start Chatting"
                }
                button {
                    style: "padding: 12px 24px; background: white; color: #2563EB; border: 2px solid #2563EB; border-radius: 8px; cursor: pointer; font-size: 15px;",
                    onclick: move |_| view.set(View::Visualization),
                    "Visualize Data"
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; text-align: left;",
                for (icon, title, text) in FEATURES {
                    div {
                        key: "{title}",
                        style: "background: white; border: 1px solid #E5E7EB; border-radius: 12px; padding: 16px;",
                        div { style: "font-size: 28px;", "{icon}" }
                        h3 { style: "margin: 8px 0 4px 0; font-size: 16px;", "{title}" }
                        p { style: "margin: 0; color: #6B7280; font-size: 13px;", "{text}" }
                    }
                }
            }
        }
    }
}

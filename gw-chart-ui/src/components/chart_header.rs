//! Page header with title and subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            h1 {
                style: "margin: 0; font-size: 22px; color: #111827;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 2px 0 0 0; font-size: 13px; color: #4B5563;",
                    "{props.subtitle}"
                }
            }
        }
    }
}

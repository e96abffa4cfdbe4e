//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[props(default = "Error".to_string())]
    pub title: String,
    /// Renders a Retry button when set
    pub on_retry: Option<EventHandler<()>>,
    #[props(default = String::new())]
    pub hint: String,
}

/// Displays an error message in a styled box, optionally with a retry button.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; text-align: center;",
            strong { "{props.title}" }
            p {
                style: "margin: 8px 0; font-size: 14px; color: #4B5563;",
                "{props.message}"
            }
            if let Some(handler) = props.on_retry {
                button {
                    style: "padding: 8px 24px; background: #DC2626; color: white; border: none; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| handler.call(()),
                    "Retry"
                }
            }
            if !props.hint.is_empty() {
                p {
                    style: "margin: 8px 0 0 0; font-size: 12px; color: #6B7280;",
                    "{props.hint}"
                }
            }
        }
    }
}

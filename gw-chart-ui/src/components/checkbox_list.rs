//! Scrollable list of labelled checkboxes.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CheckboxListProps {
    pub label: String,
    pub items: Vec<String>,
    pub checked: Vec<String>,
    /// Called with (item, now_checked)
    pub on_toggle: EventHandler<(String, bool)>,
}

#[component]
pub fn CheckboxList(props: CheckboxListProps) -> Element {
    let on_toggle = props.on_toggle;
    rsx! {
        div {
            style: "margin-bottom: 20px;",
            label {
                style: "display: block; font-weight: 600; margin-bottom: 8px;",
                "{props.label}"
            }
            div {
                style: "max-height: 192px; overflow-y: auto; border: 1px solid #E5E7EB; border-radius: 8px; padding: 8px;",
                for item in props.items.iter().cloned() {
                    label {
                        key: "{item}",
                        style: "display: flex; align-items: center; gap: 6px; margin: 3px 0; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: props.checked.contains(&item),
                            onchange: {
                                let item = item.clone();
                                move |evt: Event<FormData>| on_toggle.call((item.clone(), evt.checked()))
                            },
                        }
                        span { "{item}" }
                    }
                }
            }
        }
    }
}

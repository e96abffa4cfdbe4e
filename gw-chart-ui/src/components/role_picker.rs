//! Sidebar cards for choosing who the answers are tailored to.

use crate::state::ChatContext;
use dioxus::prelude::*;
use gw_model::role::UserRole;

#[component]
pub fn RolePicker() -> Element {
    let mut chat = use_context::<ChatContext>();
    let selected = (chat.role)();

    rsx! {
        div {
            h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Select Your Role" }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
                for role in UserRole::ALL {
                    {
                        let border = if selected == Some(role) { "#2563EB" } else { "#E5E7EB" };
                        rsx! {
                            div {
                                key: "{role.id()}",
                                style: "padding: 10px; border: 2px solid {border}; border-radius: 8px; cursor: pointer; background: white;",
                                onclick: move |_| chat.select_role(role),
                                div { style: "font-size: 22px;", "{role.icon()}" }
                                h4 { style: "margin: 4px 0; font-size: 13px;", "{role.title()}" }
                                p { style: "margin: 0; font-size: 11px; color: #6B7280;", "{role.description()}" }
                            }
                        }
                    }
                }
            }
            if let Some(role) = selected {
                p {
                    style: "margin: 8px 0 0 0; font-size: 12px; color: #1E40AF; background: #EFF6FF; padding: 8px; border-radius: 6px;",
                    "{role.focus()}"
                }
            }
        }
    }
}

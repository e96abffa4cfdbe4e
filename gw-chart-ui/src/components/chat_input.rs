//! Message input row: attach, type, send.

use crate::actions::send_chat;
use crate::state::ChatContext;
use dioxus::prelude::*;
use gw_api::ApiClient;

/// File inputs report `C:\fakepath\name.ext`; keep only the name.
pub fn file_name_from_input(value: &str) -> Option<&str> {
    let name = value.rsplit(['\\', '/']).next()?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[component]
pub fn ChatInput() -> Element {
    let mut chat = use_context::<ChatContext>();
    let client = use_context::<ApiClient>();
    let input = chat.input.read().clone();
    let blank = input.trim().is_empty();

    let send_on_enter = {
        let client = client.clone();
        move |evt: KeyboardEvent| {
            if evt.key() == Key::Enter {
                send_chat(chat, client.clone());
            }
        }
    };
    let send_on_click = move |_: MouseEvent| send_chat(chat, client.clone());

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center; padding: 12px 16px; border-top: 1px solid #E5E7EB;",
            label {
                title: "Upload file",
                style: "cursor: pointer; font-size: 20px;",
                "📎"
                input {
                    r#type: "file",
                    accept: ".csv,.xlsx,.pdf,.txt",
                    style: "display: none;",
                    onchange: move |evt: Event<FormData>| {
                        if let Some(name) = file_name_from_input(&evt.value()) {
                            chat.attach(name);
                        }
                    },
                }
            }
            input {
                r#type: "text",
                value: "{input}",
                placeholder: "Ask me about groundwater data, assessments, or any INGRES related queries...",
                style: "flex: 1; padding: 10px 14px; border: 1px solid #D1D5DB; border-radius: 20px;",
                oninput: move |evt: Event<FormData>| chat.edit_input(evt.value()),
                onkeydown: send_on_enter,
            }
            button {
                style: "padding: 10px 18px; background: #2563EB; color: white; border: none; border-radius: 20px; cursor: pointer;",
                disabled: blank,
                onclick: send_on_click,
                "Send"
            }
        }
    }
}

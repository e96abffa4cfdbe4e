//! Message list with a typing indicator.

use crate::state::ChatContext;
use dioxus::prelude::*;
use gw_model::transcript::{Author, EntryKind};

#[component]
pub fn TranscriptView() -> Element {
    let chat = use_context::<ChatContext>();
    let transcript = chat.transcript.read().clone();
    let typing = (chat.typing)();

    rsx! {
        div {
            id: "messages",
            style: "flex: 1; overflow-y: auto; padding: 16px; display: flex; flex-direction: column; gap: 12px;",
            for (index, entry) in transcript.entries().iter().enumerate() {
                {
                    let is_user = entry.author == Author::User;
                    let row_style = if is_user {
                        "display: flex; flex-direction: row-reverse; gap: 8px;"
                    } else {
                        "display: flex; gap: 8px;"
                    };
                    let bubble_style = match (entry.author, entry.kind) {
                        (_, EntryKind::Error) => "background: #FEF2F2; color: #B91C1C; padding: 10px 14px; border-radius: 12px; max-width: 70%;",
                        (Author::User, _) => "background: #2563EB; color: white; padding: 10px 14px; border-radius: 12px; max-width: 70%;",
                        (Author::Bot, _) => "background: #F3F4F6; color: #111827; padding: 10px 14px; border-radius: 12px; max-width: 70%;",
                    };
                    let avatar = if is_user { "🧑" } else { "🤖" };
                    let prefix = if entry.kind == EntryKind::Attachment { "📎 " } else { "" };
                    rsx! {
                        div {
                            key: "{index}",
                            style: "{row_style}",
                            div { style: "font-size: 22px;", "{avatar}" }
                            div {
                                div {
                                    style: "{bubble_style}",
                                    p { style: "margin: 0; white-space: pre-wrap;", "{prefix}{entry.content}" }
                                }
                                div {
                                    style: "font-size: 11px; color: #9CA3AF; margin-top: 2px;",
                                    "{entry.time_label()}"
                                }
                            }
                        }
                    }
                }
            }
            if typing {
                div {
                    style: "display: flex; gap: 8px; color: #6B7280;",
                    div { style: "font-size: 22px;", "🤖" }
                    div {
                        style: "background: #F3F4F6; padding: 10px 14px; border-radius: 12px; font-style: italic;",
                        "AI is thinking..."
                    }
                }
            }
        }
    }
}

//! Backend round trips started from UI events.
//!
//! Each action takes the context it reads from and writes to, and spawns the
//! matching `gw_api` flow on the current Dioxus scope with that context as its
//! store. A spawned request is never cancelled once sent.

use crate::state::{ChatContext, VisualizationContext};
use dioxus::prelude::*;
use gw_api::chat::send_message;
use gw_api::visualize::{load_options, regenerate};
use gw_api::ApiClient;

/// Send the chat input box's content. Blank input does nothing.
pub fn send_chat(mut chat: ChatContext, client: ApiClient) {
    let input = chat.input.read().clone();
    if input.trim().is_empty() {
        return;
    }
    let role = (chat.role)();
    chat.input.set(String::new());
    chat.typing.set(true);
    chat.show_quick_queries.set(false);
    chat.has_user_typed.set(true);

    spawn(async move {
        send_message(&client, chat, &input, role).await;
        chat.typing.set(false);
    });
}

/// Request a chart for the current selection.
///
/// Whichever response arrives last is the one left on screen.
pub fn generate_visualization(viz: VisualizationContext, client: ApiClient) {
    let request = viz.selection.read().to_request();
    spawn(async move {
        regenerate(&client, &request, viz).await;
    });
}

/// Populate the filter catalog from the backend.
pub fn fetch_options(mut viz: VisualizationContext, client: ApiClient) {
    spawn(async move {
        let options = load_options(&client).await;
        viz.options.set(options);
    });
}

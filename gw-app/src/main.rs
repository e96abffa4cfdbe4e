//! Groundwater assistant front end.
//!
//! Three views share nothing but the API client provided at the root:
//! - `home`: landing page
//! - `chat`: free-text questions answered by the backend
//! - `visualization`: parameterized charts from `/visualize`
//!
//! Switching views unmounts the previous one, which drops its context and
//! with it all of that view's state.

mod chat;
mod home;
mod visualization;

use dioxus::prelude::*;
use gw_api::{ApiClient, ApiConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Chat,
    Visualization,
}

fn main() {
    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        web_sys::console::error_1(&format!("failed to init logger: {e}").into());
    }
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("groundwater-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::new(ApiConfig::from_env()));
    let view = use_context_provider(|| Signal::new(View::Home));

    rsx! {
        div {
            style: "min-height: 100vh; background: #F8FAFC; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            {match view() {
                View::Home => rsx! { home::HomeView {} },
                View::Chat => rsx! { chat::ChatView {} },
                View::Visualization => rsx! { visualization::VisualizationView {} },
            }}
        }
    }
}

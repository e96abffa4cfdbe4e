//! View state managed via Dioxus context.
//!
//! Each view bundles its reactive signals into one `Copy` struct provided via
//! `use_context_provider` at the view root. Child components retrieve it with
//! `use_context::<...>()`. Because the context lives in the view's scope,
//! navigating away drops it along with everything it held.

use dioxus::prelude::*;
use gw_api::visualize::VisualizationState;
use gw_api::Store;
use gw_model::catalog::Catalog;
use gw_model::response::VisualizationOptions;
use gw_model::role::UserRole;
use gw_model::selection::Selection;
use gw_model::transcript::Transcript;

/// Signals behind the visualization view.
#[derive(Clone, Copy)]
pub struct VisualizationContext {
    /// Chart configuration edited by the sidebar controls
    pub selection: Signal<Selection>,
    /// Last chart payload, error and in-flight count
    pub chart: Signal<VisualizationState>,
    /// Backend filter options (None until loaded, or if the backend is down)
    pub options: Signal<Option<VisualizationOptions>>,
    /// Whether the filter sidebar is open
    pub show_filters: Signal<bool>,
}

impl VisualizationContext {
    pub fn new() -> Self {
        Self {
            selection: Signal::new(Selection::default()),
            chart: Signal::new(VisualizationState::default()),
            options: Signal::new(None),
            show_filters: Signal::new(true),
        }
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::from_options(self.options.read().as_ref())
    }

    pub fn backend_connected(&self) -> bool {
        self.options.read().is_some()
    }
}

impl Store<VisualizationState> for VisualizationContext {
    fn update<R>(&mut self, f: impl FnOnce(&mut VisualizationState) -> R) -> R {
        f(&mut *self.chart.write())
    }
}

impl Default for VisualizationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Signals behind the chat view.
#[derive(Clone, Copy)]
pub struct ChatContext {
    pub transcript: Signal<Transcript>,
    /// Text currently in the input box
    pub input: Signal<String>,
    pub role: Signal<Option<UserRole>>,
    /// A request is in flight
    pub typing: Signal<bool>,
    pub show_quick_queries: Signal<bool>,
    pub has_user_typed: Signal<bool>,
    pub sidebar_open: Signal<bool>,
}

impl ChatContext {
    pub fn new() -> Self {
        Self {
            transcript: Signal::new(Transcript::default()),
            input: Signal::new(String::new()),
            role: Signal::new(None),
            typing: Signal::new(false),
            show_quick_queries: Signal::new(true),
            has_user_typed: Signal::new(false),
            sidebar_open: Signal::new(true),
        }
    }

    /// Input changed; the quick queries go away once the user types.
    pub fn edit_input(&mut self, value: String) {
        if !value.trim().is_empty() && !(self.has_user_typed)() {
            self.has_user_typed.set(true);
            self.show_quick_queries.set(false);
        }
        self.input.set(value);
    }

    pub fn pick_quick_query(&mut self, query: &str) {
        self.input.set(query.to_string());
        self.show_quick_queries.set(false);
        self.has_user_typed.set(true);
    }

    pub fn select_role(&mut self, role: UserRole) {
        self.role.set(Some(role));
        self.transcript.write().announce_role(role);
    }

    pub fn attach(&mut self, file_name: &str) {
        self.transcript.write().push_attachment(file_name);
        self.show_quick_queries.set(false);
        self.has_user_typed.set(true);
    }

    /// Clear the transcript and start over, role included.
    pub fn clear(&mut self) {
        self.transcript.write().reset();
        self.show_quick_queries.set(true);
        self.has_user_typed.set(false);
        self.role.set(None);
    }
}

impl Store<Transcript> for ChatContext {
    fn update<R>(&mut self, f: impl FnOnce(&mut Transcript) -> R) -> R {
        f(&mut *self.transcript.write())
    }
}

impl Default for ChatContext {
    fn default() -> Self {
        Self::new()
    }
}

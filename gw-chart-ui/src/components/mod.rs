//! Reusable Dioxus RSX components for the chat and visualization views.

mod analysis_summary;
mod axis_filters;
mod backend_status;
mod chart_container;
mod chart_header;
mod chart_type_picker;
mod chat_input;
mod checkbox_list;
mod comparison_selector;
mod error_display;
mod loading_spinner;
mod metric_selector;
mod quick_queries;
mod role_picker;
mod transcript_view;

pub use analysis_summary::AnalysisSummary;
pub use axis_filters::AxisFilters;
pub use backend_status::BackendStatus;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chart_type_picker::ChartTypePicker;
pub use chat_input::{file_name_from_input, ChatInput};
pub use checkbox_list::CheckboxList;
pub use comparison_selector::ComparisonSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
pub use quick_queries::QuickQueries;
pub use role_picker::RolePicker;
pub use transcript_view::TranscriptView;

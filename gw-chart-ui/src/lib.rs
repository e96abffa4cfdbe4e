//! Shared Dioxus components and Chart.js bridge for the groundwater front end.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers around Chart.js via `js_sys::eval()`, plus PNG export
//! - `state`: per-view contexts bundling Dioxus Signals
//! - `actions`: spawned backend round trips that write results back into those signals
//! - `components`: reusable RSX components for both views

pub mod actions;
pub mod components;
pub mod js_bridge;
pub mod state;

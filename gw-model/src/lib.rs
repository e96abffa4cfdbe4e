//! Core types for the groundwater chat and visualization front end.
//!
//! Nothing in here touches the network or the DOM, so the whole crate
//! compiles and tests natively as well as for `wasm32-unknown-unknown`.
//!
//! - `chart` / `metric`: the enums a visualization request is built from,
//!   plus the chart/comparison compatibility table
//! - `resolver`: snaps an incompatible chart/comparison pair back into shape
//! - `selection`: the editable state behind the visualization controls
//! - `request` / `response`: backend wire types
//! - `transcript`: the append-only chat log
//! - `role`: chat user roles and canned quick queries
//! - `catalog`: filter choices, from the backend or the embedded fixtures

pub mod catalog;
pub mod chart;
pub mod error;
pub mod metric;
pub mod request;
pub mod resolver;
pub mod response;
pub mod role;
pub mod selection;
pub mod transcript;

pub use error::ModelError;

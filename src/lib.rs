//! streamgraph: layout and interaction engine for wiggle-offset stacked area charts.
//!
//! Records flow through stacking, scale fitting and smoothed outline building
//! into a backend-agnostic frame; pointer moves resolve to the nearest sample
//! and drive a small per-sample bar chart tooltip.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{StreamgraphConfig, StreamgraphEngine};
pub use error::{ChartError, ChartResult};

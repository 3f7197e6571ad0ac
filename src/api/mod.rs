mod chart_layout;
mod data_controller;
mod engine;
mod engine_config;
mod interaction_controller;
mod render_frame_builder;

pub use chart_layout::ChartLayout;
pub use engine::StreamgraphEngine;
pub use engine_config::StreamgraphConfig;

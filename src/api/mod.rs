mod axis_render_frame_builder;
mod bar_series_render_frame_builder;
mod chart_config;
mod dashboard;
mod engine;
mod layout_helpers;
mod line_series_render_frame_builder;
mod pie_render_frame_builder;
mod render_style;

pub use chart_config::{ChartConfig, ChartKind};
pub use dashboard::{Dashboard, DashboardSettings, DashboardView, compose_view};
pub use engine::ChartEngine;
pub use render_style::RenderStyle;

//! Derived analytics over resolved numeric series.

pub mod kpi;
pub mod metrics;
pub mod moving_average;
pub mod trend;

pub use kpi::{KpiSummary, summarize};
pub use metrics::{
    CategoryAmount, CategoryValue, DashboardPayload, DatedAmount, DatedValue, EngagementMetrics,
    Metric, RetentionMetrics, RevenueMetrics, TimeRange, UserMetrics, extract_metric_breakdown,
    extract_metric_series, filter_time_range,
};
pub use moving_average::{
    DEFAULT_MOVING_AVERAGE_WINDOW, moving_average, moving_average_name, moving_average_series,
};
pub use trend::{Trend, TrendDirection, TrendTuning, calculate_trend, calculate_trend_tuned};

use serde::{Deserialize, Serialize};

use crate::analytics::metrics::Metric;
use crate::analytics::trend::{Trend, calculate_trend};
use crate::core::ChartSeries;

/// Headline numbers shown above the chart for the selected metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub metric: Metric,
    pub series_name: String,
    /// Last finite value of the primary series.
    pub current: Option<f64>,
    pub total: f64,
    pub average: Option<f64>,
    pub trend: Trend,
}

#[must_use]
pub fn summarize(metric: Metric, primary: &ChartSeries) -> KpiSummary {
    let values: Vec<f64> = primary
        .finite_points()
        .map(|(_, point)| point.y)
        .collect();
    let total: f64 = values.iter().sum();
    let average = (!values.is_empty()).then(|| total / values.len() as f64);

    KpiSummary {
        metric,
        series_name: primary.name.clone(),
        current: values.last().copied(),
        total,
        average,
        trend: calculate_trend(&values),
    }
}

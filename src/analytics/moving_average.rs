use crate::core::{ChartSeries, DataPoint, SeriesKind};

pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 7;

/// Trailing moving average with the same length as `values`.
///
/// Index `i` averages `values[max(0, i + 1 - window)..=i]`; the first points
/// use however many samples are available. A zero window behaves like 1.
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|index| {
            // No running sum: subtracting a departed spike cancels small values.
            let trailing = &values[(index + 1).saturating_sub(window)..=index];
            trailing.iter().sum::<f64>() / trailing.len() as f64
        })
        .collect()
}

/// Synthetic line series averaging `source` over a trailing window.
///
/// Points keep the source x values; non-finite source points are dropped
/// before averaging.
#[must_use]
pub fn moving_average_series(source: &ChartSeries, window: usize) -> ChartSeries {
    let finite: Vec<&DataPoint> = source.finite_points().map(|(_, point)| point).collect();
    let values: Vec<f64> = finite.iter().map(|point| point.y).collect();
    let points = finite
        .iter()
        .zip(moving_average(&values, window))
        .map(|(point, average)| DataPoint::new(point.x.clone(), average))
        .collect();

    ChartSeries::new(moving_average_name(window), points).with_kind(SeriesKind::Line)
}

#[must_use]
pub fn moving_average_name(window: usize) -> String {
    format!("{}-day average", window.max(1))
}

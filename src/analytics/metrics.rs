use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::primitives::{date_category, decimal_to_f64};
use crate::core::{ChartSeries, DataPoint};
use crate::error::{ChartError, ChartResult};

/// Daily sample supplied by the dashboard data provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

/// Daily revenue amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedAmount {
    pub date: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevenueMetrics {
    pub daily: Vec<DatedAmount>,
    pub by_source: Vec<CategoryAmount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserMetrics {
    pub active: Vec<DatedValue>,
    pub new_signups: Vec<DatedValue>,
    pub by_plan: Vec<CategoryValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngagementMetrics {
    pub sessions: Vec<DatedValue>,
    pub page_views: Vec<DatedValue>,
    pub by_feature: Vec<CategoryValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetentionMetrics {
    /// Daily retention rate in percent.
    pub rate: Vec<DatedValue>,
    pub by_cohort: Vec<CategoryValue>,
}

/// Already-aggregated dashboard snapshot, daily samples in ascending date
/// order with gaps zero-filled by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardPayload {
    pub revenue: RevenueMetrics,
    pub users: UserMetrics,
    pub engagement: EngagementMetrics,
    pub retention: RetentionMetrics,
}

impl DashboardPayload {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse dashboard payload json: {e}"))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Revenue,
    Users,
    Engagement,
    Retention,
}

impl Metric {
    pub const ALL: [Self; 4] = [
        Self::Revenue,
        Self::Users,
        Self::Engagement,
        Self::Retention,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Users => "users",
            Self::Engagement => "engagement",
            Self::Retention => "retention",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = ChartError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.key() == key)
            .ok_or_else(|| ChartError::InvalidConfig(format!("unknown metric key `{key}`")))
    }
}

/// Trailing window of days ending at the latest sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimeRange {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    All,
}

impl TimeRange {
    #[must_use]
    pub fn days(self) -> Option<i64> {
        match self {
            Self::Last7Days => Some(7),
            Self::Last30Days => Some(30),
            Self::Last90Days => Some(90),
            Self::All => None,
        }
    }
}

/// Trailing slice of ascending, dated entries covering `range`.
#[must_use]
pub fn filter_time_range<T>(
    entries: &[T],
    range: TimeRange,
    date_of: impl Fn(&T) -> NaiveDate,
) -> &[T] {
    let (Some(days), Some(latest)) = (range.days(), entries.last().map(&date_of)) else {
        return entries;
    };
    let cutoff = latest - Duration::days(days - 1);
    let start = entries.partition_point(|entry| date_of(entry) < cutoff);
    &entries[start..]
}

fn dated_series(name: &str, entries: &[DatedValue], range: TimeRange) -> ChartSeries {
    let ranged = filter_time_range(entries, range, |entry| entry.date);
    ChartSeries::new(
        name,
        finite_points(
            name,
            ranged.iter().map(|e| (date_category(e.date), e.value)),
        ),
    )
}

fn category_series(name: &str, entries: &[CategoryValue]) -> ChartSeries {
    ChartSeries::new(
        name,
        finite_points(name, entries.iter().map(|e| (e.category.clone(), e.value))),
    )
}

/// Builds points, dropping non-finite values so they never reach geometry.
fn finite_points(series: &str, pairs: impl Iterator<Item = (String, f64)>) -> Vec<DataPoint> {
    let mut skipped = 0usize;
    let points = pairs
        .filter_map(|(x, y)| {
            if y.is_finite() {
                Some(DataPoint::new(x, y))
            } else {
                skipped += 1;
                None
            }
        })
        .collect();
    if skipped > 0 {
        warn!(series, skipped, "dropping non-finite payload values");
    }
    points
}

/// Time series for `metric` over `range`, primary series first.
pub fn extract_metric_series(
    payload: &DashboardPayload,
    metric: Metric,
    range: TimeRange,
) -> ChartResult<Vec<ChartSeries>> {
    let series = match metric {
        Metric::Revenue => {
            let ranged = filter_time_range(&payload.revenue.daily, range, |entry| entry.date);
            let pairs = ranged
                .iter()
                .map(|entry| {
                    Ok((
                        date_category(entry.date),
                        decimal_to_f64(entry.amount, "revenue amount")?,
                    ))
                })
                .collect::<ChartResult<Vec<_>>>()?;
            vec![ChartSeries::new(
                "Revenue",
                finite_points("Revenue", pairs.into_iter()),
            )]
        }
        Metric::Users => vec![
            dated_series("Active users", &payload.users.active, range),
            dated_series("New signups", &payload.users.new_signups, range),
        ],
        Metric::Engagement => vec![
            dated_series("Sessions", &payload.engagement.sessions, range),
            dated_series("Page views", &payload.engagement.page_views, range),
        ],
        Metric::Retention => vec![dated_series(
            "Retention rate",
            &payload.retention.rate,
            range,
        )],
    };

    debug!(
        metric = %metric,
        ?range,
        series = series.len(),
        points = series.iter().map(|s| s.points.len()).sum::<usize>(),
        "extracted metric series"
    );
    Ok(series)
}

/// Categorical `{x: category, y: amount}` breakdown for `metric`, suited to
/// the pie renderer.
pub fn extract_metric_breakdown(
    payload: &DashboardPayload,
    metric: Metric,
) -> ChartResult<ChartSeries> {
    let series = match metric {
        Metric::Revenue => {
            let pairs = payload
                .revenue
                .by_source
                .iter()
                .map(|entry| {
                    Ok((
                        entry.category.clone(),
                        decimal_to_f64(entry.amount, "revenue amount")?,
                    ))
                })
                .collect::<ChartResult<Vec<_>>>()?;
            ChartSeries::new(
                "Revenue by source",
                finite_points("Revenue by source", pairs.into_iter()),
            )
        }
        Metric::Users => category_series("Users by plan", &payload.users.by_plan),
        Metric::Engagement => {
            category_series("Engagement by feature", &payload.engagement.by_feature)
        }
        Metric::Retention => {
            category_series("Retention by cohort", &payload.retention.by_cohort)
        }
    };

    debug!(
        metric = %metric,
        categories = series.points.len(),
        "extracted metric breakdown"
    );
    Ok(series)
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::{
    DEFAULT_MOVING_AVERAGE_WINDOW, DashboardPayload, KpiSummary, Metric, TimeRange,
    extract_metric_breakdown, extract_metric_series, moving_average_series, summarize,
};
use crate::core::ChartSeries;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, ChartKind};

/// UI-selected dashboard options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardSettings {
    pub metric: Metric,
    pub chart_kind: ChartKind,
    pub time_range: TimeRange,
    pub show_moving_average: bool,
    pub moving_average_window: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            chart_kind: ChartKind::default(),
            time_range: TimeRange::default(),
            show_moving_average: false,
            moving_average_window: DEFAULT_MOVING_AVERAGE_WINDOW,
        }
    }
}

impl DashboardSettings {
    pub fn validate(self) -> ChartResult<()> {
        if self.moving_average_window == 0 {
            return Err(ChartError::InvalidConfig(
                "moving average window must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let settings: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse dashboard settings json: {e}"))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize dashboard settings: {e}"))
        })
    }
}

/// Everything a chart needs for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub kind: ChartKind,
    pub series: Vec<ChartSeries>,
    /// Headline numbers from the primary time series.
    pub kpi: Option<KpiSummary>,
}

/// Composes the series list for one payload and the current selection.
///
/// Pure: identical inputs always produce an identical view.
pub fn compose_view(
    payload: &DashboardPayload,
    settings: DashboardSettings,
) -> ChartResult<DashboardView> {
    settings.validate()?;
    let time_series = extract_metric_series(payload, settings.metric, settings.time_range)?;
    let kpi = time_series
        .first()
        .map(|primary| summarize(settings.metric, primary));

    let series = match settings.chart_kind {
        ChartKind::Pie => vec![extract_metric_breakdown(payload, settings.metric)?],
        ChartKind::Line | ChartKind::Area | ChartKind::Bar => {
            let moving_average = settings
                .show_moving_average
                .then(|| time_series.first())
                .flatten()
                .filter(|primary| !primary.points.is_empty())
                .map(|primary| moving_average_series(primary, settings.moving_average_window));
            time_series.into_iter().chain(moving_average).collect()
        }
    };

    debug!(
        metric = %settings.metric,
        kind = ?settings.chart_kind,
        range = ?settings.time_range,
        moving_average = settings.show_moving_average,
        series = series.len(),
        "dashboard view composed"
    );
    Ok(DashboardView {
        kind: settings.chart_kind,
        series,
        kpi,
    })
}

/// Holds the payload and selection; every setter recomputes the view.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    payload: DashboardPayload,
    settings: DashboardSettings,
    view: DashboardView,
}

impl Dashboard {
    pub fn new(payload: DashboardPayload, settings: DashboardSettings) -> ChartResult<Self> {
        let view = compose_view(&payload, settings)?;
        Ok(Self {
            payload,
            settings,
            view,
        })
    }

    pub fn from_json_str(payload_json: &str, settings: DashboardSettings) -> ChartResult<Self> {
        Self::new(DashboardPayload::from_json_str(payload_json)?, settings)
    }

    #[must_use]
    pub fn payload(&self) -> &DashboardPayload {
        &self.payload
    }

    #[must_use]
    pub fn settings(&self) -> DashboardSettings {
        self.settings
    }

    #[must_use]
    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn set_payload(&mut self, payload: DashboardPayload) -> ChartResult<()> {
        self.view = compose_view(&payload, self.settings)?;
        self.payload = payload;
        Ok(())
    }

    /// Replaces the whole selection; on error the previous view is kept.
    pub fn set_settings(&mut self, settings: DashboardSettings) -> ChartResult<()> {
        self.view = compose_view(&self.payload, settings)?;
        self.settings = settings;
        Ok(())
    }

    pub fn set_metric(&mut self, metric: Metric) -> ChartResult<()> {
        self.set_settings(DashboardSettings {
            metric,
            ..self.settings
        })
    }

    pub fn set_chart_kind(&mut self, chart_kind: ChartKind) -> ChartResult<()> {
        self.set_settings(DashboardSettings {
            chart_kind,
            ..self.settings
        })
    }

    pub fn set_time_range(&mut self, time_range: TimeRange) -> ChartResult<()> {
        self.set_settings(DashboardSettings {
            time_range,
            ..self.settings
        })
    }

    pub fn set_show_moving_average(&mut self, show_moving_average: bool) -> ChartResult<()> {
        self.set_settings(DashboardSettings {
            show_moving_average,
            ..self.settings
        })
    }

    /// Hands the current view to `engine`, selecting its renderer.
    pub fn apply_to<R: Renderer>(&self, engine: &mut ChartEngine<R>) {
        engine.set_kind(self.view.kind);
        engine.set_series(self.view.series.clone());
    }
}

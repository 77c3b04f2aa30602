use serde::{Deserialize, Serialize};

use crate::core::scale::{CategoryKey, LinearScale, OrdinalScale, ValueDomain, XScale};
use crate::core::{ChartSeries, Viewport, XValue};
use crate::error::{ChartError, ChartResult};

/// Maximum number of x-axis labels drawn before thinning kicks in.
pub const X_LABEL_TARGET: usize = 8;

/// Smallest interior dimension kept when padding swallows the viewport.
const MIN_AREA_EXTENT_PX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 40.0,
            left: 50.0,
        }
    }
}

/// Interior plotting rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartArea {
    pub fn from_viewport(viewport: Viewport, padding: Padding) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width) - padding.left - padding.right;
        let height = f64::from(viewport.height) - padding.top - padding.bottom;
        Ok(Self {
            x: padding.left,
            y: padding.top,
            width: width.max(MIN_AREA_EXTENT_PX),
            height: height.max(MIN_AREA_EXTENT_PX),
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// How the x axis of a layout is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XAxisMode {
    /// Linear when every x value is numeric, ordinal otherwise.
    #[default]
    Auto,
    /// Always ordinal over distinct x values (bar charts).
    Categorical,
}

/// Axis label placed along the bottom edge of the chart area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
}

/// Shared scales for one chart: the interior area plus x/y mappings.
///
/// Every series in a chart is projected through the same layout so values
/// remain visually comparable across series.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleLayout {
    pub area: ChartArea,
    pub x: XScale,
    pub y: LinearScale,
}

impl ScaleLayout {
    #[must_use]
    pub fn build(series: &[ChartSeries], area: ChartArea, mode: XAxisMode) -> Self {
        let y_domain = ValueDomain::including_zero(
            series
                .iter()
                .flat_map(|s| s.finite_points().map(|(_, point)| point.y)),
        );
        let y = LinearScale::from_domain(y_domain, area.bottom(), area.y);

        let all_numeric = series
            .iter()
            .flat_map(|s| s.finite_points())
            .all(|(_, point)| point.x.is_numeric());

        let x = if mode == XAxisMode::Auto && all_numeric {
            let x_domain = ValueDomain::from_values(
                series
                    .iter()
                    .flat_map(|s| s.finite_points().filter_map(|(_, point)| point.x.as_number())),
            )
            .unwrap_or(ValueDomain { min: 0.0, max: 0.0 });
            XScale::Linear(LinearScale::from_domain(x_domain, area.x, area.right()))
        } else {
            XScale::Ordinal(OrdinalScale::from_series(series, area.x, area.right()))
        };

        Self { area, x, y }
    }

    #[must_use]
    pub fn x_to_pixel(&self, value: &XValue) -> Option<f64> {
        self.x.domain_to_pixel(value)
    }

    #[must_use]
    pub fn y_to_pixel(&self, value: f64) -> f64 {
        self.y.domain_to_pixel(value)
    }

    /// Pixel row of value zero.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.y.domain_to_pixel(0.0)
    }

    #[must_use]
    pub fn y_domain(&self) -> ValueDomain {
        let (min, max) = self.y.domain();
        ValueDomain { min, max }
    }

    /// X-axis labels after thinning: one per category for ordinal scales,
    /// the distinct numeric values for linear ones.
    #[must_use]
    pub fn x_labels(&self, series: &[ChartSeries]) -> Vec<AxisLabel> {
        let distinct: Vec<(String, f64)> = match &self.x {
            XScale::Ordinal(scale) => scale
                .categories()
                .enumerate()
                .map(|(index, key)| (key.to_string(), scale.position(index)))
                .collect(),
            XScale::Linear(_) => {
                let ordinal = OrdinalScale::from_series(series, self.area.x, self.area.right());
                ordinal
                    .categories()
                    .filter_map(|key| match key {
                        CategoryKey::Number(number) => self
                            .x_to_pixel(&XValue::Number(number.0))
                            .map(|px| (key.to_string(), px)),
                        CategoryKey::Label(_) => None,
                    })
                    .collect()
            }
        };

        thinned_label_indices(distinct.len())
            .map(|index| {
                let (text, x) = distinct[index].clone();
                AxisLabel { text, x }
            })
            .collect()
    }
}

/// Sampling stride for `distinct_count` labels: every label up to the target,
/// then every `ceil(distinct_count / X_LABEL_TARGET)`-th.
#[must_use]
pub fn label_stride(distinct_count: usize) -> usize {
    if distinct_count > X_LABEL_TARGET {
        distinct_count.div_ceil(X_LABEL_TARGET)
    } else {
        1
    }
}

pub fn thinned_label_indices(distinct_count: usize) -> impl Iterator<Item = usize> {
    (0..distinct_count).step_by(label_stride(distinct_count))
}

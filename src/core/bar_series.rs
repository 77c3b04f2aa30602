use serde::{Deserialize, Serialize};

use crate::core::{ChartSeries, ScaleLayout, XScale};

/// Gap between neighbouring category groups, in bar widths.
pub const BAR_GROUP_GUTTER_UNITS: f64 = 0.5;

/// Bar sizing derived once per render from category and series counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub category_count: usize,
    pub series_count: usize,
    pub bar_width: f64,
}

impl BarLayout {
    /// `bar_width = area_width / (C * K + (C - 1) * gutter)`.
    ///
    /// Returns `None` when there is nothing to lay out.
    #[must_use]
    pub fn compute(area_width: f64, category_count: usize, series_count: usize) -> Option<Self> {
        if category_count == 0 || series_count == 0 || area_width <= 0.0 {
            return None;
        }

        let units = (category_count * series_count) as f64
            + (category_count - 1) as f64 * BAR_GROUP_GUTTER_UNITS;
        Some(Self {
            category_count,
            series_count,
            bar_width: area_width / units,
        })
    }

    #[must_use]
    pub fn gutter_width(self) -> f64 {
        self.bar_width * BAR_GROUP_GUTTER_UNITS
    }

    #[must_use]
    pub fn group_width(self) -> f64 {
        self.bar_width * self.series_count as f64
    }

    #[must_use]
    pub fn group_left(self, area_left: f64, category_index: usize) -> f64 {
        area_left + category_index as f64 * (self.group_width() + self.gutter_width())
    }

    #[must_use]
    pub fn group_center(self, area_left: f64, category_index: usize) -> f64 {
        self.group_left(area_left, category_index) + self.group_width() * 0.5
    }

    #[must_use]
    pub fn bar_left(self, area_left: f64, category_index: usize, series_index: usize) -> f64 {
        self.group_left(area_left, category_index) + series_index as f64 * self.bar_width
    }

    /// Total horizontal extent of all groups and gutters.
    #[must_use]
    pub fn occupied_width(self) -> f64 {
        self.category_count as f64 * self.group_width()
            + self.category_count.saturating_sub(1) as f64 * self.gutter_width()
    }
}

/// Projected bar rectangle in canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub series_index: usize,
    pub point_index: usize,
    pub category_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
    /// Top-center for non-negative values, bottom-center for negative ones.
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub label: String,
}

/// Grouped bar geometry for all series of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub layout: Option<BarLayout>,
    pub bars: Vec<BarRect>,
}

/// Projects every series into bars grouped by category.
///
/// `layout` must be categorical; categories come from its ordinal x scale and
/// bars within a group follow series order left to right.
#[must_use]
pub fn project_grouped_bars(series: &[ChartSeries], layout: &ScaleLayout) -> BarGeometry {
    let XScale::Ordinal(categories) = &layout.x else {
        return BarGeometry {
            layout: None,
            bars: Vec::new(),
        };
    };

    let Some(bar_layout) = BarLayout::compute(layout.area.width, categories.len(), series.len())
    else {
        return BarGeometry {
            layout: None,
            bars: Vec::new(),
        };
    };

    let baseline_y = layout.baseline_y();
    let mut bars = Vec::new();
    for (series_index, s) in series.iter().enumerate() {
        for (point_index, point) in s.finite_points() {
            let Some(category_index) = categories.index_of(&point.x) else {
                continue;
            };
            let value_y = layout.y_to_pixel(point.y);
            let x = bar_layout.bar_left(layout.area.x, category_index, series_index);
            let anchor_y = if point.y < 0.0 {
                value_y.max(baseline_y)
            } else {
                value_y.min(baseline_y)
            };

            bars.push(BarRect {
                series_index,
                point_index,
                category_index,
                x,
                y: value_y.min(baseline_y),
                width: bar_layout.bar_width,
                height: (baseline_y - value_y).abs(),
                value: point.y,
                anchor_x: x + bar_layout.bar_width * 0.5,
                anchor_y,
                label: point.display_label(),
            });
        }
    }

    BarGeometry {
        layout: Some(bar_layout),
        bars,
    }
}

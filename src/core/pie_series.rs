use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::format::format_percent;
use crate::core::{ChartArea, ChartSeries, DataPoint, PathCommand};

/// Slices start at 12 o'clock and proceed clockwise.
pub const PIE_START_ANGLE: f64 = -FRAC_PI_2;
/// Slices below this share of the total get no in-slice percentage label.
pub const PIE_LABEL_MIN_PROPORTION: f64 = 0.05;
/// Distance a hovered slice is displaced along its bisector.
pub const PIE_POP_OUT_DISTANCE: f64 = 8.0;
/// Percentage labels sit at this fraction of the radius.
pub const PIE_LABEL_RADIUS_RATIO: f64 = 0.65;

const FULL_CIRCLE_EPSILON: f64 = 1e-9;

/// Wedge or full-circle outline; always four commands.
pub type SlicePath = SmallVec<[PathCommand; 4]>;

/// One pie slice with angles in radians on a y-down canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub point_index: usize,
    pub category: String,
    pub value: f64,
    pub proportion: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// In-slice percentage label position, absent for slices under 5 %.
    pub label_anchor: Option<(f64, f64)>,
    pub path: SlicePath,
}

impl PieSlice {
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angle midway between start and end.
    #[must_use]
    pub fn bisector(&self) -> f64 {
        (self.start_angle + self.end_angle) * 0.5
    }

    #[must_use]
    pub fn large_arc(&self) -> bool {
        self.sweep() > PI
    }

    /// Visual displacement of a hovered slice; the slice path is unchanged.
    #[must_use]
    pub fn pop_out_offset(&self, distance: f64) -> (f64, f64) {
        let angle = self.bisector();
        (angle.cos() * distance, angle.sin() * distance)
    }

    #[must_use]
    pub fn percent_text(&self) -> String {
        format_percent(self.proportion)
    }
}

/// Result of pie projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PieState {
    /// Total is zero (or no positive values): render the empty center state.
    NoData,
    Slices { total: f64, slices: Vec<PieSlice> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub state: PieState,
}

impl PieGeometry {
    #[must_use]
    pub fn slices(&self) -> &[PieSlice] {
        match &self.state {
            PieState::NoData => &[],
            PieState::Slices { slices, .. } => slices,
        }
    }

    #[must_use]
    pub fn total(&self) -> Option<f64> {
        match &self.state {
            PieState::NoData => None,
            PieState::Slices { total, .. } => Some(*total),
        }
    }
}

/// Radius that leaves room for the hover pop-out inside `area`.
#[must_use]
pub fn pie_radius(area: ChartArea) -> f64 {
    (area.width.min(area.height) * 0.5 - PIE_POP_OUT_DISTANCE).max(1.0)
}

/// Projects one series into pie slices centered in `area`.
///
/// Only positive finite values contribute; the final slice is closed exactly
/// at `PIE_START_ANGLE + 2π` so slices tile the full circle.
#[must_use]
pub fn project_pie(series: &ChartSeries, area: ChartArea) -> PieGeometry {
    let (center_x, center_y) = area.center();
    let radius = pie_radius(area);

    let contributing: Vec<(usize, &DataPoint)> = series
        .finite_points()
        .filter(|(_, point)| point.y > 0.0)
        .collect();
    let total: f64 = contributing.iter().map(|(_, point)| point.y).sum();
    // A sum past f64::MAX is taken relative to the largest value instead.
    let unit = if total.is_finite() {
        1.0
    } else {
        contributing
            .iter()
            .map(|(_, point)| point.y)
            .fold(0.0, f64::max)
    };
    let unit_total: f64 = contributing.iter().map(|(_, point)| point.y / unit).sum();
    let total = total.min(f64::MAX);

    if contributing.is_empty() || total <= 0.0 {
        return PieGeometry {
            center_x,
            center_y,
            radius,
            state: PieState::NoData,
        };
    }

    let last = contributing.len() - 1;
    let mut cumulative = 0.0;
    let mut slices = Vec::with_capacity(contributing.len());
    for (position, (point_index, point)) in contributing.into_iter().enumerate() {
        let proportion = (point.y / unit) / unit_total;
        let start_angle = PIE_START_ANGLE + cumulative * TAU;
        cumulative += proportion;
        let end_angle = if position == last {
            PIE_START_ANGLE + TAU
        } else {
            PIE_START_ANGLE + cumulative * TAU
        };

        let label_anchor = (proportion >= PIE_LABEL_MIN_PROPORTION).then(|| {
            let mid = (start_angle + end_angle) * 0.5;
            let label_radius = radius * PIE_LABEL_RADIUS_RATIO;
            (
                center_x + mid.cos() * label_radius,
                center_y + mid.sin() * label_radius,
            )
        });

        slices.push(PieSlice {
            point_index,
            category: point.x.to_string(),
            value: point.y,
            proportion,
            start_angle,
            end_angle,
            label_anchor,
            path: slice_path(center_x, center_y, radius, start_angle, end_angle),
        });
    }

    PieGeometry {
        center_x,
        center_y,
        radius,
        state: PieState::Slices { total, slices },
    }
}

/// Wedge path: center, start point, arc to end point, close.
///
/// A full-circle sweep has coincident arc endpoints, so it is emitted as two
/// half arcs without the center spoke.
#[must_use]
pub fn slice_path(
    center_x: f64,
    center_y: f64,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> SlicePath {
    let point_at = |angle: f64| {
        (
            center_x + angle.cos() * radius,
            center_y + angle.sin() * radius,
        )
    };
    let sweep = end_angle - start_angle;
    let (start_x, start_y) = point_at(start_angle);

    if sweep >= TAU - FULL_CIRCLE_EPSILON {
        let (mid_x, mid_y) = point_at(start_angle + PI);
        return smallvec![
            PathCommand::MoveTo {
                x: start_x,
                y: start_y,
            },
            PathCommand::ArcTo {
                radius,
                large_arc: false,
                sweep: true,
                x: mid_x,
                y: mid_y,
            },
            PathCommand::ArcTo {
                radius,
                large_arc: false,
                sweep: true,
                x: start_x,
                y: start_y,
            },
            PathCommand::Close,
        ];
    }

    let (end_x, end_y) = point_at(end_angle);
    smallvec![
        PathCommand::MoveTo {
            x: center_x,
            y: center_y,
        },
        PathCommand::LineTo {
            x: start_x,
            y: start_y,
        },
        PathCommand::ArcTo {
            radius,
            large_arc: sweep > PI,
            sweep: true,
            x: end_x,
            y: end_y,
        },
        PathCommand::Close,
    ]
}

/// Normalizes `angle` into `[PIE_START_ANGLE, PIE_START_ANGLE + 2π)`.
#[must_use]
pub fn normalize_pie_angle(angle: f64) -> f64 {
    PIE_START_ANGLE + (angle - PIE_START_ANGLE).rem_euclid(TAU)
}

use serde::{Deserialize, Serialize};

use crate::core::{ChartSeries, PathCommand, ScaleLayout};

/// Vertex in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

/// Interactive marker for one data point of a line/area series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub point_index: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: String,
}

/// Deterministic geometry for a line or area series.
///
/// `vertices` follow the drawable points in series order. `fill` is present
/// for the area variant only and is an explicitly closed polygon against the
/// zero baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub vertices: Vec<PathVertex>,
    pub markers: Vec<PointMarker>,
    pub fill: Option<Vec<PathCommand>>,
}

impl LineGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            markers: Vec::new(),
            fill: None,
        }
    }

    /// Move-to the first vertex followed by a line-to per subsequent vertex.
    #[must_use]
    pub fn stroke_commands(&self) -> Vec<PathCommand> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| {
                if index == 0 {
                    PathCommand::MoveTo {
                        x: vertex.x,
                        y: vertex.y,
                    }
                } else {
                    PathCommand::LineTo {
                        x: vertex.x,
                        y: vertex.y,
                    }
                }
            })
            .collect()
    }
}

/// Projects a series into line geometry using the chart-wide layout.
///
/// Points that are non-finite, or whose x value has no position on the shared
/// x scale, are skipped; the rest of the series still renders.
#[must_use]
pub fn project_line_series(series: &ChartSeries, layout: &ScaleLayout, area: bool) -> LineGeometry {
    let mut vertices = Vec::with_capacity(series.points.len());
    let mut markers = Vec::with_capacity(series.points.len());

    for (point_index, point) in series.finite_points() {
        let Some(x) = layout.x_to_pixel(&point.x) else {
            continue;
        };
        let y = layout.y_to_pixel(point.y);
        vertices.push(PathVertex { x, y });
        markers.push(PointMarker {
            point_index,
            x,
            y,
            value: point.y,
            label: point.display_label(),
        });
    }

    if vertices.is_empty() {
        return LineGeometry::empty();
    }

    let fill = area.then(|| area_fill_commands(&vertices, layout.baseline_y()));
    LineGeometry {
        vertices,
        markers,
        fill,
    }
}

/// Closes a vertex run down to `baseline_y` and back to the first point.
#[must_use]
pub fn area_fill_commands(vertices: &[PathVertex], baseline_y: f64) -> Vec<PathCommand> {
    let (Some(first), Some(last)) = (vertices.first(), vertices.last()) else {
        return Vec::new();
    };

    let mut commands = Vec::with_capacity(vertices.len() + 3);
    commands.push(PathCommand::MoveTo {
        x: first.x,
        y: first.y,
    });
    commands.extend(
        vertices
            .iter()
            .skip(1)
            .map(|vertex| PathCommand::LineTo {
                x: vertex.x,
                y: vertex.y,
            }),
    );
    commands.push(PathCommand::LineTo {
        x: last.x,
        y: baseline_y,
    });
    commands.push(PathCommand::LineTo {
        x: first.x,
        y: baseline_y,
    });
    commands.push(PathCommand::Close);
    commands
}

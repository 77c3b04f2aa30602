use crate::core::{ScaleLayout, SeriesKind, project_line_series};
use crate::interaction::{HitShape, HitTarget, HoverPayload, PrimitiveKind, PrimitiveRef};
use crate::render::{CirclePrimitive, PathPrimitive, RenderFrame, Renderer};

use super::{ChartEngine, ChartKind};

impl<R: Renderer> ChartEngine<R> {
    /// Stroke path, optional area fill and one interactive marker per point
    /// for every series, all projected through `layout`.
    pub(super) fn append_line_series_primitives(
        &self,
        frame: &mut RenderFrame,
        layout: &ScaleLayout,
    ) {
        let style = self.render_style();
        let palette = &self.config().colors;
        let hovered = self.interaction().hovered_primitive();
        let area_chart = self.kind() == ChartKind::Area;

        for (series_index, series) in self.series().iter().enumerate() {
            let color = palette.resolve(series.color, series_index);
            let filled = area_chart || series.kind == SeriesKind::Area;
            let mut geometry = project_line_series(series, layout, filled);
            if geometry.vertices.is_empty() {
                continue;
            }

            if let Some(fill) = geometry.fill.take() {
                frame
                    .paths
                    .push(PathPrimitive::filled(fill, color.with_alpha(style.area_fill_alpha)));
            }
            frame.paths.push(PathPrimitive::stroked(
                geometry.stroke_commands(),
                color,
                style.series_line_width,
            ));

            for marker in geometry.markers {
                let primitive = PrimitiveRef {
                    kind: PrimitiveKind::Marker,
                    series_index,
                    point_index: marker.point_index,
                };
                let radius = if hovered == Some(primitive) {
                    style.hovered_marker_radius
                } else {
                    style.marker_radius
                };
                frame.circles.push(
                    CirclePrimitive::new(marker.x, marker.y, radius, color)
                        .with_stroke(style.outline_color, 1.5),
                );
                frame.hit_targets.push(HitTarget {
                    primitive,
                    shape: HitShape::Circle {
                        cx: marker.x,
                        cy: marker.y,
                        radius: style.marker_hit_radius,
                    },
                    anchor_x: marker.x,
                    anchor_y: marker.y,
                    payload: HoverPayload {
                        series_name: series.name.clone(),
                        label: marker.label,
                        value: marker.value,
                        color,
                    },
                });
            }
        }
    }
}

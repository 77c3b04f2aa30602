use crate::core::{AxisLabel, ScaleLayout, XScale, project_grouped_bars, thinned_label_indices};
use crate::interaction::{HitShape, HitTarget, HoverPayload, PrimitiveKind, PrimitiveRef};
use crate::render::{RectPrimitive, RenderFrame, Renderer};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Grouped bars plus their hit targets. Returns the thinned category
    /// labels centered under each group.
    pub(super) fn append_bar_series_primitives(
        &self,
        frame: &mut RenderFrame,
        layout: &ScaleLayout,
    ) -> Vec<AxisLabel> {
        let style = self.render_style();
        let palette = &self.config().colors;
        let hovered = self.interaction().hovered_primitive();

        let geometry = project_grouped_bars(self.series(), layout);
        let (Some(bar_layout), XScale::Ordinal(categories)) = (geometry.layout, &layout.x) else {
            return Vec::new();
        };

        for bar in geometry.bars {
            let Some(series) = self.series().get(bar.series_index) else {
                continue;
            };
            let primitive = PrimitiveRef {
                kind: PrimitiveKind::Bar,
                series_index: bar.series_index,
                point_index: bar.point_index,
            };
            let color = palette.resolve(series.color, bar.series_index);
            let fill = if hovered == Some(primitive) {
                color.with_alpha(style.hovered_bar_alpha)
            } else {
                color
            };

            frame.rects.push(
                RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, fill)
                    .with_corner_radius(style.bar_corner_radius.min(bar.width * 0.5)),
            );
            frame.hit_targets.push(HitTarget {
                primitive,
                shape: HitShape::Rect {
                    x: bar.x,
                    y: bar.y,
                    width: bar.width,
                    height: bar.height,
                },
                anchor_x: bar.anchor_x,
                anchor_y: bar.anchor_y,
                payload: HoverPayload {
                    series_name: series.name.clone(),
                    label: bar.label,
                    value: bar.value,
                    color,
                },
            });
        }

        let keys: Vec<_> = categories.categories().collect();
        thinned_label_indices(keys.len())
            .map(|index| AxisLabel {
                text: keys[index].to_string(),
                x: bar_layout.group_center(layout.area.x, index),
            })
            .collect()
    }
}

use tracing::debug;

use crate::core::{ChartArea, PIE_POP_OUT_DISTANCE, PieState, format_compact, project_pie};
use crate::interaction::{HitShape, HitTarget, HoverPayload, PrimitiveKind, PrimitiveRef};
use crate::render::{PathPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::ChartEngine;
use super::layout_helpers::text_baseline_for_center;

const NO_DATA_TEXT: &str = "No data";

impl<R: Renderer> ChartEngine<R> {
    /// Slices of the first series, in-slice percentages and the center total.
    ///
    /// The hovered slice is translated along its bisector; its path and hit
    /// region stay where the geometry put them.
    pub(super) fn append_pie_primitives(&self, frame: &mut RenderFrame, area: ChartArea) {
        let style = self.render_style();
        let palette = &self.config().colors;
        let hovered = self.interaction().hovered_primitive();

        if self.series().len() > 1 {
            debug!(
                ignored = self.series().len() - 1,
                "pie chart draws the first series only"
            );
        }
        let Some(series) = self.series().first() else {
            self.append_pie_center_text(frame, area, NO_DATA_TEXT.to_owned());
            return;
        };

        let geometry = project_pie(series, area);
        let (total, slices) = match geometry.state {
            PieState::NoData => {
                self.append_pie_center_text(frame, area, NO_DATA_TEXT.to_owned());
                return;
            }
            PieState::Slices { total, slices } => (total, slices),
        };

        for slice in slices {
            let primitive = PrimitiveRef {
                kind: PrimitiveKind::Slice,
                series_index: 0,
                point_index: slice.point_index,
            };
            let color = palette.color_for(slice.point_index);
            let (offset_x, offset_y) = if hovered == Some(primitive) {
                slice.pop_out_offset(PIE_POP_OUT_DISTANCE)
            } else {
                (0.0, 0.0)
            };

            frame.paths.push(
                PathPrimitive::filled(slice.path.to_vec(), color)
                    .with_stroke(style.outline_color, 1.5)
                    .with_offset(offset_x, offset_y),
            );
            if let Some((label_x, label_y)) = slice.label_anchor {
                frame.texts.push(TextPrimitive::new(
                    slice.percent_text(),
                    label_x + offset_x,
                    text_baseline_for_center(label_y + offset_y, style.slice_label_font_size_px),
                    style.slice_label_font_size_px,
                    style.slice_label_color,
                    TextHAlign::Center,
                ));
            }

            let bisector = slice.bisector();
            frame.hit_targets.push(HitTarget {
                primitive,
                shape: HitShape::Sector {
                    cx: geometry.center_x,
                    cy: geometry.center_y,
                    radius: geometry.radius,
                    start_angle: slice.start_angle,
                    end_angle: slice.end_angle,
                },
                anchor_x: geometry.center_x + bisector.cos() * geometry.radius,
                anchor_y: geometry.center_y + bisector.sin() * geometry.radius,
                payload: HoverPayload {
                    series_name: series.name.clone(),
                    label: slice.category,
                    value: slice.value,
                    color,
                },
            });
        }

        self.append_pie_center_text(frame, area, format_compact(total));
    }

    fn append_pie_center_text(&self, frame: &mut RenderFrame, area: ChartArea, text: String) {
        let style = self.render_style();
        let (center_x, center_y) = area.center();
        frame.texts.push(TextPrimitive::new(
            text,
            center_x,
            text_baseline_for_center(center_y, style.center_label_font_size_px),
            style.center_label_font_size_px,
            style.center_label_color,
            TextHAlign::Center,
        ));
    }
}

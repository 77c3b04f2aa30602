use crate::core::{AxisLabel, ScaleLayout, format_compact};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::layout_helpers::{estimate_label_text_width_px, text_baseline_for_center};
use super::{ChartEngine, ChartKind};

const Y_LABEL_GAP_PX: f64 = 6.0;
const X_LABEL_GAP_PX: f64 = 6.0;
const TITLE_TOP_PX: f64 = 4.0;
const LEGEND_ITEM_GAP_PX: f64 = 16.0;
const LEGEND_SWATCH_GAP_PX: f64 = 6.0;
const LEGEND_BOTTOM_INSET_PX: f64 = 4.0;

impl<R: Renderer> ChartEngine<R> {
    /// Grid, axis lines, y tick labels, x labels and axis titles.
    pub(super) fn append_axis_primitives(
        &self,
        frame: &mut RenderFrame,
        layout: &ScaleLayout,
        x_labels: &[AxisLabel],
    ) {
        let style = self.render_style();
        let area = layout.area;

        for tick in layout.y.ticks(style.y_tick_count) {
            let y = layout.y_to_pixel(tick);
            if self.config().show_grid {
                frame.lines.push(LinePrimitive::new(
                    area.x,
                    y,
                    area.right(),
                    y,
                    style.grid_line_width,
                    style.grid_line_color,
                ));
            }
            frame.texts.push(TextPrimitive::new(
                format_compact(tick),
                area.x - Y_LABEL_GAP_PX,
                text_baseline_for_center(y, style.axis_label_font_size_px),
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
            ));
        }

        frame.lines.push(LinePrimitive::new(
            area.x,
            area.bottom(),
            area.right(),
            area.bottom(),
            style.axis_line_width,
            style.axis_line_color,
        ));
        frame.lines.push(LinePrimitive::new(
            area.x,
            area.y,
            area.x,
            area.bottom(),
            style.axis_line_width,
            style.axis_line_color,
        ));

        let x_label_y = area.bottom() + X_LABEL_GAP_PX + style.axis_label_font_size_px;
        for label in x_labels.iter().filter(|label| !label.text.is_empty()) {
            frame.texts.push(TextPrimitive::new(
                label.text.clone(),
                label.x,
                x_label_y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ));
        }

        if let Some(title) = non_empty(self.config().x_axis_label.as_deref()) {
            frame.texts.push(TextPrimitive::new(
                title,
                area.x + area.width * 0.5,
                x_label_y + style.axis_label_font_size_px + X_LABEL_GAP_PX,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ));
        }
        if let Some(title) = non_empty(self.config().y_axis_label.as_deref()) {
            frame.texts.push(TextPrimitive::new(
                title,
                area.x,
                (area.y - Y_LABEL_GAP_PX).max(style.axis_label_font_size_px),
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Left,
            ));
        }
    }

    pub(super) fn append_title_primitives(&self, frame: &mut RenderFrame) {
        let style = self.render_style();
        let center_x = f64::from(frame.viewport.width) * 0.5;
        let mut baseline = TITLE_TOP_PX;

        if let Some(title) = non_empty(self.config().title.as_deref()) {
            baseline += style.title_font_size_px;
            frame.texts.push(TextPrimitive::new(
                title,
                center_x,
                baseline,
                style.title_font_size_px,
                style.title_color,
                TextHAlign::Center,
            ));
        }
        if let Some(subtitle) = non_empty(self.config().subtitle.as_deref()) {
            baseline += style.subtitle_font_size_px + 2.0;
            frame.texts.push(TextPrimitive::new(
                subtitle,
                center_x,
                baseline,
                style.subtitle_font_size_px,
                style.subtitle_color,
                TextHAlign::Center,
            ));
        }
    }

    /// One swatch plus name per series (per slice for pie charts), laid out
    /// left to right along the bottom edge.
    pub(super) fn append_legend_primitives(&self, frame: &mut RenderFrame) {
        let style = self.render_style();
        let entries = self.legend_entries();
        if entries.is_empty() {
            return;
        }

        let swatch = style.legend_swatch_size_px;
        let center_y = f64::from(frame.viewport.height)
            - LEGEND_BOTTOM_INSET_PX
            - style.legend_font_size_px * 0.5;
        let mut x = self.config().padding.left;
        for (name, color) in entries {
            frame.rects.push(
                RectPrimitive::new(x, center_y - swatch * 0.5, swatch, swatch, color)
                    .with_corner_radius(2.0),
            );
            x += swatch + LEGEND_SWATCH_GAP_PX;
            let text_width = estimate_label_text_width_px(&name, style.legend_font_size_px);
            frame.texts.push(TextPrimitive::new(
                name,
                x,
                text_baseline_for_center(center_y, style.legend_font_size_px),
                style.legend_font_size_px,
                style.legend_text_color,
                TextHAlign::Left,
            ));
            x += text_width + LEGEND_ITEM_GAP_PX;
        }
    }

    fn legend_entries(&self) -> Vec<(String, Color)> {
        let palette = &self.config().colors;
        match self.kind() {
            ChartKind::Pie => self
                .series()
                .first()
                .map(|series| {
                    series
                        .finite_points()
                        .filter(|(_, point)| point.y > 0.0)
                        .map(|(index, point)| (point.x.to_string(), palette.color_for(index)))
                        .filter(|(name, _)| !name.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            ChartKind::Line | ChartKind::Area | ChartKind::Bar => self
                .series()
                .iter()
                .enumerate()
                .filter(|(_, series)| !series.name.is_empty())
                .map(|(index, series)| (series.name.clone(), palette.resolve(series.color, index)))
                .collect(),
        }
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.trim().is_empty())
}

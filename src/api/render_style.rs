use crate::render::Color;

/// Style values shared by every chart kind.
///
/// Series colors come from the config palette; this only covers chrome and
/// primitive sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub grid_line_color: Color,
    pub axis_line_color: Color,
    pub axis_label_color: Color,
    pub title_color: Color,
    pub subtitle_color: Color,
    pub legend_text_color: Color,
    pub center_label_color: Color,
    pub slice_label_color: Color,
    /// Outline drawn around markers and pie slices.
    pub outline_color: Color,
    pub grid_line_width: f64,
    pub axis_line_width: f64,
    pub series_line_width: f64,
    /// Area fill opacity applied to the series color.
    pub area_fill_alpha: f64,
    pub marker_radius: f64,
    pub hovered_marker_radius: f64,
    pub marker_hit_radius: f64,
    pub bar_corner_radius: f64,
    pub hovered_bar_alpha: f64,
    pub axis_label_font_size_px: f64,
    pub title_font_size_px: f64,
    pub subtitle_font_size_px: f64,
    pub legend_font_size_px: f64,
    pub slice_label_font_size_px: f64,
    pub center_label_font_size_px: f64,
    pub legend_swatch_size_px: f64,
    pub y_tick_count: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_line_color: Color::rgb8(0xe5, 0xe7, 0xeb),
            axis_line_color: Color::rgb8(0x9c, 0xa3, 0xaf),
            axis_label_color: Color::rgb8(0x6b, 0x72, 0x80),
            title_color: Color::rgb8(0x11, 0x18, 0x27),
            subtitle_color: Color::rgb8(0x6b, 0x72, 0x80),
            legend_text_color: Color::rgb8(0x37, 0x41, 0x51),
            center_label_color: Color::rgb8(0x11, 0x18, 0x27),
            slice_label_color: Color::rgb8(0xff, 0xff, 0xff),
            outline_color: Color::rgb8(0xff, 0xff, 0xff),
            grid_line_width: 1.0,
            axis_line_width: 1.0,
            series_line_width: 2.0,
            area_fill_alpha: 0.2,
            marker_radius: 3.5,
            hovered_marker_radius: 6.0,
            marker_hit_radius: 8.0,
            bar_corner_radius: 2.0,
            hovered_bar_alpha: 0.8,
            axis_label_font_size_px: 11.0,
            title_font_size_px: 16.0,
            subtitle_font_size_px: 12.0,
            legend_font_size_px: 12.0,
            slice_label_font_size_px: 11.0,
            center_label_font_size_px: 18.0,
            legend_swatch_size_px: 10.0,
            y_tick_count: 5,
        }
    }
}

pub mod bar_series;
pub mod format;
pub mod layout;
pub mod line_series;
pub mod path;
pub mod pie_series;
pub mod primitives;
pub mod scale;
pub mod types;

pub use bar_series::{BAR_GROUP_GUTTER_UNITS, BarGeometry, BarLayout, BarRect, project_grouped_bars};
pub use format::{format_compact, format_percent, format_plain};
pub use layout::{
    AxisLabel, ChartArea, Padding, ScaleLayout, X_LABEL_TARGET, XAxisMode, label_stride,
    thinned_label_indices,
};
pub use line_series::{
    LineGeometry, PathVertex, PointMarker, area_fill_commands, project_line_series,
};
pub use path::{PathCommand, to_svg_path_data};
pub use pie_series::{
    PIE_LABEL_MIN_PROPORTION, PIE_POP_OUT_DISTANCE, PIE_START_ANGLE, PieGeometry, PieSlice,
    PieState, SlicePath, normalize_pie_angle, pie_radius, project_pie, slice_path,
};
pub use scale::{CategoryKey, LinearScale, MIN_DOMAIN_SPAN, OrdinalScale, ValueDomain, XScale};
pub use types::{ChartSeries, DataPoint, SeriesKind, Viewport, XValue};

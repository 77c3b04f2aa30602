use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use dashboard_charts::api::{ChartConfig, ChartEngine, ChartKind, RenderStyle};
use dashboard_charts::core::{ChartSeries, DataPoint, Padding, SeriesKind};
use dashboard_charts::error::ChartError;
use dashboard_charts::interaction::{HitShape, HoverPayload, PrimitiveKind};
use dashboard_charts::render::{Color, NullRenderer, RenderFrame};

fn monthly() -> ChartSeries {
    ChartSeries::new(
        "Revenue",
        vec![
            DataPoint::new("Jan", 10.0),
            DataPoint::new("Feb", 20.0),
            DataPoint::new("Mar", 15.0),
        ],
    )
}

fn engine(kind: ChartKind, series: Vec<ChartSeries>) -> ChartEngine<NullRenderer> {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), 600, ChartConfig::default()).expect("engine");
    engine.set_kind(kind);
    engine.set_series(series);
    engine
}

fn texts(frame: &RenderFrame) -> Vec<&str> {
    frame.texts.iter().map(|text| text.text.as_str()).collect()
}

#[test]
fn engine_rejects_zero_width_and_height() {
    let err = ChartEngine::new(NullRenderer::default(), 0, ChartConfig::default())
        .err()
        .expect("zero width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, .. }));

    let err = ChartEngine::new(
        NullRenderer::default(),
        600,
        ChartConfig::default().with_height(0),
    )
    .err()
    .expect("zero height must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn viewport_height_follows_config() {
    let engine = engine(ChartKind::Line, vec![monthly()]);
    assert_eq!(engine.viewport().width, 600);
    assert_eq!(engine.viewport().height, 300);
}

#[test]
fn line_chart_emits_path_markers_and_axes() {
    let mut engine = engine(ChartKind::Line, vec![monthly()]);
    let frame = engine.build_render_frame().expect("frame");

    assert_eq!(frame.paths.len(), 1);
    assert_eq!(frame.paths[0].commands.len(), 3);
    assert!(frame.paths[0].fill.is_none());
    assert_eq!(frame.circles.len(), 3);
    assert_eq!(frame.hit_targets.len(), 3);
    assert!(
        frame
            .hit_targets
            .iter()
            .all(|target| target.primitive.kind == PrimitiveKind::Marker)
    );

    // 5 grid lines plus both axes.
    assert_eq!(frame.lines.len(), 7);
    let labels = texts(&frame);
    for expected in ["0", "5", "10", "15", "20", "Jan", "Feb", "Mar", "Revenue"] {
        assert!(labels.contains(&expected), "missing label {expected}");
    }

    engine.render().expect("render");
    assert_eq!(engine.renderer().render_count, 1);
    assert_eq!(engine.renderer().last_path_count, 1);
    assert_eq!(engine.hit_targets().len(), 3);
}

#[test]
fn grid_and_legend_can_be_disabled() {
    let config = ChartConfig::default().with_grid(false).with_legend(false);
    let mut engine = ChartEngine::new(NullRenderer::default(), 600, config).expect("engine");
    engine.set_series(vec![monthly()]);
    let frame = engine.build_render_frame().expect("frame");

    assert_eq!(frame.lines.len(), 2);
    assert!(frame.rects.is_empty());
    assert!(!texts(&frame).contains(&"Revenue"));
}

#[test]
fn title_and_axis_titles_are_drawn() {
    let config = ChartConfig::default()
        .with_title("Revenue overview")
        .with_subtitle("Last 30 days")
        .with_axis_labels("Day", "USD");
    let mut engine = ChartEngine::new(NullRenderer::default(), 600, config).expect("engine");
    engine.set_series(vec![monthly()]);
    let frame = engine.build_render_frame().expect("frame");
    let labels = texts(&frame);

    for expected in ["Revenue overview", "Last 30 days", "Day", "USD"] {
        assert!(labels.contains(&expected), "missing label {expected}");
    }
}

#[test]
fn area_chart_fills_at_reduced_opacity() {
    let engine = engine(ChartKind::Area, vec![monthly()]);
    let frame = engine.build_render_frame().expect("frame");

    assert_eq!(frame.paths.len(), 2);
    let fill = frame.paths[0].fill.expect("area fill");
    assert!(fill.alpha < 1.0);
    assert!(frame.paths[1].stroke.is_some());
}

#[test]
fn per_series_area_kind_is_honored_on_line_charts() {
    let engine = engine(
        ChartKind::Line,
        vec![monthly().with_kind(SeriesKind::Area), monthly()],
    );
    let frame = engine.build_render_frame().expect("frame");
    let filled = frame.paths.iter().filter(|path| path.fill.is_some()).count();
    assert_eq!(filled, 1);
}

#[test]
fn palette_cycles_and_explicit_colors_win() {
    let red = Color::from_hex("#ff0000").expect("color");
    let blue = Color::from_hex("#0000ff").expect("color");
    let config = ChartConfig::default().with_colors(vec![red, blue]);
    let mut engine = ChartEngine::new(NullRenderer::default(), 600, config).expect("engine");
    let green = Color::from_hex("#00ff00").expect("color");
    engine.set_series(vec![
        monthly(),
        monthly(),
        monthly(),
        monthly().with_color(green),
    ]);
    let frame = engine.build_render_frame().expect("frame");

    let strokes: Vec<Color> = frame.paths.iter().filter_map(|path| path.stroke).collect();
    assert_eq!(strokes, vec![red, blue, red, green]);
}

#[test]
fn bar_chart_emits_rects_and_group_labels() {
    let other = ChartSeries::new(
        "Costs",
        vec![
            DataPoint::new("Jan", 4.0),
            DataPoint::new("Feb", -6.0),
            DataPoint::new("Mar", 8.0),
        ],
    );
    let engine = engine(ChartKind::Bar, vec![monthly(), other]);
    let frame = engine.build_render_frame().expect("frame");

    let bar_targets: Vec<_> = frame
        .hit_targets
        .iter()
        .filter(|target| target.primitive.kind == PrimitiveKind::Bar)
        .collect();
    assert_eq!(bar_targets.len(), 6);
    // Six bars plus two legend swatches.
    assert_eq!(frame.rects.len(), 8);

    let labels = texts(&frame);
    assert!(labels.contains(&"Jan"));
    assert!(labels.contains(&"Costs"));
    assert!(labels.contains(&"-6"));

    let negative = bar_targets
        .iter()
        .find(|target| target.payload.value < 0.0)
        .expect("negative bar");
    let HitShape::Rect { y, height, .. } = negative.shape else {
        panic!("bar hit shape must be a rect");
    };
    assert_abs_diff_eq!(negative.anchor_y, y + height, epsilon = 1e-9);
}

#[test]
fn pie_chart_emits_slices_percentages_and_total() {
    let series = ChartSeries::new(
        "Share",
        vec![DataPoint::new("a", 30.0), DataPoint::new("b", 70.0)],
    );
    let engine = engine(ChartKind::Pie, vec![series]);
    let frame = engine.build_render_frame().expect("frame");

    assert_eq!(frame.paths.len(), 2);
    assert!(frame.paths.iter().all(|path| path.fill.is_some()));
    assert!(frame.lines.is_empty());
    let labels = texts(&frame);
    for expected in ["30%", "70%", "100", "a", "b"] {
        assert!(labels.contains(&expected), "missing label {expected}");
    }
    assert!(
        frame
            .hit_targets
            .iter()
            .all(|target| target.primitive.kind == PrimitiveKind::Slice)
    );
}

#[test]
fn pie_chart_with_zero_total_shows_no_data() {
    let series = ChartSeries::new("Share", vec![DataPoint::new("a", 0.0)]);
    let engine = engine(ChartKind::Pie, vec![series]);
    let frame = engine.build_render_frame().expect("frame");

    assert!(frame.paths.is_empty());
    assert!(frame.hit_targets.is_empty());
    assert!(texts(&frame).contains(&"No data"));
}

#[test]
fn hovered_slice_pops_out_along_its_bisector() {
    let series = ChartSeries::new(
        "Share",
        vec![DataPoint::new("a", 25.0), DataPoint::new("b", 75.0)],
    );
    let mut engine = engine(ChartKind::Pie, vec![series]);
    let area = engine.chart_area().expect("area");
    let (cx, cy) = area.center();

    // Inside the first quarter (12 to 3 o'clock).
    let hover = engine
        .pointer_move(cx + 20.0, cy - 20.0)
        .expect("pointer move")
        .expect("slice hovered");
    assert_eq!(hover.payload.label, "a");
    assert_eq!(hover.primitive.point_index, 0);

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.paths[0].offset_x > 0.0);
    assert!(frame.paths[0].offset_y < 0.0);
    assert_abs_diff_eq!(frame.paths[1].offset_x, 0.0);
    assert_abs_diff_eq!(frame.paths[1].offset_y, 0.0);
}

#[test]
fn hovered_marker_is_enlarged_and_reported() {
    let events: Rc<RefCell<Vec<Option<HoverPayload>>>> = Rc::default();
    let sink = Rc::clone(&events);

    let mut engine = engine(ChartKind::Line, vec![monthly()]);
    engine.on_hover(move |payload: Option<&HoverPayload>| {
        sink.borrow_mut().push(payload.cloned());
    });
    engine.render().expect("render");

    let marker = engine.hit_targets()[1].clone();
    let hover = engine
        .pointer_move(marker.anchor_x + 1.0, marker.anchor_y)
        .expect("pointer move")
        .expect("marker hovered");
    assert_eq!(hover.payload.series_name, "Revenue");
    assert_eq!(hover.payload.label, "Feb: 20");

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.circles[1].radius > frame.circles[0].radius);
    assert!(engine.tooltip().is_some());

    engine.pointer_leave();
    assert!(engine.hover_state().is_none());
    assert!(engine.tooltip().is_none());

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0].as_ref().map(|payload| payload.value),
        Some(20.0)
    );
    assert!(events[1].is_none());
}

#[test]
fn disabled_tooltip_still_tracks_hover() {
    let config = ChartConfig::default().with_tooltip(false);
    let mut engine = ChartEngine::new(NullRenderer::default(), 600, config).expect("engine");
    engine.set_series(vec![monthly()]);

    let target = engine.build_render_frame().expect("frame").hit_targets[0].clone();
    assert!(
        engine
            .pointer_move(target.anchor_x, target.anchor_y)
            .expect("pointer move")
            .is_some()
    );
    assert!(engine.tooltip().is_none());
}

#[test]
fn replacing_series_clears_stale_hover() {
    let mut engine = engine(ChartKind::Line, vec![monthly()]);
    let target = engine.build_render_frame().expect("frame").hit_targets[0].clone();
    engine
        .pointer_move(target.anchor_x, target.anchor_y)
        .expect("pointer move");
    assert!(engine.hover_state().is_some());

    engine.set_series(Vec::new());
    assert!(engine.hover_state().is_none());
}

#[test]
fn non_finite_points_are_skipped_in_frames() {
    let series = ChartSeries::new(
        "s",
        vec![
            DataPoint::new("a", 1.0),
            DataPoint::new("b", f64::NAN),
            DataPoint::new("c", 3.0),
        ],
    );
    let mut engine = engine(ChartKind::Line, vec![series]);
    engine.render().expect("non-finite points must not fail the render");
    assert_eq!(engine.hit_targets().len(), 2);
}

#[test]
fn empty_series_render_empty_axes() {
    let mut engine = engine(ChartKind::Line, Vec::new());
    engine.render().expect("render");
    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.paths.is_empty());
    assert_eq!(frame.lines.len(), 7);
}

#[test]
fn zero_padding_maps_domain_to_full_height() {
    let config = ChartConfig::default()
        .with_padding(Padding::uniform(0.0))
        .with_height(200);
    let mut engine = ChartEngine::new(NullRenderer::default(), 300, config).expect("engine");
    engine.set_series(vec![monthly()]);
    let layout = engine.scale_layout().expect("layout");

    assert_abs_diff_eq!(layout.y_to_pixel(0.0), 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.y_to_pixel(20.0), 0.0, epsilon = 1e-9);
}

#[test]
fn render_frame_json_snapshot_round_trips() {
    let engine = engine(ChartKind::Bar, vec![monthly()]);
    let frame = engine.build_render_frame().expect("frame");
    let json = frame.to_json_pretty().expect("serialize");
    let restored = RenderFrame::from_json_str(&json).expect("deserialize");

    assert_eq!(restored.rects.len(), frame.rects.len());
    assert_eq!(restored.hit_targets.len(), frame.hit_targets.len());
    assert_eq!(texts(&restored), texts(&frame));
    assert_eq!(restored.viewport, frame.viewport);
}

#[test]
fn extreme_finite_values_still_render() {
    let extreme = ChartSeries::new(
        "extreme",
        vec![
            DataPoint::new("a", -1e308),
            DataPoint::new("b", 1e308),
            DataPoint::new("c", 1e308),
        ],
    );

    for kind in [ChartKind::Line, ChartKind::Area, ChartKind::Bar, ChartKind::Pie] {
        let mut engine = engine(kind, vec![extreme.clone()]);
        engine.render().expect("finite input must render");

        let frame = engine.build_render_frame().expect("frame");
        assert!(frame.rects.iter().all(|rect| rect.height.is_finite()));
        assert!(frame.hit_targets.iter().all(|target| target.anchor_y.is_finite()));
    }

    let pie = engine(ChartKind::Pie, vec![extreme]);
    let frame = pie.build_render_frame().expect("frame");
    assert!(texts(&frame).contains(&"50%"));
    assert!(texts(&frame).contains(&"1.8e308"));

    let mut line = engine(ChartKind::Line, vec![extreme_line_series()]);
    line.render().expect("render");
    assert_eq!(line.hit_targets()[0].payload.label, "a: -1e308");
}

fn extreme_line_series() -> ChartSeries {
    ChartSeries::new("extreme", vec![DataPoint::new("a", -1e308), DataPoint::new("b", 1e308)])
}

#[test]
fn render_style_change_rebuilds_hit_radius() {
    let mut engine = engine(ChartKind::Line, vec![monthly()]);
    engine.render().expect("render");
    let marker = engine.hit_targets()[0].clone();
    let (x, y) = (marker.anchor_x, marker.anchor_y + 20.0);
    assert!(engine.pointer_move(x, y).expect("pointer move").is_none());

    engine.set_render_style(RenderStyle {
        marker_hit_radius: 30.0,
        ..RenderStyle::default()
    });
    let hover = engine
        .pointer_move(x, y)
        .expect("pointer move")
        .expect("wider hit radius reaches the pointer");
    assert_eq!(hover.payload.label, "Jan: 10");
}

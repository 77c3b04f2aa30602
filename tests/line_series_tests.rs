use approx::assert_abs_diff_eq;
use dashboard_charts::core::{
    ChartArea, ChartSeries, DataPoint, Padding, PathCommand, ScaleLayout, Viewport, XAxisMode,
    area_fill_commands, project_line_series, to_svg_path_data,
};

fn layout_for(series: &[ChartSeries]) -> ScaleLayout {
    let area =
        ChartArea::from_viewport(Viewport::new(300, 200), Padding::uniform(0.0)).expect("area");
    ScaleLayout::build(series, area, XAxisMode::Auto)
}

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

#[test]
fn three_points_yield_three_path_vertices() {
    let series = monthly();
    let layout = layout_for(std::slice::from_ref(&series));
    let geometry = project_line_series(&series, &layout, false);

    assert_eq!(geometry.vertices.len(), 3);
    assert_eq!(geometry.markers.len(), 3);
    assert!(geometry.fill.is_none());

    let domain = layout.y_domain();
    assert_abs_diff_eq!(domain.min, 0.0);
    assert_abs_diff_eq!(domain.max, 20.0);

    // Feb is the maximum and sits on the top edge.
    assert_abs_diff_eq!(geometry.vertices[1].y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.vertices[0].y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.vertices[2].y, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.vertices[0].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.vertices[2].x, 300.0, epsilon = 1e-9);
}

#[test]
fn stroke_commands_move_then_line() {
    let series = monthly();
    let layout = layout_for(std::slice::from_ref(&series));
    let commands = project_line_series(&series, &layout, false).stroke_commands();

    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[0], PathCommand::MoveTo { .. }));
    assert!(matches!(commands[1], PathCommand::LineTo { .. }));
    assert!(matches!(commands[2], PathCommand::LineTo { .. }));
    assert_eq!(to_svg_path_data(&commands), "M 0 100 L 150 0 L 300 50");
}

#[test]
fn area_variant_closes_to_zero_baseline() {
    let series = monthly();
    let layout = layout_for(std::slice::from_ref(&series));
    let geometry = project_line_series(&series, &layout, true);
    let fill = geometry.fill.expect("area fill");

    assert_eq!(fill.len(), 6);
    assert_eq!(
        fill[3],
        PathCommand::LineTo {
            x: 300.0,
            y: layout.baseline_y()
        }
    );
    assert_eq!(
        fill[4],
        PathCommand::LineTo {
            x: 0.0,
            y: layout.baseline_y()
        }
    );
    assert_eq!(fill[5], PathCommand::Close);
}

#[test]
fn area_fill_of_no_vertices_is_empty() {
    assert!(area_fill_commands(&[], 100.0).is_empty());
}

#[test]
fn markers_carry_synthesized_or_explicit_labels() {
    let series = ChartSeries::new(
        "Users",
        vec![
            DataPoint::new("Jan", 10.0),
            DataPoint::new("Feb", 12.5).with_label("February peak"),
        ],
    );
    let layout = layout_for(std::slice::from_ref(&series));
    let geometry = project_line_series(&series, &layout, false);

    assert_eq!(geometry.markers[0].label, "Jan: 10");
    assert_eq!(geometry.markers[1].label, "February peak");
    assert_abs_diff_eq!(geometry.markers[1].value, 12.5);
}

#[test]
fn non_finite_points_are_skipped_not_fatal() {
    let series = ChartSeries::new(
        "s",
        vec![
            DataPoint::new("a", 1.0),
            DataPoint::new("b", f64::NAN),
            DataPoint::new("c", 3.0),
        ],
    );
    let layout = layout_for(std::slice::from_ref(&series));
    let geometry = project_line_series(&series, &layout, true);

    assert_eq!(geometry.vertices.len(), 2);
    assert_eq!(geometry.markers[1].point_index, 2);
    assert!(
        geometry
            .stroke_commands()
            .iter()
            .all(|command| command.is_finite())
    );
}

#[test]
fn series_share_one_scale() {
    let small = ChartSeries::new("small", vec![DataPoint::new("a", 5.0), DataPoint::new("b", 5.0)]);
    let large = ChartSeries::new("large", vec![DataPoint::new("a", 50.0), DataPoint::new("b", 50.0)]);
    let series = [small, large];
    let layout = layout_for(&series);

    let small_geometry = project_line_series(&series[0], &layout, false);
    let large_geometry = project_line_series(&series[1], &layout, false);
    assert!(small_geometry.vertices[0].y > large_geometry.vertices[0].y);
    assert_abs_diff_eq!(large_geometry.vertices[0].y, 0.0, epsilon = 1e-9);
}

#[test]
fn mismatched_categories_are_placed_on_the_union() {
    let first = ChartSeries::new("a", vec![DataPoint::new("Mon", 1.0), DataPoint::new("Tue", 2.0)]);
    let second = ChartSeries::new("b", vec![DataPoint::new("Wed", 3.0)]);
    let series = [first, second];
    let layout = layout_for(&series);

    let geometry = project_line_series(&series[1], &layout, false);
    assert_eq!(geometry.vertices.len(), 1);
    assert_abs_diff_eq!(geometry.vertices[0].x, 300.0, epsilon = 1e-9);
}

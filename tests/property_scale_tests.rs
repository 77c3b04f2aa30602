use dashboard_charts::core::{
    ChartArea, ChartSeries, DataPoint, Padding, ScaleLayout, Viewport, XAxisMode,
};
use proptest::prelude::*;

fn area() -> ChartArea {
    ChartArea::from_viewport(Viewport::new(640, 360), Padding::default()).expect("area")
}

fn series_of(values: &[f64]) -> Vec<ChartSeries> {
    vec![ChartSeries::new(
        "values",
        values
            .iter()
            .enumerate()
            .map(|(i, value)| DataPoint::new(format!("c{i}"), *value))
            .collect(),
    )]
}

proptest! {
    #[test]
    fn y_scale_maps_every_value_inside_the_area(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..40)
    ) {
        let area = area();
        let layout = ScaleLayout::build(&series_of(&values), area, XAxisMode::Auto);
        let tolerance = 1e-6;

        for value in &values {
            let pixel = layout.y_to_pixel(*value);
            prop_assert!(pixel >= area.y - tolerance);
            prop_assert!(pixel <= area.bottom() + tolerance);
        }

        let domain = layout.y_domain();
        prop_assert!(domain.min <= 0.0 && domain.max >= 0.0);
        prop_assert!(domain.span() > 0.0);
        prop_assert!((layout.y_to_pixel(domain.max) - area.y).abs() <= tolerance);
        prop_assert!((layout.y_to_pixel(domain.min) - area.bottom()).abs() <= tolerance);
    }

    #[test]
    fn y_scale_is_monotonic_decreasing_in_pixels(
        values in prop::collection::vec(-10_000.0f64..10_000.0, 2..20),
        a in -10_000.0f64..10_000.0,
        b in -10_000.0f64..10_000.0
    ) {
        let layout = ScaleLayout::build(&series_of(&values), area(), XAxisMode::Auto);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(layout.y_to_pixel(high) <= layout.y_to_pixel(low) + 1e-9);
    }

    #[test]
    fn layout_is_idempotent(
        values in prop::collection::vec(-500.0f64..500.0, 0..30)
    ) {
        let series = series_of(&values);
        let first = ScaleLayout::build(&series, area(), XAxisMode::Categorical);
        let second = ScaleLayout::build(&series, area(), XAxisMode::Categorical);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ordinal_positions_stay_inside_the_area(count in 1usize..60) {
        let area = area();
        let values = vec![1.0; count];
        let series = series_of(&values);
        let layout = ScaleLayout::build(&series, area, XAxisMode::Categorical);

        for point in &series[0].points {
            let x = layout.x_to_pixel(&point.x).expect("category is known");
            prop_assert!(x >= area.x - 1e-9);
            prop_assert!(x <= area.right() + 1e-9);
        }
    }
}

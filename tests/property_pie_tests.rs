use std::f64::consts::TAU;

use dashboard_charts::core::{
    ChartArea, ChartSeries, DataPoint, PIE_START_ANGLE, Padding, Viewport, project_pie,
};
use proptest::prelude::*;

fn area() -> ChartArea {
    ChartArea::from_viewport(Viewport::new(400, 300), Padding::default()).expect("area")
}

proptest! {
    #[test]
    fn slice_sweeps_tile_the_full_circle(
        values in prop::collection::vec(0.001f64..10_000.0, 1..24)
    ) {
        let series = ChartSeries::new(
            "share",
            values
                .iter()
                .enumerate()
                .map(|(i, value)| DataPoint::new(format!("s{i}"), *value))
                .collect(),
        );
        let geometry = project_pie(&series, area());
        let slices = geometry.slices();
        prop_assert_eq!(slices.len(), values.len());

        let swept: f64 = slices.iter().map(|slice| slice.sweep()).sum();
        prop_assert!((swept - TAU).abs() <= 1e-6);
        prop_assert!((slices[0].start_angle - PIE_START_ANGLE).abs() <= 1e-12);

        for pair in slices.windows(2) {
            prop_assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        let proportions: f64 = slices.iter().map(|slice| slice.proportion).sum();
        prop_assert!((proportions - 1.0).abs() <= 1e-9);
        prop_assert!(slices.iter().all(|slice| slice.path.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn non_positive_values_never_produce_slices(
        values in prop::collection::vec(-1_000.0f64..=0.0, 0..12)
    ) {
        let series = ChartSeries::new(
            "share",
            values
                .iter()
                .enumerate()
                .map(|(i, value)| DataPoint::new(format!("s{i}"), *value))
                .collect(),
        );
        let geometry = project_pie(&series, area());
        prop_assert!(geometry.slices().is_empty());
        prop_assert!(geometry.total().is_none());
    }
}

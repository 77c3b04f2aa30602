use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use dashboard_charts::interaction::{
    HitShape, HitTarget, HoverPayload, InteractionController, PrimitiveKind, PrimitiveRef,
    TooltipTuning, hit_test, place_tooltip,
};
use dashboard_charts::render::Color;

fn target(point_index: usize, cx: f64, cy: f64) -> HitTarget {
    HitTarget {
        primitive: PrimitiveRef {
            kind: PrimitiveKind::Marker,
            series_index: 0,
            point_index,
        },
        shape: HitShape::Circle {
            cx,
            cy,
            radius: 8.0,
        },
        anchor_x: cx,
        anchor_y: cy,
        payload: HoverPayload {
            series_name: "Revenue".to_owned(),
            label: format!("point {point_index}"),
            value: point_index as f64,
            color: Color::rgb8(0x3b, 0x82, 0xf6),
        },
    }
}

#[test]
fn hit_test_finds_the_primitive_under_the_pointer() {
    let targets = vec![target(0, 10.0, 10.0), target(1, 100.0, 10.0)];
    let hover = hit_test(&targets, 102.0, 12.0).expect("hovered");

    assert_eq!(hover.primitive.point_index, 1);
    assert_eq!(hover.payload.label, "point 1");
    assert_abs_diff_eq!(hover.pointer_x, 102.0);
    assert_abs_diff_eq!(hover.anchor_x, 100.0);
    assert!(hit_test(&targets, 50.0, 50.0).is_none());
}

#[test]
fn overlapping_targets_resolve_to_the_topmost() {
    let targets = vec![target(0, 10.0, 10.0), target(1, 12.0, 10.0)];
    let hover = hit_test(&targets, 11.0, 10.0).expect("hovered");
    assert_eq!(hover.primitive.point_index, 1);
}

#[test]
fn rect_hit_shape_is_inclusive() {
    let shape = HitShape::Rect {
        x: 10.0,
        y: 20.0,
        width: 30.0,
        height: 40.0,
    };
    assert!(shape.contains(10.0, 20.0));
    assert!(shape.contains(40.0, 60.0));
    assert!(!shape.contains(40.5, 60.0));
}

#[test]
fn tooltip_is_offset_from_the_anchor() {
    let targets = vec![target(0, 100.0, 100.0)];
    let hover = hit_test(&targets, 100.0, 100.0).expect("hovered");
    let placement = place_tooltip(&hover, TooltipTuning::default(), 400.0, 300.0);

    assert_abs_diff_eq!(placement.x, 112.0);
    assert_abs_diff_eq!(placement.y, 88.0);
}

#[test]
fn tooltip_is_clamped_near_the_cursor_and_inside_the_canvas() {
    let targets = vec![HitTarget {
        shape: HitShape::Rect {
            x: 0.0,
            y: 0.0,
            width: 400.0,
            height: 300.0,
        },
        ..target(0, 0.0, 0.0)
    }];

    let far = hit_test(&targets, 300.0, 250.0).expect("hovered");
    let placement = place_tooltip(&far, TooltipTuning::default(), 400.0, 300.0);
    assert_abs_diff_eq!(placement.x, 252.0);
    assert_abs_diff_eq!(placement.y, 202.0);

    let corner = hit_test(&targets, 0.0, 0.0).expect("hovered");
    let placement = place_tooltip(&corner, TooltipTuning::default(), 400.0, 300.0);
    assert_abs_diff_eq!(placement.x, 12.0);
    assert_abs_diff_eq!(placement.y, 0.0);
}

#[test]
fn controller_notifies_only_on_hover_changes() {
    let events: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
    let sink = Rc::clone(&events);

    let mut controller = InteractionController::default();
    controller.subscribe(Box::new(move |payload: Option<&HoverPayload>| {
        sink.borrow_mut()
            .push(payload.map(|payload| payload.label.clone()));
    }));

    let targets = vec![target(0, 10.0, 10.0), target(1, 100.0, 10.0)];
    controller.on_pointer_move(&targets, 10.0, 10.0);
    controller.on_pointer_move(&targets, 12.0, 11.0);
    controller.on_pointer_move(&targets, 100.0, 10.0);
    controller.on_pointer_move(&targets, 50.0, 50.0);
    controller.on_pointer_move(&targets, 55.0, 50.0);

    assert_eq!(
        *events.borrow(),
        vec![Some("point 0".to_owned()), Some("point 1".to_owned()), None]
    );
    assert_eq!(controller.pointer(), Some((55.0, 50.0)));
}

#[test]
fn pointer_leave_clears_hover_immediately() {
    let cleared = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&cleared);

    let mut controller = InteractionController::default();
    controller.subscribe(Box::new(move |payload: Option<&HoverPayload>| {
        if payload.is_none() {
            *sink.borrow_mut() += 1;
        }
    }));

    let targets = vec![target(0, 10.0, 10.0)];
    assert!(controller.on_pointer_move(&targets, 10.0, 10.0).is_some());
    assert!(controller.tooltip(400.0, 300.0).is_some());

    controller.on_pointer_leave();
    assert!(controller.hover().is_none());
    assert!(controller.pointer().is_none());
    assert!(controller.tooltip(400.0, 300.0).is_none());
    assert_eq!(*cleared.borrow(), 1);

    // Leaving again is a no-op.
    controller.on_pointer_leave();
    assert_eq!(*cleared.borrow(), 1);
}

#[test]
fn hover_is_recomputed_from_current_targets() {
    let mut controller = InteractionController::default();
    let before = vec![target(0, 10.0, 10.0)];
    controller.on_pointer_move(&before, 10.0, 10.0);

    let after = vec![target(7, 200.0, 200.0)];
    assert!(controller.on_pointer_move(&after, 10.0, 10.0).is_none());
    assert_eq!(controller.hovered_primitive(), None);
}

// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of a viewport with several plugins attached.

use kurbo::{Point, Rect, Size, Vec2};
use vantage::plugins::{
    BounceOptions, ClampOptions, ClampZoomOptions, DecelerateOptions, DragOptions, PinchOptions,
    SnapZoomOptions, WheelOptions,
};
use vantage::{
    Plugin, PointerEvent, Viewport, ViewportEvent, ViewportOptions, ViewportPlugin, WheelEvent,
};

fn viewport() -> Viewport {
    Viewport::new(ViewportOptions {
        world_size: Some(Size::new(1600.0, 1200.0)),
        ..ViewportOptions::new(Size::new(800.0, 600.0))
    })
}

fn touch(id: u64, x: f64, y: f64) -> PointerEvent {
    PointerEvent::touch(id, Point::new(x, y), 0.0)
}

fn count(viewport: &mut Viewport, name: &str) -> usize {
    viewport.drain_events().filter(|e| e.name() == name).count()
}

#[test]
fn pinch_scales_by_finger_spread() {
    let mut vp = viewport();
    vp.pinch(PinchOptions::default());
    vp.pointer_down(&touch(1, 100.0, 100.0));
    vp.pointer_down(&touch(2, 200.0, 100.0));

    // 100px apart, then 150px: (150 - 100) / 800 * 1.0.
    vp.pointer_move(&touch(1, 50.0, 100.0));
    assert_eq!(vp.transform().scale(), Vec2::new(1.0625, 1.0625));

    // 150px apart, then 200px: (200 - 150) / 800 * 1.0625.
    vp.pointer_move(&touch(2, 250.0, 100.0));
    assert_eq!(vp.transform().scale_x(), 1.128_906_25);
    assert_eq!(vp.transform().scale_y(), 1.128_906_25);
}

#[test]
fn pinch_keeps_the_world_point_under_the_fingers() {
    let mut vp = viewport();
    vp.pinch(PinchOptions {
        no_drag: true,
        ..PinchOptions::default()
    });
    vp.move_corner(Point::new(123.0, 45.0));
    vp.pointer_down(&touch(1, 300.0, 200.0));
    vp.pointer_down(&touch(2, 420.0, 260.0));

    let moves = [(1, 280.0, 190.0), (2, 470.0, 300.0), (1, 250.0, 150.0), (2, 430.0, 280.0)];
    let mut fingers = [Point::new(300.0, 200.0), Point::new(420.0, 260.0)];
    for (id, x, y) in moves {
        let index = if id == 1 { 0 } else { 1 };
        fingers[index] = Point::new(x, y);
        let centroid = fingers[0].midpoint(fingers[1]);
        let world = vp.to_world(centroid);

        vp.pointer_move(&touch(id, x, y));

        let back = vp.to_screen(world);
        assert!((back - centroid).hypot() < 1e-9, "{back:?} drifted from {centroid:?}");
    }
}

#[test]
fn clamp_zoom_limits_set_zoom() {
    let mut vp = viewport();
    vp.clamp_zoom(ClampZoomOptions::scale(0.5, 2.0));
    vp.set_zoom(5.0, false);
    assert_eq!(vp.transform().scale(), Vec2::new(2.0, 2.0));
}

#[test]
fn clamp_zoom_limits_each_axis_of_a_non_uniform_zoom() {
    let mut vp = viewport();
    vp.clamp_zoom(ClampZoomOptions::scale(0.5, 2.0))
        .snap_zoom(SnapZoomOptions {
            width: 400.0,
            height: 150.0,
            time: 0.0,
            ..SnapZoomOptions::default()
        });
    assert_eq!(vp.transform().scale(), Vec2::new(2.0, 2.0));

    for _ in 0..5 {
        vp.update(16.0);
        let scale = vp.transform().scale();
        assert!((0.5..=2.0).contains(&scale.x), "scale_x {} out of range", scale.x);
        assert!((0.5..=2.0).contains(&scale.y), "scale_y {} out of range", scale.y);
    }
}

#[test]
fn clamp_zoom_holds_across_gestures() {
    let mut vp = viewport();
    vp.wheel(WheelOptions::default())
        .pinch(PinchOptions::default())
        .clamp_zoom(ClampZoomOptions::scale(0.5, 2.0));

    for _ in 0..40 {
        vp.pointer_wheel(&WheelEvent::vertical(Point::new(400.0, 300.0), -120.0));
        vp.update(16.0);
        let scale = vp.transform().scale_x();
        assert!((0.5..=2.0).contains(&scale), "zoomed in past the limit: {scale}");
    }
    assert_eq!(vp.transform().scale_x(), 2.0);

    for _ in 0..40 {
        vp.pointer_wheel(&WheelEvent::vertical(Point::new(400.0, 300.0), 120.0));
        vp.update(16.0);
        let scale = vp.transform().scale_x();
        assert!((0.5..=2.0).contains(&scale), "zoomed out past the limit: {scale}");
    }
    assert_eq!(vp.transform().scale_x(), 0.5);
}

#[test]
fn clamp_keeps_the_view_inside_the_world() {
    let mut vp = viewport();
    vp.drag(DragOptions::default())
        .decelerate(DecelerateOptions::default())
        .clamp(ClampOptions::default());
    let world = Rect::new(0.0, 0.0, 1600.0, 1200.0);
    let inside = |vp: &Viewport| {
        let visible = vp.visible_bounds();
        visible.x0 >= world.x0 - 1e-9
            && visible.y0 >= world.y0 - 1e-9
            && visible.x1 <= world.x1 + 1e-9
            && visible.y1 <= world.y1 + 1e-9
    };

    let strokes = [
        (Point::new(400.0, 300.0), Vec2::new(300.0, 250.0)),
        (Point::new(100.0, 100.0), Vec2::new(-700.0, -40.0)),
        (Point::new(700.0, 500.0), Vec2::new(-900.0, -800.0)),
        (Point::new(50.0, 550.0), Vec2::new(1200.0, 20.0)),
    ];
    let mut time = 0.0;
    for (start, travel) in strokes {
        vp.pointer_down(&PointerEvent::mouse(start, time));
        for step in 1..=10 {
            time += 10.0;
            let at = start + travel * (f64::from(step) / 10.0);
            vp.pointer_move(&PointerEvent::mouse(at, time));
            assert!(inside(&vp), "dragged outside: {:?}", vp.visible_bounds());
        }
        vp.pointer_up(&PointerEvent::mouse(start + travel, time));
        for _ in 0..60 {
            time += 16.0;
            vp.update(16.0);
            assert!(inside(&vp), "coasted outside: {:?}", vp.visible_bounds());
        }
    }
}

#[test]
fn deceleration_fades_out() {
    for (vx, vy, friction) in [(3.0, 0.0, 0.95), (-1.0, 2.0, 0.5), (0.2, -0.2, 0.99)] {
        let mut vp = viewport();
        vp.decelerate(DecelerateOptions {
            friction,
            ..DecelerateOptions::default()
        });
        if let Some(decelerate) = vp.plugins_mut().decelerate_mut() {
            decelerate.activate(Some(vx), Some(vy));
        }

        let mut last = f64::INFINITY;
        let mut ticks = 0;
        while vp.plugins().decelerate().is_some_and(|d| d.is_active()) {
            vp.update(16.0);
            let speed = vp.plugins().decelerate().map_or(0.0, |d| d.velocity().hypot());
            assert!(speed < last, "speed {speed} did not drop below {last}");
            last = speed;
            ticks += 1;
            assert!(ticks < 10_000, "never came to rest");
        }
    }
}

#[test]
fn one_pinch_start_and_end_per_gesture() {
    let mut vp = viewport();
    vp.drag(DragOptions::default()).pinch(PinchOptions::default());

    vp.pointer_down(&touch(1, 100.0, 100.0));
    vp.pointer_move(&touch(1, 120.0, 100.0));
    vp.pointer_down(&touch(2, 300.0, 100.0));
    for step in 1..=5 {
        let step = f64::from(step);
        vp.pointer_move(&touch(1, 120.0 - 10.0 * step, 100.0));
        vp.pointer_move(&touch(2, 300.0 + 10.0 * step, 100.0));
    }
    vp.pointer_up(&touch(2, 350.0, 100.0));
    vp.pointer_move(&touch(1, 40.0, 120.0));
    vp.pointer_up(&touch(1, 40.0, 120.0));

    let names: Vec<_> = vp.drain_events().map(|e| e.name()).collect();
    assert_eq!(names.iter().filter(|n| *n == "pinch-start").count(), 1);
    assert_eq!(names.iter().filter(|n| *n == "pinch-end").count(), 1);
    assert!(
        names.iter().filter(|n| *n == "drag-end").count() <= 1,
        "the remaining finger carries on a single drag"
    );
    assert!(!vp.plugins().pinch().is_some_and(|p| p.is_active()));
}

#[test]
fn click_only_without_travel() {
    let mut vp = viewport();
    vp.drag(DragOptions::default());

    let press = PointerEvent::mouse(Point::new(200.0, 150.0), 0.0);
    vp.pointer_down(&press);
    vp.pointer_up(&press);
    let events: Vec<_> = vp.drain_events().collect();
    assert_eq!(
        events,
        [ViewportEvent::Clicked {
            screen: Point::new(200.0, 150.0),
            world: Point::new(200.0, 150.0),
        }]
    );

    vp.pointer_down(&press);
    vp.pointer_move(&PointerEvent::mouse(Point::new(260.0, 150.0), 10.0));
    vp.pointer_up(&PointerEvent::mouse(Point::new(260.0, 150.0), 20.0));
    assert_eq!(count(&mut vp, "clicked"), 0);
}

#[test]
fn coasting_view_swallows_the_click() {
    let mut vp = viewport();
    vp.decelerate(DecelerateOptions::default());
    if let Some(decelerate) = vp.plugins_mut().decelerate_mut() {
        decelerate.activate(Some(1.0), None);
    }
    let press = PointerEvent::mouse(Point::new(200.0, 150.0), 0.0);
    vp.pointer_down(&press);
    vp.pointer_up(&press);
    assert_eq!(count(&mut vp, "clicked"), 0);
}

#[test]
fn builtins_run_in_fixed_order() {
    let mut vp = viewport();
    vp.clamp(ClampOptions::default())
        .bounce(BounceOptions::default())
        .decelerate(DecelerateOptions::default())
        .pinch(PinchOptions::default())
        .drag(DragOptions::default());
    let names: Vec<_> = vp.plugins().names().collect();
    assert_eq!(names, ["drag", "pinch", "decelerate", "bounce", "clamp"]);
}

#[derive(Debug)]
struct OneShot;

impl ViewportPlugin for OneShot {
    fn update(&mut self, viewport: &mut Viewport, _elapsed: f64) {
        viewport.transform_mut().translate(Vec2::new(-1.0, 0.0));
        viewport.remove_plugin("one-shot");
    }
}

#[test]
fn custom_plugin_runs_after_builtins_and_can_remove_itself() {
    let mut vp = viewport();
    vp.plugins_mut()
        .add("one-shot", Plugin::Custom(Box::new(OneShot)));
    vp.drag(DragOptions::default());
    let names: Vec<_> = vp.plugins().names().collect();
    assert_eq!(names, ["drag", "one-shot"]);

    vp.update(16.0);
    vp.update(16.0);
    assert_eq!(vp.transform().x(), -1.0);
    assert!(vp.plugins().get("one-shot").is_none());
    assert_eq!(count(&mut vp, "one-shot-remove"), 1);
}

#[test]
fn bounce_returns_after_a_fling_past_the_edge() {
    let mut vp = viewport();
    vp.drag(DragOptions::default())
        .decelerate(DecelerateOptions::default())
        .bounce(BounceOptions::default());

    vp.pointer_down(&PointerEvent::mouse(Point::new(100.0, 300.0), 0.0));
    for step in 1..=5 {
        let step = f64::from(step);
        vp.pointer_move(&PointerEvent::mouse(Point::new(100.0 + 20.0 * step, 300.0), 10.0 * step));
    }
    vp.pointer_up(&PointerEvent::mouse(Point::new(200.0, 300.0), 60.0));
    assert!(vp.transform().x() > 0.0, "dragged past the left edge");

    for _ in 0..200 {
        vp.update(16.0);
    }
    assert_eq!(vp.transform().x(), 0.0);
    let names: Vec<_> = vp.drain_events().map(|e| e.name()).collect();
    assert!(names.iter().any(|n| n == "bounce-x-start"));
    assert!(names.iter().any(|n| n == "bounce-x-end"));
}

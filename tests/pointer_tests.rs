// Host-side tests for turning pointer movement into target velocity.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::*;

fn sim_with(resistance: f64, dpr: f64) -> Simulation<StdRng> {
    let config = StarfieldConfig::new(resistance, 12.0).unwrap();
    let mut s = Simulation::new(config, StdRng::seed_from_u64(9));
    s.resize(Viewport::new(800.0, 600.0, dpr));
    s
}

#[test]
fn first_move_only_records_position() {
    let mut s = sim_with(150.0, 1.0);
    s.pointer_move(300.0, 200.0, InputKind::Mouse);
    assert_eq!(s.velocity().target, DVec2::ZERO);
    assert_eq!(s.pointer().position(), Some(DVec2::new(300.0, 200.0)));
}

#[test]
fn mouse_pushes_field_away() {
    let mut s = sim_with(150.0, 1.0);
    s.pointer_move(0.0, 0.0, InputKind::Mouse);
    s.pointer_move(100.0, 0.0, InputKind::Mouse);
    let t = s.velocity().target;
    assert!((t.x - (-100.0 / 150.0)).abs() < 1e-12);
    assert_eq!(t.y, 0.0);
}

#[test]
fn touch_drags_field_with_finger() {
    let mut s = sim_with(150.0, 1.0);
    s.pointer_move(10.0, 10.0, InputKind::Touch);
    s.pointer_move(10.0, 40.0, InputKind::Touch);
    let t = s.velocity().target;
    assert_eq!(t.x, 0.0);
    assert!((t.y - 30.0 / 150.0).abs() < 1e-12);
    assert!(s.pointer().is_touch());
}

#[test]
fn impulse_scales_with_device_pixel_ratio() {
    let mut s = sim_with(100.0, 2.0);
    s.pointer_move(0.0, 0.0, InputKind::Mouse);
    s.pointer_move(50.0, -25.0, InputKind::Mouse);
    let t = s.velocity().target;
    assert!((t.x - (-1.0)).abs() < 1e-12);
    assert!((t.y - 0.5).abs() < 1e-12);
}

#[test]
fn moves_accumulate_into_target() {
    let mut s = sim_with(150.0, 1.0);
    s.pointer_move(0.0, 0.0, InputKind::Touch);
    s.pointer_move(30.0, 0.0, InputKind::Touch);
    s.pointer_move(60.0, 0.0, InputKind::Touch);
    assert!((s.velocity().target.x - 60.0 / 150.0).abs() < 1e-12);
}

#[test]
fn higher_resistance_is_less_reactive() {
    let mut light = sim_with(150.0, 1.0);
    let mut heavy = sim_with(450.0, 1.0);
    for s in [&mut light, &mut heavy] {
        s.pointer_move(0.0, 0.0, InputKind::Mouse);
        s.pointer_move(90.0, 0.0, InputKind::Mouse);
    }
    assert!(heavy.velocity().target.x.abs() < light.velocity().target.x.abs());
}

#[test]
fn leave_resets_to_origin_and_next_move_jumps() {
    let mut s = sim_with(150.0, 1.0);
    s.pointer_move(400.0, 300.0, InputKind::Mouse);
    s.pointer_leave();
    assert_eq!(s.pointer().position(), Some(DVec2::ZERO));

    s.pointer_move(50.0, 50.0, InputKind::Mouse);
    let t = s.velocity().target;
    assert!((t.x - (-50.0 / 150.0)).abs() < 1e-12);
    assert!((t.y - (-50.0 / 150.0)).abs() < 1e-12);
}

#[test]
fn input_events_route_to_tracker() {
    let mut s = sim_with(150.0, 1.0);
    s.handle(InputEvent::PointerMove {
        x: 0.0,
        y: 0.0,
        kind: InputKind::Mouse,
    });
    s.handle(InputEvent::PointerMove {
        x: 0.0,
        y: 150.0,
        kind: InputKind::Mouse,
    });
    assert!((s.velocity().target.y - (-1.0)).abs() < 1e-12);
    s.handle(InputEvent::PointerLeave);
    assert_eq!(s.pointer().position(), Some(DVec2::ZERO));
}

#[test]
fn input_kind_signs() {
    assert_eq!(InputKind::Mouse.sign(), -1.0);
    assert_eq!(InputKind::Touch.sign(), 1.0);
}

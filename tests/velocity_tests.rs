// Host-side tests for per-frame velocity integration and star motion.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::*;

#[test]
fn integrate_decays_target_then_eases() {
    let mut v = Velocity {
        current: DVec2::ZERO,
        target: DVec2::new(10.0, -5.0),
        z: DEPTH_DRIFT,
    };
    v.integrate();
    assert!((v.target.x - 9.0).abs() < 1e-12);
    assert!((v.target.y - -4.5).abs() < 1e-12);
    assert!((v.current.x - 7.2).abs() < 1e-12);
    assert!((v.current.y - -3.6).abs() < 1e-12);
    assert_eq!(v.z, DEPTH_DRIFT);
}

#[test]
fn target_shrinks_by_tenth_every_tick() {
    let mut v = Velocity::default();
    v.push(DVec2::new(3.0, -2.0));
    for _ in 0..50 {
        let before = v.target;
        v.integrate();
        assert!((v.target.x - before.x * 0.9).abs() < 1e-12);
        assert!((v.target.y - before.y * 0.9).abs() < 1e-12);
        assert!(v.target.x.abs() < before.x.abs());
        assert!(v.target.y.abs() < before.y.abs());
    }
}

#[test]
fn current_velocity_settles_without_overshoot() {
    let mut v = Velocity {
        current: DVec2::new(5.0, -5.0),
        target: DVec2::ZERO,
        z: DEPTH_DRIFT,
    };
    let mut prev = v.current;
    for _ in 0..40 {
        v.integrate();
        assert!(v.current.x >= 0.0 && v.current.x < prev.x);
        assert!(v.current.y <= 0.0 && v.current.y > prev.y);
        prev = v.current;
    }
    assert!(v.current.length() < 1e-9);
}

#[test]
fn released_drag_never_flips_sign() {
    let mut v = Velocity::default();
    v.push(DVec2::new(10.0, 0.0));
    let mut history = Vec::new();
    for _ in 0..200 {
        v.integrate();
        assert!(v.current.x >= 0.0);
        history.push(v.current.x);
    }
    // after the initial catch-up the drift only slows down
    for pair in history[2..].windows(2) {
        assert!(pair[1] < pair[0]);
    }
    assert!(v.current.x < 1e-6);
}

#[test]
fn advance_applies_parallax_zoom_and_drift() {
    let dims = Dimensions {
        width: 1000.0,
        height: 500.0,
        scale: 1.0,
    };
    let velocity = Velocity {
        current: DVec2::new(2.0, -1.0),
        target: DVec2::ZERO,
        z: DEPTH_DRIFT,
    };
    let mut star = Star {
        x: 700.0,
        y: 100.0,
        z: 0.5,
        alpha: 0.8,
    };
    assert!(advance_star(&mut star, &velocity, &dims));

    let x1 = 700.0 + 2.0 * 0.5;
    let y1 = 100.0 - 1.0 * 0.5;
    let x2 = x1 + (x1 - 500.0) * DEPTH_DRIFT * 0.5;
    let y2 = y1 + (y1 - 250.0) * DEPTH_DRIFT * 0.5;
    assert!((star.x - x2).abs() < 1e-9);
    assert!((star.y - y2).abs() < 1e-9);
    assert!((star.z - (0.5 + DEPTH_DRIFT)).abs() < 1e-12);
    assert_eq!(star.alpha, 0.8);
}

#[test]
fn nearer_stars_move_faster() {
    let dims = Dimensions {
        width: 1000.0,
        height: 1000.0,
        scale: 1.0,
    };
    let velocity = Velocity {
        current: DVec2::new(4.0, 0.0),
        target: DVec2::ZERO,
        z: 0.0,
    };
    let mut far = Star {
        x: 500.0,
        y: 500.0,
        z: 0.2,
        alpha: 1.0,
    };
    let mut near = Star { z: 0.9, ..far };
    advance_star(&mut far, &velocity, &dims);
    advance_star(&mut near, &velocity, &dims);
    assert!(near.x - 500.0 > far.x - 500.0);
}

#[test]
fn bounds_allow_overflow_margin() {
    let dims = Dimensions {
        width: 200.0,
        height: 100.0,
        scale: 1.0,
    };
    assert!(dims.contains(-50.0, -50.0, OVERFLOW_THRESHOLD));
    assert!(dims.contains(250.0, 150.0, OVERFLOW_THRESHOLD));
    assert!(!dims.contains(-50.1, 0.0, OVERFLOW_THRESHOLD));
    assert!(!dims.contains(0.0, 150.1, OVERFLOW_THRESHOLD));
}

#[test]
fn depth_only_grows_until_recycled() {
    let mut s = Simulation::new(StarfieldConfig::default(), StdRng::seed_from_u64(21));
    s.resize(Viewport::new(400.0, 300.0, 1.0));
    s.velocity_mut().push(DVec2::new(40.0, -25.0));

    for frame in 0..600 {
        if frame % 50 == 0 {
            s.velocity_mut().push(DVec2::new(-20.0, 30.0));
        }
        let before: Vec<f64> = s.stars().iter().map(|st| st.z).collect();
        s.step();
        for (old, star) in before.iter().zip(s.stars()) {
            let grew = (star.z - (old + DEPTH_DRIFT)).abs() < 1e-12;
            let respawned =
                star.z == FAR_DEPTH || (star.z >= STAR_MIN_SCALE && star.z < 1.0);
            assert!(grew || respawned, "z went {old} -> {}", star.z);
        }
    }
}

// Host-side tests for the damped cursor follower.

use fx_core::{CursorFollower, FxConfig, LoopControl};

#[test]
fn gap_shrinks_every_frame_for_a_stationary_pointer() {
    let mut c = CursorFollower::from_config(&FxConfig::default());
    c.on_pointer_move(800.0, 450.0);
    let mut prev = c.gap();
    for frame in 0..120 {
        assert_eq!(c.tick(), LoopControl::Continue);
        let gap = c.gap();
        assert!(gap < prev, "gap did not shrink at frame {frame}: {gap} >= {prev}");
        assert!(gap > 0.0, "follower must not land exactly on the pointer");
        prev = gap;
    }
}

#[test]
fn decay_is_geometric() {
    let mut c = CursorFollower::new(0.1);
    c.on_pointer_move(1000.0, 0.0);
    let g0 = c.gap();
    for _ in 0..10 {
        c.step();
    }
    let expected = g0 * 0.9_f64.powi(10);
    assert!((c.gap() - expected).abs() < 1e-6);
}

#[test]
fn follower_never_overshoots() {
    let mut c = CursorFollower::new(0.1);
    c.on_pointer_move(-300.0, 200.0);
    for _ in 0..200 {
        let p = c.step();
        assert!(p.x >= -300.0 && p.x <= 0.0);
        assert!(p.y >= 0.0 && p.y <= 200.0);
    }
}

#[test]
fn input_is_stored_without_smoothing() {
    let mut c = CursorFollower::default();
    c.on_pointer_move(12.0, 34.0);
    c.on_pointer_move(56.0, 78.0);
    assert_eq!(c.pointer().x, 56.0);
    assert_eq!(c.pointer().y, 78.0);
    assert_eq!(c.follower().x, 0.0, "no frame has run yet");
}

#[test]
fn configured_damping_is_applied_exactly() {
    let mut cfg = FxConfig::default();
    assert_eq!(cfg.follower_damping, 0.1);
    cfg.set("follower-damping", "0.25").unwrap();
    let mut c = CursorFollower::from_config(&cfg);
    c.on_pointer_move(400.0, -200.0);
    let p = c.step();
    assert_eq!(p.x, 100.0);
    assert_eq!(p.y, -50.0);
}

// Host-side tests for the count-up animator.

use fx_core::counter::{format_count, CounterAnimation};
use fx_core::{CounterDescriptor, FxConfig, FxError};

#[test]
fn large_target_ends_with_grouped_plus() {
    let mut d = CounterDescriptor::new(250.0).unwrap();
    let frames = d.start_with(&FxConfig::default()).unwrap().run_to_end();
    assert_eq!(frames.last().unwrap().text, "250+");
    assert!(frames.last().unwrap().finished);
}

#[test]
fn small_target_ends_with_three_decimals() {
    let mut d = CounterDescriptor::parse("4.5").unwrap();
    let frames = d.start_with(&FxConfig::default()).unwrap().run_to_end();
    assert_eq!(frames.last().unwrap().text, "4.500");
}

#[test]
fn thousands_are_grouped() {
    let mut d = CounterDescriptor::new(12500.0).unwrap();
    let frames = d.start(2000.0, 16.0).unwrap().run_to_end();
    assert_eq!(frames.last().unwrap().text, "12,500+");
}

#[test]
fn start_is_idempotent() {
    let mut d = CounterDescriptor::new(250.0).unwrap();
    assert!(!d.is_triggered());
    assert!(d.start(2000.0, 16.0).is_some());
    assert!(d.is_triggered());
    assert!(d.start(2000.0, 16.0).is_none());
    assert!(d.start(10.0, 1.0).is_none());
}

#[test]
fn increment_matches_duration_over_frame_interval() {
    let a = CounterAnimation::new(250.0, 2000.0, 16.0);
    assert!((a.increment() - 2.0).abs() < 1e-12);
    let frames = a.run_to_end();
    assert_eq!(frames.len(), 125);
}

#[test]
fn displayed_values_never_decrease_or_overshoot() {
    let mut d = CounterDescriptor::new(4.5).unwrap();
    let frames = d.start(2000.0, 16.0).unwrap().run_to_end();
    let mut prev = f64::MIN;
    for f in &frames {
        let v: f64 = f.text.parse().unwrap();
        assert!(v >= prev);
        assert!(v <= 4.5);
        prev = v;
    }
}

#[test]
fn only_the_last_frame_is_finished() {
    let frames = CounterAnimation::new(1000.0, 160.0, 16.0).run_to_end();
    let (last, rest) = frames.split_last().unwrap();
    assert!(last.finished);
    assert!(rest.iter().all(|f| !f.finished));
}

#[test]
fn stepping_past_the_end_keeps_showing_the_target() {
    let mut a = CounterAnimation::new(3.0, 32.0, 16.0);
    while !a.step().finished {}
    assert!(a.is_finished());
    assert_eq!(a.step().text, "3.000");
}

#[test]
fn malformed_targets_fail_at_configuration_time() {
    assert_eq!(
        CounterDescriptor::parse("lots"),
        Err(FxError::InvalidCounterTarget("lots".into()))
    );
    assert!(CounterDescriptor::new(f64::NAN).is_err());
}

#[test]
fn intermediate_large_values_are_floored() {
    assert_eq!(format_count(1999.99, 5000.0), "1,999+");
}

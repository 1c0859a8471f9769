//! Unit tests for perf module.

use slotboard::constants::SLOW_INPUT_MS;
use slotboard::perf::{InputTimings, ScopedTimer, measure};

#[test]
fn test_scoped_timer_creation() {
    // High threshold: dropping must not warn or panic
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_input_timings_defaults_to_input_threshold() {
    let mut timings = InputTimings::default();
    assert_eq!(timings.threshold_ms(), SLOW_INPUT_MS);
    assert_eq!(timings.average(), 0.0);

    for ms in [2.0, 4.0, 6.0, 8.0] {
        timings.record(ms);
    }
    assert!((timings.average() - 5.0).abs() < 0.001);
    assert_eq!(timings.count(), 4);
    assert_eq!(timings.slow_count(), 2);
    assert_eq!(timings.worst_ms(), 8.0);
}

#[test]
fn test_measure_reports_elapsed() {
    let (sum, elapsed) = measure(|| (1..=100).sum::<u32>());
    assert_eq!(sum, 5050);
    assert!(elapsed >= 0.0);
}

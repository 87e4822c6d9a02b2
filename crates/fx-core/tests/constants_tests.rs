// Host-side tests for tuning constants and their relationships.

use fx_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn counter_timing_is_in_the_expected_band() {
    assert!((1200.0..=1800.0).contains(&COUNTER_DURATION_MS));
    assert!(COUNTER_EASE_POWER == 3 || COUNTER_EASE_POWER == 4);
    assert!(COUNTER_STAGGER_MS > 0);
    // Counters wait for the entry animations before starting
    assert!(COUNTER_INITIAL_DELAY_MS > COUNTER_STAGGER_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_smoothing_is_a_small_per_frame_fraction() {
    assert!((0.12..=0.14).contains(&RING_SMOOTHING));
    assert!(RING_EPSILON_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_bounds_are_ordered_and_positive() {
    assert!(FIELD_MIN_COUNT < FIELD_MAX_COUNT);
    assert_eq!(FIELD_MIN_COUNT, 18);
    assert_eq!(FIELD_MAX_COUNT, 80);
    assert!(FIELD_PX_PER_PARTICLE > 0.0);
    assert!(CLICK_PARTICLE_LIFETIME_MS >= 1_000);
    assert!(RESIZE_DEBOUNCE_MS > 0);
    assert!(FIELD_SEED_DELAY_MS > 0);
    assert!(!PALETTE.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_depth_is_subtle() {
    assert!(PARALLAX_DEPTH_PX > 0.0);
    assert!(PARALLAX_DEPTH_PX < 100.0);
}

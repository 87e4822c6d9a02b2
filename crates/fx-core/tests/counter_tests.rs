// Host-side tests for the counter timeline and its easing curves.

use fx_core::counter::{parse_target, start_delay_ms, Counter, CounterOptions, TargetError};
use fx_core::ease::ease_out;

#[test]
fn displayed_value_is_monotone_and_bounded() {
    let opts = CounterOptions::default();
    for target in [0u32, 1, 7, 128, 4096] {
        let c = Counter::new(target, &opts);
        let mut last = 0;
        let mut t = 0.0;
        // Sample at 60Hz frames past the end of the animation
        while t <= opts.duration_ms + 200.0 {
            let v = c.value_at(t);
            assert!(v >= last, "value went backwards at t={t} for target {target}");
            assert!(v <= target, "value overshot target at t={t}");
            last = v;
            t += 16.7;
        }
    }
}

#[test]
fn snaps_exactly_to_target_at_duration() {
    let opts = CounterOptions::default();
    let c = Counter::new(987, &opts);
    assert_eq!(c.value_at(opts.duration_ms), 987);
    assert_eq!(c.value_at(opts.duration_ms * 3.0), 987);
    assert!(c.done_at(opts.duration_ms));
    assert!(!c.done_at(opts.duration_ms - 1.0));
}

#[test]
fn zero_target_never_shows_anything_else() {
    let c = Counter::new(0, &CounterOptions::default());
    for t in [0.0, 100.0, 700.0, 1400.0, 9999.0] {
        assert_eq!(c.value_at(t), 0);
    }
}

#[test]
fn ease_out_hits_both_endpoints_and_clamps() {
    for power in [3, 4] {
        assert_eq!(ease_out(0.0, power), 0.0);
        assert_eq!(ease_out(1.0, power), 1.0);
        // Out-of-range progress clamps rather than extrapolating
        assert_eq!(ease_out(-0.5, power), 0.0);
        assert_eq!(ease_out(1.5, power), 1.0);
    }
}

#[test]
fn quartic_leads_cubic_mid_curve() {
    for p in [0.1, 0.25, 0.5, 0.75, 0.9] {
        assert!(ease_out(p, 4) > ease_out(p, 3), "at p={p}");
    }
}

#[test]
fn stagger_starts_counters_in_sequence() {
    let opts = CounterOptions::default();
    assert_eq!(start_delay_ms(0, &opts), opts.initial_delay_ms);
    let mut last = 0;
    for i in 0..6 {
        let d = start_delay_ms(i, &opts);
        if i > 0 {
            assert!(d > last);
            assert_eq!(d - last, opts.stagger_ms);
        }
        last = d;
    }
}

#[test]
fn parse_target_accepts_plain_integers_only() {
    assert_eq!(parse_target(Some("42")), Ok(42));
    assert_eq!(parse_target(Some(" 17 ")), Ok(17));
    assert_eq!(parse_target(Some("0")), Ok(0));
    assert_eq!(parse_target(None), Err(TargetError::Missing));
    assert_eq!(
        parse_target(Some("-3")),
        Err(TargetError::Invalid("-3".into()))
    );
    assert_eq!(
        parse_target(Some("12k")),
        Err(TargetError::Invalid("12k".into()))
    );
}

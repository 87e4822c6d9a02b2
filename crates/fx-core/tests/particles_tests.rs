// Host-side tests for particle field planning. Everything random is driven
// through a seeded RNG so the assertions are deterministic.

use fx_core::particles::{field_count, plan_field, FieldOptions, ParticleSpec, Shape};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn field_count_is_clamped_for_all_widths() {
    let opts = FieldOptions::default();
    for w in [0.0, 1.0, 100.0, 320.0, 432.0, 800.0, 1920.0, 5000.0, 1.0e6] {
        let n = field_count(w, &opts);
        assert!((18..=80).contains(&n), "width {w} gave {n}");
    }
}

#[test]
fn field_count_scales_with_width_inside_the_clamp() {
    let opts = FieldOptions::default();
    assert_eq!(field_count(600.0, &opts), 25);
    assert_eq!(field_count(960.0, &opts), 40);
    assert_eq!(field_count(1200.0, &opts), 50);
    let mut last = 0;
    for w in (0..3000).step_by(50) {
        let n = field_count(w as f32, &opts);
        assert!(n >= last, "count shrank at width {w}");
        last = n;
    }
}

#[test]
fn planned_specs_stay_inside_configured_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    let opts = FieldOptions::default();
    for _ in 0..500 {
        let s = ParticleSpec::random(&mut rng, &opts);
        assert!((0.0..100.0).contains(&s.left_pct));
        assert!((0.0..100.0).contains(&s.top_pct));
        assert!(s.size_px >= opts.size_px.0 && s.size_px <= opts.size_px.1);
        assert!(s.opacity >= opts.opacity.0 && s.opacity <= opts.opacity.1);
        assert!(
            s.fall_duration_sec >= opts.fall_duration_sec.0
                && s.fall_duration_sec <= opts.fall_duration_sec.1
        );
        assert!(s.drift_px >= opts.drift_px.0 && s.drift_px <= opts.drift_px.1);
        assert!(s.spin_deg >= opts.spin_deg.0 && s.spin_deg <= opts.spin_deg.1);
        assert!(opts.palette.contains(&s.color));
    }
}

#[test]
fn every_shape_shows_up_over_many_draws() {
    let mut rng = StdRng::seed_from_u64(11);
    let opts = FieldOptions::default();
    let mut seen = [false; 4];
    for _ in 0..256 {
        let s = ParticleSpec::random(&mut rng, &opts);
        let i = Shape::ALL.iter().position(|&sh| sh == s.shape).unwrap();
        seen[i] = true;
    }
    assert!(seen.iter().all(|&b| b), "shapes drawn: {seen:?}");
}

#[test]
fn click_particles_anchor_at_the_click_point() {
    let mut rng = StdRng::seed_from_u64(3);
    let opts = FieldOptions::default();
    let viewport = Vec2::new(1000.0, 500.0);

    let s = ParticleSpec::at_click(&mut rng, &opts, Vec2::new(500.0, 250.0), viewport);
    assert!((s.left_pct - 50.0).abs() < 1e-4);
    assert!((s.top_pct - 50.0).abs() < 1e-4);

    // Coordinates outside the viewport clamp to the edges
    let s = ParticleSpec::at_click(&mut rng, &opts, Vec2::new(-20.0, 600.0), viewport);
    assert_eq!(s.left_pct, 0.0);
    assert_eq!(s.top_pct, 100.0);

    // A degenerate viewport keeps the random (still valid) anchor
    let s = ParticleSpec::at_click(&mut rng, &opts, Vec2::new(10.0, 10.0), Vec2::ZERO);
    assert!((0.0..100.0).contains(&s.left_pct));
    assert!((0.0..100.0).contains(&s.top_pct));
}

#[test]
fn shape_styles_use_their_own_rendering_tricks() {
    let mut rng = StdRng::seed_from_u64(5);
    let opts = FieldOptions::default();
    let mut styled = [false; 4];
    for _ in 0..64 {
        let s = ParticleSpec::random(&mut rng, &opts);
        let css = s.style();
        for frag in ["left:", "top:", "opacity:", "--fall-duration:", "--drift:", "--spin:"] {
            assert!(css.contains(frag), "{frag} missing from {css}");
        }
        match s.shape {
            Shape::Circle => assert!(css.contains("border-radius:50%")),
            Shape::Square => assert!(css.contains("border-radius:2px")),
            Shape::Triangle => {
                // the border trick has no box to round
                assert!(css.contains("width:0"));
                assert!(css.contains("border-bottom:"));
                assert!(!css.contains("border-radius"));
            }
            Shape::Hexagon => assert!(css.contains("clip-path:polygon")),
        }
        styled[Shape::ALL.iter().position(|&sh| sh == s.shape).unwrap()] = true;
    }
    assert!(styled.iter().all(|&b| b));
}

#[test]
fn plan_field_produces_the_clamped_count() {
    let mut rng = StdRng::seed_from_u64(9);
    let opts = FieldOptions::default();
    for w in [100.0, 960.0, 4000.0] {
        let specs = plan_field(&mut rng, w, &opts);
        assert_eq!(specs.len(), field_count(w, &opts));
    }
}

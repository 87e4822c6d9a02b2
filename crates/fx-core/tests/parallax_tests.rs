// Host-side tests for the parallax offset mapping.

use fx_core::parallax::parallax_offset;
use glam::Vec2;

const DEPTH: f32 = 18.0;

#[test]
fn viewport_center_gives_no_offset() {
    let off = parallax_offset(Vec2::new(640.0, 360.0), Vec2::new(1280.0, 720.0), DEPTH);
    assert_eq!(off, Vec2::ZERO);
}

#[test]
fn viewport_corners_give_full_depth() {
    let viewport = Vec2::new(1280.0, 720.0);
    let off = parallax_offset(Vec2::ZERO, viewport, DEPTH);
    assert_eq!(off, Vec2::new(-DEPTH, -DEPTH));
    let off = parallax_offset(viewport, viewport, DEPTH);
    assert_eq!(off, Vec2::new(DEPTH, DEPTH));
}

#[test]
fn pointer_outside_the_viewport_clamps() {
    let viewport = Vec2::new(1000.0, 500.0);
    let off = parallax_offset(Vec2::new(5000.0, -300.0), viewport, DEPTH);
    assert_eq!(off, Vec2::new(DEPTH, -DEPTH));
}

#[test]
fn degenerate_viewport_is_inert() {
    assert_eq!(
        parallax_offset(Vec2::new(10.0, 10.0), Vec2::ZERO, DEPTH),
        Vec2::ZERO
    );
}

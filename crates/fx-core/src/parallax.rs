use glam::Vec2;

/// Background translation for a pointer position: the normalized offset from
/// the viewport center scaled by `depth_px`. The center maps to zero, the
/// viewport edges to ±depth.
pub fn parallax_offset(pointer: Vec2, viewport: Vec2, depth_px: f32) -> Vec2 {
    let half = viewport * 0.5;
    if half.x <= 0.0 || half.y <= 0.0 {
        return Vec2::ZERO;
    }
    let n = (pointer - half) / half;
    n.clamp(Vec2::splat(-1.0), Vec2::ONE) * depth_px
}

#[inline]
pub fn clamp01(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

/// Polynomial ease-out: `1 - (1 - p)^power`. Power 3 is the cubic curve,
/// power 4 the quartic one; both start fast and settle into the target.
#[inline]
pub fn ease_out(p: f64, power: u32) -> f64 {
    let p = clamp01(p);
    1.0 - (1.0 - p).powi(power as i32)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

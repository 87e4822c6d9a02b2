use crate::constants::{FIELD_MAX_COUNT, FIELD_MIN_COUNT, FIELD_PX_PER_PARTICLE, PALETTE};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Circle, Shape::Square, Shape::Triangle, Shape::Hexagon];

    pub fn class_name(self) -> &'static str {
        match self {
            Shape::Circle => "fx-circle",
            Shape::Square => "fx-square",
            Shape::Triangle => "fx-triangle",
            Shape::Hexagon => "fx-hexagon",
        }
    }
}

/// Tuning for the decorative field. Ranges are inclusive (lo, hi) pairs with
/// `lo <= hi`.
#[derive(Clone, Debug)]
pub struct FieldOptions {
    pub min_count: usize,
    pub max_count: usize,
    pub px_per_particle: f32,
    pub size_px: (f32, f32),
    pub opacity: (f32, f32),
    pub fall_duration_sec: (f32, f32),
    pub drift_px: (f32, f32),
    pub spin_deg: (f32, f32),
    pub palette: &'static [&'static str],
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            min_count: FIELD_MIN_COUNT,
            max_count: FIELD_MAX_COUNT,
            px_per_particle: FIELD_PX_PER_PARTICLE,
            size_px: (6.0, 18.0),
            opacity: (0.25, 0.8),
            fall_duration_sec: (8.0, 20.0),
            drift_px: (-40.0, 40.0),
            spin_deg: (180.0, 540.0),
            palette: &PALETTE,
        }
    }
}

/// Number of background particles for a viewport width, clamped to the
/// configured range regardless of how narrow or wide the viewport gets.
pub fn field_count(viewport_w: f32, opts: &FieldOptions) -> usize {
    let raw = (viewport_w.max(0.0) / opts.px_per_particle).floor() as usize;
    raw.clamp(opts.min_count, opts.max_count)
}

/// One planned decorative particle. Positions are percentages of the
/// viewport so the inline styles stay meaningful between reseeds.
#[derive(Clone, Debug)]
pub struct ParticleSpec {
    pub left_pct: f32,
    pub top_pct: f32,
    pub size_px: f32,
    pub color: &'static str,
    pub shape: Shape,
    pub opacity: f32,
    pub fall_duration_sec: f32,
    pub drift_px: f32,
    pub spin_deg: f32,
}

impl ParticleSpec {
    pub fn random(rng: &mut impl Rng, opts: &FieldOptions) -> Self {
        let shape = Shape::ALL[rng.gen_range(0..Shape::ALL.len())];
        let color = opts.palette[rng.gen_range(0..opts.palette.len())];
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            size_px: rng.gen_range(opts.size_px.0..=opts.size_px.1),
            color,
            shape,
            opacity: rng.gen_range(opts.opacity.0..=opts.opacity.1),
            fall_duration_sec: rng.gen_range(opts.fall_duration_sec.0..=opts.fall_duration_sec.1),
            drift_px: rng.gen_range(opts.drift_px.0..=opts.drift_px.1),
            spin_deg: rng.gen_range(opts.spin_deg.0..=opts.spin_deg.1),
        }
    }

    /// Spec for the transient particle spawned at a click point. The click
    /// position in pixels is mapped onto the percentage anchor.
    pub fn at_click(
        rng: &mut impl Rng,
        opts: &FieldOptions,
        click_px: Vec2,
        viewport: Vec2,
    ) -> Self {
        let mut spec = Self::random(rng, opts);
        if viewport.x > 0.0 && viewport.y > 0.0 {
            spec.left_pct = (click_px.x / viewport.x * 100.0).clamp(0.0, 100.0);
            spec.top_pct = (click_px.y / viewport.y * 100.0).clamp(0.0, 100.0);
        }
        spec
    }

    /// Inline style for the planned particle. Shape-specific rules: the
    /// triangle has no box to round and is drawn with the border trick, the
    /// hexagon is cut with a clip-path, circle and square use the element box.
    pub fn style(&self) -> String {
        let mut css = format!(
            "left:{:.2}%;top:{:.2}%;opacity:{:.2};--fall-duration:{:.2}s;--drift:{:.1}px;--spin:{:.0}deg;",
            self.left_pct, self.top_pct, self.opacity, self.fall_duration_sec, self.drift_px, self.spin_deg
        );
        match self.shape {
            Shape::Circle => css.push_str(&format!(
                "width:{0:.1}px;height:{0:.1}px;background:{1};border-radius:50%;",
                self.size_px, self.color
            )),
            Shape::Square => css.push_str(&format!(
                "width:{0:.1}px;height:{0:.1}px;background:{1};border-radius:2px;",
                self.size_px, self.color
            )),
            Shape::Triangle => {
                let half = self.size_px * 0.5;
                css.push_str(&format!(
                    "width:0;height:0;border-left:{half:.1}px solid transparent;\
                     border-right:{half:.1}px solid transparent;\
                     border-bottom:{size:.1}px solid {color};",
                    half = half,
                    size = self.size_px,
                    color = self.color
                ));
            }
            Shape::Hexagon => css.push_str(&format!(
                "width:{0:.1}px;height:{1:.1}px;background:{2};\
                 clip-path:polygon(25% 0%, 75% 0%, 100% 50%, 75% 100%, 25% 100%, 0% 50%);",
                self.size_px,
                self.size_px * 1.15,
                self.color
            )),
        }
        css
    }
}

/// Plan a full background field for the given viewport width.
pub fn plan_field(rng: &mut impl Rng, viewport_w: f32, opts: &FieldOptions) -> Vec<ParticleSpec> {
    let n = field_count(viewport_w, opts);
    log::debug!("[particles] width {:.0} -> {} particles", viewport_w, n);
    (0..n).map(|_| ParticleSpec::random(rng, opts)).collect()
}

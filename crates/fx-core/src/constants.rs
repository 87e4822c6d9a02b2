// Shared tuning constants for the site effects. The duplicated script
// variants only ever disagreed on these numbers, so they live here as the
// canonical defaults and every component takes them through its options
// struct.

// Counters
pub const COUNTER_DURATION_MS: f64 = 1400.0;
pub const COUNTER_EASE_POWER: u32 = 3; // cubic; some variants shipped quartic
pub const COUNTER_INITIAL_DELAY_MS: u32 = 900; // let entry animations settle
pub const COUNTER_STAGGER_MS: u32 = 180;

// Cursor follower
pub const RING_SMOOTHING: f32 = 0.12; // per-frame lerp factor, variants used 0.12..0.14
pub const RING_EPSILON_PX: f32 = 0.5; // "converged" threshold for a resting pointer

// Particle field
pub const FIELD_MIN_COUNT: usize = 18;
pub const FIELD_MAX_COUNT: usize = 80;
pub const FIELD_PX_PER_PARTICLE: f32 = 24.0; // one particle per 24px of viewport width
pub const FIELD_SEED_DELAY_MS: u32 = 600;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const CLICK_PARTICLE_LIFETIME_MS: u32 = 6_000;

// Decorative palette shared by all shapes
pub const PALETTE: [&str; 5] = ["#F2A43B", "#E05263", "#4EA8DE", "#7BE0AD", "#B388EB"];

// Parallax background
pub const PARALLAX_DEPTH_PX: f32 = 18.0; // max translation at the viewport edge

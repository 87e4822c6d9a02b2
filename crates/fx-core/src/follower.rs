use glam::Vec2;

/// Cursor follower state: the raw pointer position and a ring position that
/// trails it by linear interpolation once per animation tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct Follower {
    pub pointer: Vec2,
    pub ring: Vec2,
    initialized: bool,
}

impl Follower {
    /// Record the raw pointer position. The first observed position also
    /// snaps the ring so it does not sweep in from the page origin.
    pub fn set_pointer(&mut self, p: Vec2) {
        self.pointer = p;
        if !self.initialized {
            self.ring = p;
            self.initialized = true;
        }
    }

    /// Advance the ring one tick toward the pointer and return its position.
    pub fn step(&mut self, alpha: f32) -> Vec2 {
        self.ring = self.ring.lerp(self.pointer, alpha);
        self.ring
    }

    /// Force the ring onto the pointer (reduced-motion path: no trailing).
    pub fn snap(&mut self) -> Vec2 {
        self.ring = self.pointer;
        self.ring
    }

    pub fn lag_px(&self) -> f32 {
        self.ring.distance(self.pointer)
    }
}

/// Class attribute for the ring in the current interaction state. The
/// pressed treatment (shrink) wins over hover (grow).
pub fn ring_class(hovered: bool, pressed: bool) -> &'static str {
    match (pressed, hovered) {
        (true, _) => "c-ring pressed",
        (false, true) => "c-ring hovered",
        (false, false) => "c-ring",
    }
}

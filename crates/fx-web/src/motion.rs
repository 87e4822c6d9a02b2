use crate::dom;
use web_sys as web;

/// OS-level interaction preferences, queried once at startup and handed to
/// every component.
#[derive(Clone, Copy, Debug, Default)]
pub struct MotionPrefs {
    pub reduced: bool,
    pub coarse_pointer: bool,
}

impl MotionPrefs {
    pub fn detect(window: &web::Window) -> Self {
        Self {
            reduced: media_matches(window, "(prefers-reduced-motion: reduce)"),
            coarse_pointer: media_matches(window, "(pointer: coarse)"),
        }
    }
}

fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Entrance-animated elements that must land in their resting state when the
/// user asks for reduced motion.
const ENTRANCE_SELECTOR: &str =
    ".hero-eyebrow, .hero-name, .hero-photo-wrap, .hero-right, .skills-row";

pub fn settle_entrance_elements(document: &web::Document) {
    for el in dom::query_all(document, ENTRANCE_SELECTOR) {
        dom::set_style(&el, "opacity", "1");
        dom::set_style(&el, "transform", "none");
        dom::set_style(&el, "animation", "none");
    }
}

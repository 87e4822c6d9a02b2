use crate::dom::{self, Listener};
use crate::motion::MotionPrefs;
use fx_core::constants::PARALLAX_DEPTH_PX;
use fx_core::parallax::parallax_offset;
use glam::Vec2;
use web_sys as web;

const PARALLAX_ID: &str = "parallax-bg";

/// Background layer that shifts slightly with the pointer. Reads the pointer
/// position on its own; no coupling to the cursor follower.
pub struct ParallaxHandle {
    _move: Listener,
}

pub fn init(
    window: &web::Window,
    document: &web::Document,
    prefs: MotionPrefs,
) -> Option<ParallaxHandle> {
    if prefs.reduced || prefs.coarse_pointer {
        return None;
    }
    let el = document.get_element_by_id(PARALLAX_ID)?;

    let mv = {
        let window = window.clone();
        Listener::new::<web::MouseEvent>(
            document.as_ref(),
            "mousemove",
            move |ev: web::MouseEvent| {
                let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                let off = parallax_offset(pointer, dom::viewport_size(&window), PARALLAX_DEPTH_PX);
                dom::set_style(
                    &el,
                    "transform",
                    &format!("translate3d({:.1}px, {:.1}px, 0)", off.x, off.y),
                );
            },
        )
    };

    log::debug!("[parallax] wired");
    Some(ParallaxHandle { _move: mv })
}

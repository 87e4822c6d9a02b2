use crate::dom::{self, Listener};
use crate::motion::MotionPrefs;
use std::rc::Rc;
use web_sys as web;

const TILE_SELECTOR: &str = ".skill-chip";
const ACTIVE_CLASS: &str = "is-active";

/// Tap toggle for skill tiles on touch devices, where the hover treatment is
/// otherwise unreachable. Hover-capable devices skip this entirely; the page
/// CSS `:hover` rules cover them.
pub struct TilesHandle {
    _listeners: Vec<Listener>,
}

pub fn init(document: &web::Document, prefs: MotionPrefs) -> Option<TilesHandle> {
    if !prefs.coarse_pointer {
        return None;
    }
    let tiles = dom::query_all(document, TILE_SELECTOR);
    if tiles.is_empty() {
        return None;
    }

    let tiles = Rc::new(tiles);
    let mut listeners = Vec::new();
    for i in 0..tiles.len() {
        let target: &web::EventTarget = tiles[i].as_ref();
        let tapped = tiles.clone();
        listeners.push(Listener::new::<web::MouseEvent>(target, "click", move |_| {
            let was_active = tapped[i].class_list().contains(ACTIVE_CLASS);
            // only one tile shows the treatment at a time
            for tile in tapped.iter() {
                let _ = tile.class_list().remove_1(ACTIVE_CLASS);
            }
            if !was_active {
                let _ = tapped[i].class_list().add_1(ACTIVE_CLASS);
            }
        }));
    }

    log::debug!("[tiles] wired, {} tiles", tiles.len());
    Some(TilesHandle {
        _listeners: listeners,
    })
}

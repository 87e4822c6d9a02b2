#![cfg(target_arch = "wasm32")]

mod counters;
mod cursor;
mod dom;
mod menu;
mod motion;
mod nav;
mod parallax;
mod particles;
mod schedule;
mod tiles;

use crate::motion::MotionPrefs;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Live component handles for the current page. Dropping them detaches every
/// listener, cancels the frame loops and removes the injected nodes.
struct Effects {
    _menu: Option<menu::MenuHandle>,
    _counters: Option<counters::CountersHandle>,
    _cursor: Option<cursor::CursorHandle>,
    _particles: Option<particles::FieldHandle>,
    _parallax: Option<parallax::ParallaxHandle>,
    _tiles: Option<tiles::TilesHandle>,
}

thread_local! {
    static EFFECTS: RefCell<Option<Effects>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let prefs = MotionPrefs::detect(&window);
    log::info!(
        "[motion] reduced={} coarse_pointer={}",
        prefs.reduced,
        prefs.coarse_pointer
    );

    if prefs.reduced {
        motion::settle_entrance_elements(&document);
    }

    // One-shot, nothing to keep alive.
    nav::mark_active_link(&window, &document);

    let effects = Effects {
        _menu: menu::init(&document),
        _counters: counters::init(&window, &document, prefs, Default::default()),
        _cursor: cursor::init(&document, prefs, Default::default()),
        _particles: particles::init(&window, &document, prefs, Default::default()),
        _parallax: parallax::init(&window, &document, prefs),
        _tiles: tiles::init(&document, prefs),
    };
    EFFECTS.with(|slot| *slot.borrow_mut() = Some(effects));
    Ok(())
}

/// Tear down every effect. For single-page navigation hosts that swap the
/// document content out from under the script.
#[wasm_bindgen]
pub fn stop() {
    EFFECTS.with(|slot| slot.borrow_mut().take());
    log::info!("fx-web stopped");
}

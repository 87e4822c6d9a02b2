use crate::dom::{self, Listener};
use fx_core::nav::trap_wrap;
use wasm_bindgen::JsCast;
use web_sys as web;

const TRIGGER_ID: &str = "hamburger";
const PANEL_ID: &str = "mobile-menu";
const CLOSE_ID: &str = "mobile-close";
const LINK_SELECTOR: &str = ".mobile-nav-link";
const FOCUSABLE_SELECTOR: &str = "a, button";

/// Mobile navigation panel: open/close with ARIA mirroring, scroll lock and
/// a focus trap while open. The open flag lives on the trigger's `open`
/// class, which is also what the page styles key off.
#[derive(Clone)]
struct Menu {
    document: web::Document,
    trigger: web::HtmlElement,
    panel: web::HtmlElement,
    close_btn: Option<web::HtmlElement>,
}

impl Menu {
    fn is_open(&self) -> bool {
        self.trigger.class_list().contains("open")
    }

    fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    fn open(&self) {
        self.panel.set_hidden(false);
        let _ = self.trigger.set_attribute("aria-expanded", "true");
        let _ = self.trigger.set_attribute("aria-label", "Close navigation");
        let _ = self.trigger.class_list().add_1("open");
        if let Some(body) = self.document.body() {
            let _ = body.style().set_property("overflow", "hidden");
        }
        // Move focus into the panel: the close control when present, else the
        // first focusable element.
        let target = self
            .close_btn
            .clone()
            .or_else(|| self.focusables().into_iter().next());
        if let Some(t) = target {
            let _ = t.focus();
        }
        log::info!("[menu] open");
    }

    fn close(&self) {
        self.panel.set_hidden(true);
        let _ = self.trigger.set_attribute("aria-expanded", "false");
        let _ = self.trigger.set_attribute("aria-label", "Open navigation");
        let _ = self.trigger.class_list().remove_1("open");
        if let Some(body) = self.document.body() {
            let _ = body.style().remove_property("overflow");
        }
        let _ = self.trigger.focus();
        log::info!("[menu] close");
    }

    fn focusables(&self) -> Vec<web::HtmlElement> {
        dom::query_all_in(&self.panel, FOCUSABLE_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .filter(|el| !el.hidden())
            .collect()
    }
}

pub struct MenuHandle {
    _listeners: Vec<Listener>,
}

pub fn init(document: &web::Document) -> Option<MenuHandle> {
    let trigger = document
        .get_element_by_id(TRIGGER_ID)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    let panel = document
        .get_element_by_id(PANEL_ID)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    let close_btn = document
        .get_element_by_id(CLOSE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());

    let menu = Menu {
        document: document.clone(),
        trigger,
        panel,
        close_btn,
    };

    let mut listeners = Vec::new();

    {
        let m = menu.clone();
        listeners.push(Listener::new::<web::MouseEvent>(
            menu.trigger.as_ref(),
            "click",
            move |_| m.toggle(),
        ));
    }

    if let Some(btn) = &menu.close_btn {
        let m = menu.clone();
        listeners.push(Listener::new::<web::MouseEvent>(
            btn.as_ref(),
            "click",
            move |_| m.close(),
        ));
    }

    // Activating any in-panel link closes the panel.
    for link in dom::query_all_in(&menu.panel, LINK_SELECTOR) {
        let m = menu.clone();
        listeners.push(Listener::new::<web::MouseEvent>(
            link.as_ref(),
            "click",
            move |_| m.close(),
        ));
    }

    {
        let m = menu.clone();
        listeners.push(Listener::new::<web::KeyboardEvent>(
            document.as_ref(),
            "keydown",
            move |ev: web::KeyboardEvent| {
                if ev.key() == "Escape" && m.is_open() {
                    m.close();
                }
            },
        ));
    }

    // Focus trap: Tab cycles first<->last among the panel's focusables.
    {
        let m = menu.clone();
        listeners.push(Listener::new::<web::KeyboardEvent>(
            menu.panel.as_ref(),
            "keydown",
            move |ev: web::KeyboardEvent| {
                if ev.key() != "Tab" {
                    return;
                }
                let els = m.focusables();
                let active = m.document.active_element().and_then(|a| {
                    els.iter().position(|e| {
                        let el: &web::Element = e.as_ref();
                        *el == a
                    })
                });
                if let Some(tgt) = trap_wrap(active, els.len(), ev.shift_key()) {
                    ev.prevent_default();
                    let _ = els[tgt].focus();
                }
            },
        ));
    }

    log::debug!("[menu] wired");
    Some(MenuHandle {
        _listeners: listeners,
    })
}

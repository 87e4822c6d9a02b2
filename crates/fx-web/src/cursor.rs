use crate::dom::{self, Listener};
use crate::motion::MotionPrefs;
use crate::schedule::FrameLoop;
use fx_core::constants::RING_SMOOTHING;
use fx_core::follower::{ring_class, Follower};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

const STYLE_ID: &str = "fx-cursor-style";
const HOVER_SELECTOR: &str = "a, button, .skill-chip, .name-letter";

// The component brings its own styles so the page CSS does not have to know
// about the overlay markers.
const CURSOR_CSS: &str = r#"
*, a, button { cursor: none !important; }
.c-ring {
  position: fixed;
  width: 34px;
  height: 34px;
  border: 2px solid rgba(242, 164, 59, 0.55);
  border-radius: 50%;
  pointer-events: none;
  z-index: 9999;
  transform: translate(-50%, -50%);
  transition: width .25s ease, height .25s ease,
              border-color .25s ease, background .25s ease;
  will-change: left, top;
}
.c-dot {
  position: fixed;
  width: 5px;
  height: 5px;
  background: var(--gold, #F2A43B);
  border-radius: 50%;
  pointer-events: none;
  z-index: 9999;
  transform: translate(-50%, -50%);
  will-change: left, top;
}
.c-ring.hovered {
  width: 52px;
  height: 52px;
  border-color: var(--gold, #F2A43B);
  background: rgba(242, 164, 59, 0.07);
}
.c-ring.pressed {
  width: 24px;
  height: 24px;
  background: rgba(242, 164, 59, 0.2);
}
"#;

#[derive(Clone, Debug)]
pub struct CursorOptions {
    pub smoothing: f32,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            smoothing: RING_SMOOTHING,
        }
    }
}

/// Custom cursor overlay: a dot pinned to the pointer and a ring that trails
/// it. Dropping the handle stops the frame loop, detaches every listener and
/// removes the injected nodes.
pub struct CursorHandle {
    _listeners: Vec<Listener>,
    _frame: Option<FrameLoop>,
    style: Option<web::Element>,
    ring: web::Element,
    dot: web::Element,
}

impl Drop for CursorHandle {
    fn drop(&mut self) {
        self.ring.remove();
        self.dot.remove();
        if let Some(style) = &self.style {
            style.remove();
        }
    }
}

pub fn init(
    document: &web::Document,
    prefs: MotionPrefs,
    opts: CursorOptions,
) -> Option<CursorHandle> {
    if prefs.coarse_pointer {
        log::debug!("[cursor] coarse pointer, disabled");
        return None;
    }
    let body = document.body()?;

    let style = dom::inject_style(document, STYLE_ID, CURSOR_CSS);

    let ring = document.create_element("div").ok()?;
    ring.set_class_name("c-ring");
    let _ = ring.set_attribute("aria-hidden", "true");
    let dot = document.create_element("div").ok()?;
    dot.set_class_name("c-dot");
    let _ = dot.set_attribute("aria-hidden", "true");
    body.append_child(&ring).ok()?;
    body.append_child(&dot).ok()?;

    let follower = Rc::new(RefCell::new(Follower::default()));
    let hovered = Rc::new(Cell::new(false));
    let pressed = Rc::new(Cell::new(false));
    let mut listeners = Vec::new();

    // Dot snaps to the pointer on every move; without the lag loop (reduced
    // motion) the ring snaps along with it.
    {
        let follower = follower.clone();
        let dot = dot.clone();
        let ring = ring.clone();
        let lag = !prefs.reduced;
        listeners.push(Listener::new::<web::MouseEvent>(
            document.as_ref(),
            "mousemove",
            move |ev: web::MouseEvent| {
                let p = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                let mut f = follower.borrow_mut();
                f.set_pointer(p);
                place(&dot, p);
                if !lag {
                    let r = f.snap();
                    place(&ring, r);
                }
            },
        ));
    }

    let frame = if prefs.reduced {
        None
    } else {
        let follower = follower.clone();
        let ring = ring.clone();
        let alpha = opts.smoothing;
        Some(FrameLoop::start(move || {
            let r = follower.borrow_mut().step(alpha);
            place(&ring, r);
            true
        }))
    };

    // Hover growth over interactive elements; mouseenter/leave do not bubble,
    // so each element gets its own pair.
    for el in dom::query_all(document, HOVER_SELECTOR) {
        let target: &web::EventTarget = el.as_ref();
        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let ring = ring.clone();
            let hovered = hovered.clone();
            let pressed = pressed.clone();
            listeners.push(Listener::new::<web::MouseEvent>(target, event, move |_| {
                hovered.set(entering);
                ring.set_class_name(ring_class(hovered.get(), pressed.get()));
            }));
        }
    }

    for (event, down) in [("mousedown", true), ("mouseup", false)] {
        let ring = ring.clone();
        let hovered = hovered.clone();
        let pressed = pressed.clone();
        listeners.push(Listener::new::<web::MouseEvent>(
            document.as_ref(),
            event,
            move |_| {
                pressed.set(down);
                ring.set_class_name(ring_class(hovered.get(), pressed.get()));
            },
        ));
    }

    // Fade both markers out when the pointer leaves the viewport.
    for (event, opacity) in [("mouseleave", "0"), ("mouseenter", "1")] {
        let ring = ring.clone();
        let dot = dot.clone();
        listeners.push(Listener::new::<web::MouseEvent>(
            document.as_ref(),
            event,
            move |_| {
                dom::set_style(&ring, "opacity", opacity);
                dom::set_style(&dot, "opacity", opacity);
            },
        ));
    }

    log::debug!("[cursor] wired, smoothing={}", opts.smoothing);
    Some(CursorHandle {
        _listeners: listeners,
        _frame: frame,
        style,
        ring,
        dot,
    })
}

fn place(el: &web::Element, p: Vec2) {
    dom::set_style(el, "left", &format!("{:.1}px", p.x));
    dom::set_style(el, "top", &format!("{:.1}px", p.y));
}

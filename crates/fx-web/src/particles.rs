use crate::dom::{self, Listener};
use crate::motion::MotionPrefs;
use fx_core::constants::{CLICK_PARTICLE_LIFETIME_MS, FIELD_SEED_DELAY_MS, RESIZE_DEBOUNCE_MS};
use fx_core::particles::{plan_field, FieldOptions, ParticleSpec};
use glam::Vec2;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const CONTAINER_ID: &str = "particle-field";
const STYLE_ID: &str = "fx-particle-style";

// Fall keyframes travel the full viewport height plus the configured drift
// and spin; background particles repeat forever, click particles run once.
const PARTICLE_CSS: &str = r#"
#particle-field {
  position: fixed;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  z-index: 0;
}
#particle-field > div {
  position: absolute;
  animation: fx-fall var(--fall-duration) linear infinite;
  will-change: transform;
}
#particle-field > .fx-click {
  animation-iteration-count: 1;
  animation-timing-function: ease-out;
  animation-fill-mode: forwards;
}
@keyframes fx-fall {
  to { transform: translate(var(--drift), 110vh) rotate(var(--spin)); }
}
"#;

struct FieldInner {
    window: web::Window,
    document: web::Document,
    container: web::Element,
    opts: FieldOptions,
    alive: Cell<bool>,
    debounce: RefCell<Option<Timeout>>,
}

impl FieldInner {
    fn viewport(&self) -> Vec2 {
        dom::viewport_size(&self.window)
    }

    /// Full-field replacement: drop every background particle, then plan and
    /// append a fresh field for the current viewport.
    fn reseed(&self) {
        self.container.set_inner_html("");
        let vw = self.viewport();
        for spec in plan_field(&mut rand::thread_rng(), vw.x, &self.opts) {
            self.append(&spec, "fx-particle");
        }
    }

    fn append(&self, spec: &ParticleSpec, class: &str) -> Option<web::Element> {
        let el = self.document.create_element("div").ok()?;
        el.set_class_name(&format!("{} {}", class, spec.shape.class_name()));
        let _ = el.set_attribute("style", &spec.style());
        let _ = el.set_attribute("aria-hidden", "true");
        self.container.append_child(&el).ok()?;
        Some(el)
    }

    fn spawn_click(&self, x: f32, y: f32) {
        let spec = ParticleSpec::at_click(
            &mut rand::thread_rng(),
            &self.opts,
            Vec2::new(x, y),
            self.viewport(),
        );
        if let Some(el) = self.append(&spec, "fx-click") {
            // transient particles clean themselves up after a fixed lifetime
            Timeout::new(CLICK_PARTICLE_LIFETIME_MS, move || el.remove()).forget();
        }
    }
}

/// Decorative background field plus click-spawned one-shot particles.
pub struct FieldHandle {
    inner: Rc<FieldInner>,
    style: Option<web::Element>,
    _resize: Listener,
    _click: Listener,
}

impl Drop for FieldHandle {
    fn drop(&mut self) {
        self.inner.alive.set(false);
        self.inner.container.set_inner_html("");
        if let Some(style) = &self.style {
            style.remove();
        }
    }
}

pub fn init(
    window: &web::Window,
    document: &web::Document,
    prefs: MotionPrefs,
    opts: FieldOptions,
) -> Option<FieldHandle> {
    if prefs.reduced {
        log::debug!("[particles] reduced motion, disabled");
        return None;
    }
    let container = document.get_element_by_id(CONTAINER_ID)?;
    let style = dom::inject_style(document, STYLE_ID, PARTICLE_CSS);

    let inner = Rc::new(FieldInner {
        window: window.clone(),
        document: document.clone(),
        container,
        opts,
        alive: Cell::new(true),
        debounce: RefCell::new(None),
    });

    // Initial seed is deferred so the page's entry animations land first.
    {
        let inner = inner.clone();
        spawn_local(async move {
            TimeoutFuture::new(FIELD_SEED_DELAY_MS).await;
            if inner.alive.get() {
                inner.reseed();
            }
        });
    }

    // Resize reseeds the whole field, coalesced through a debounce timer.
    let resize = {
        let inner = inner.clone();
        Listener::new::<web::Event>(window.as_ref(), "resize", move |_| {
            let pending = inner.clone();
            let timer = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                if pending.alive.get() {
                    pending.reseed();
                }
            });
            // replacing the previous timeout drops and thereby cancels it
            *inner.debounce.borrow_mut() = Some(timer);
        })
    };

    let click = {
        let inner = inner.clone();
        Listener::new::<web::MouseEvent>(document.as_ref(), "click", move |ev: web::MouseEvent| {
            inner.spawn_click(ev.client_x() as f32, ev.client_y() as f32);
        })
    };

    log::debug!("[particles] wired");
    Some(FieldHandle {
        inner,
        style,
        _resize: resize,
        _click: click,
    })
}

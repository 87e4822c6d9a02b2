use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A self-rescheduling requestAnimationFrame task.
///
/// The callback returns whether it wants another frame; a counter loop stops
/// itself once the animation completes, the cursor loop runs until the handle
/// is dropped. Once the loop ends the closure cycle stays allocated for the
/// rest of the page session, same as a forgotten closure would.
pub struct FrameLoop {
    cancelled: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(mut frame: impl FnMut() -> bool + 'static) -> Self {
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if flag.get() || !frame() {
                return;
            }
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }) as Box<dyn FnMut()>));
        if let Some(w) = web::window() {
            let _ =
                w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
        Self { cancelled }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

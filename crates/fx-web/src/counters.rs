use crate::dom::{self, Listener};
use crate::motion::MotionPrefs;
use crate::schedule::FrameLoop;
use fx_core::counter::{parse_target, start_delay_ms, Counter, CounterOptions};
use gloo_timers::callback::Timeout;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const COUNTER_SELECTOR: &str = ".stat-num";
const TARGET_ATTR: &str = "data-target";

pub struct CountersHandle {
    _load_listener: Option<Listener>,
    // pending stagger timers and running loops; dropping the handle cancels
    // whatever has not finished yet
    _pending: Rc<RefCell<Vec<Timeout>>>,
    _loops: Rc<RefCell<Vec<FrameLoop>>>,
}

pub fn init(
    window: &web::Window,
    document: &web::Document,
    prefs: MotionPrefs,
    opts: CounterOptions,
) -> Option<CountersHandle> {
    let els = dom::query_all(document, COUNTER_SELECTOR);
    if els.is_empty() {
        return None;
    }

    let mut counters = Vec::new();
    for el in els {
        match parse_target(el.get_attribute(TARGET_ATTR).as_deref()) {
            Ok(target) => counters.push((el, Counter::new(target, &opts))),
            Err(e) => log::debug!("[counters] skipping element: {e}"),
        }
    }
    if counters.is_empty() {
        return None;
    }

    let pending = Rc::new(RefCell::new(Vec::new()));
    let loops = Rc::new(RefCell::new(Vec::new()));

    if prefs.reduced {
        // Reduced motion: no animation, land on the target right away.
        for (el, counter) in &counters {
            el.set_text_content(Some(&counter.target.to_string()));
        }
        log::debug!("[counters] reduced motion, {} set directly", counters.len());
        return Some(CountersHandle {
            _load_listener: None,
            _pending: pending,
            _loops: loops,
        });
    }

    let start = {
        let pending = pending.clone();
        let loops = loops.clone();
        move || {
            for (i, (el, counter)) in counters.iter().cloned().enumerate() {
                let loops_slot = loops.clone();
                let timer = Timeout::new(start_delay_ms(i, &opts), move || {
                    loops_slot.borrow_mut().push(run(el, counter));
                });
                pending.borrow_mut().push(timer);
            }
        }
    };

    // Counters begin after the page has loaded; wasm startup may already be
    // past that point.
    let load_listener = if document.ready_state() == web::DocumentReadyState::Complete {
        start();
        None
    } else {
        let start = RefCell::new(Some(start));
        Some(Listener::new::<web::Event>(
            window.as_ref(),
            "load",
            move |_| {
                if let Some(s) = start.borrow_mut().take() {
                    s();
                }
            },
        ))
    };

    log::debug!("[counters] wired");
    Some(CountersHandle {
        _load_listener: load_listener,
        _pending: pending,
        _loops: loops,
    })
}

fn run(el: web::Element, counter: Counter) -> FrameLoop {
    let started = Instant::now();
    FrameLoop::start(move || {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        el.set_text_content(Some(&counter.value_at(elapsed_ms).to_string()));
        !counter.done_at(elapsed_ms)
    })
}

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folio_core::counter::{CounterAnimation, CounterBoard, parse_target};
use folio_core::schedule::TaskOwner;
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Page;
use crate::dom::{self, JsResultExt, log_err};
use crate::timers::{self, Tasks};

struct Counter {
    element: Element,
    target: i64,
}

/// `.stat-number[data-count]` elements count up once, on first sight.
pub fn setup(page: &Page) {
    let counters: Vec<Counter> = dom::query_all(&page.document, ".stat-number")
        .into_iter()
        .filter_map(|element| {
            let raw = element.get_attribute("data-count")?;
            match parse_target(&raw) {
                Ok(target) => Some(Counter { element, target }),
                Err(e) => {
                    warn!("[folio][counter] skipping element: {e}");
                    None
                }
            }
        })
        .collect();
    if counters.is_empty() {
        debug!("[folio][counter] no counters on page");
        return;
    }

    let board = Rc::new(RefCell::new(CounterBoard::new(page.config.counter.clone())));
    let counters = Rc::new(counters);
    let tasks = page.tasks.clone();

    let callback = {
        let counters = Rc::clone(&counters);
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let element = entry.target();
                let Some(index) = counters.iter().position(|c| c.element == element) else {
                    continue;
                };
                let counter = &counters[index];
                let started = board.borrow_mut().observe(
                    index,
                    entry.intersection_ratio(),
                    counter.target,
                );
                if let Some(animation) = started {
                    observer.unobserve(&element);
                    let frame = board.borrow().config().frame();
                    animate(&tasks, index, counter.element.clone(), animation, frame);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(page.config.counter.visibility_threshold));
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .context("IntersectionObserver")
    {
        Ok(observer) => observer,
        Err(e) => {
            warn!("[folio][counter] {e}");
            return;
        }
    };
    callback.forget();

    for counter in counters.iter() {
        observer.observe(&counter.element);
    }
}

fn animate(
    tasks: &Tasks,
    index: usize,
    element: Element,
    animation: CounterAnimation,
    period: Duration,
) {
    let animation = RefCell::new(animation);
    let registry = Rc::clone(tasks);
    log_err(timers::schedule_every(tasks, TaskOwner::Counter(index), period, move || {
        let Some(frame) = animation.borrow_mut().tick() else {
            return;
        };
        element.set_text_content(Some(&frame.value.to_string()));
        if frame.done {
            registry.borrow_mut().cancel(&TaskOwner::Counter(index));
        }
    }));
}

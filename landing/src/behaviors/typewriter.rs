use std::cell::RefCell;
use std::rc::Rc;

use folio_core::schedule::TaskOwner;
use folio_core::typewriter::Typewriter;
use tracing::{debug, warn};
use web_sys::Element;

use super::Page;
use crate::dom::{self, log_err};
use crate::timers::{self, Tasks};

/// Typewriter loop in `#typewriter`, forever.
pub fn setup(page: &Page) {
    let Some(target) = dom::by_id(&page.document, "typewriter") else {
        debug!("[folio][typewriter] no #typewriter element");
        return;
    };
    let typewriter = match Typewriter::new(&page.config.typewriter) {
        Ok(tw) => tw,
        Err(e) => {
            warn!("[folio][typewriter] {e}");
            return;
        }
    };

    let start = typewriter.start_delay();
    let state = Rc::new(RefCell::new(typewriter));
    let tasks = page.tasks.clone();
    log_err(timers::schedule_once(&page.tasks, TaskOwner::Typewriter, start, move || {
        step(target, state, tasks)
    }));
}

fn step(target: Element, state: Rc<RefCell<Typewriter>>, tasks: Tasks) {
    let frame = state.borrow_mut().step();
    target.set_text_content(Some(&frame.text));

    let next_tasks = tasks.clone();
    log_err(timers::schedule_once(&tasks, TaskOwner::Typewriter, frame.next_delay, move || {
        step(target, state, next_tasks)
    }));
}

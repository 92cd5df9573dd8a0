//! Leptos timer handles plugged into the core task registry.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folio_core::schedule::{Cancel, TaskOwner, TaskRegistry};
use leptos::prelude::{IntervalHandle, TimeoutHandle, set_interval_with_handle, set_timeout_with_handle};

use crate::dom::{DomError, JsResultExt};

#[derive(Clone, Copy)]
pub enum Timer {
    Timeout(TimeoutHandle),
    Interval(IntervalHandle),
}

impl Cancel for Timer {
    fn cancel(self) {
        match self {
            Timer::Timeout(handle) => handle.clear(),
            Timer::Interval(handle) => handle.clear(),
        }
    }
}

pub type Tasks = Rc<RefCell<TaskRegistry<TaskOwner, Timer>>>;

pub fn new_tasks() -> Tasks {
    Rc::new(RefCell::new(TaskRegistry::new()))
}

/// Run `f` once after `delay`, replacing any pending task of `owner`.
pub fn schedule_once<F>(tasks: &Tasks, owner: TaskOwner, delay: Duration, f: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    let registry = Rc::clone(tasks);
    let handle = set_timeout_with_handle(
        move || {
            registry.borrow_mut().complete(&owner);
            f();
        },
        delay,
    )
    .context("setTimeout")?;
    tasks.borrow_mut().schedule(owner, Timer::Timeout(handle));
    Ok(())
}

/// Run `f` every `period` until `owner` is cancelled.
pub fn schedule_every<F>(tasks: &Tasks, owner: TaskOwner, period: Duration, f: F) -> Result<(), DomError>
where
    F: Fn() + 'static,
{
    let handle = set_interval_with_handle(f, period).context("setInterval")?;
    tasks.borrow_mut().schedule(owner, Timer::Interval(handle));
    Ok(())
}

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::scroll::ScrollTracker;
use tracing::debug;
use web_sys::Event;

use super::Page;
use crate::dom::{self, log_err};

/// Navbar `scrolled` marker and the back-to-top control.
pub fn setup(page: &Page) {
    let navbar = dom::query(&page.document, ".navbar");
    let back_to_top = dom::by_id(&page.document, "backToTop");
    if navbar.is_none() && back_to_top.is_none() {
        debug!("[folio][scroll] no navbar or back-to-top control");
        return;
    }

    let tracker = Rc::new(RefCell::new(ScrollTracker::new(
        page.config.back_to_top_threshold_px,
    )));

    {
        let window = page.window.clone();
        let back_to_top = back_to_top.clone();
        log_err(dom::listen(&page.window, "scroll", move |_: Event| {
            let chrome = tracker.borrow_mut().update(dom::scroll_offset(&window));
            if let Some(navbar) = &navbar {
                log_err(dom::set_class(navbar, "scrolled", chrome.navbar_scrolled));
            }
            if let Some(button) = &back_to_top {
                log_err(dom::set_class(button, "visible", chrome.back_to_top_visible));
            }
        }));
    }

    if let Some(button) = back_to_top {
        let window = page.window.clone();
        log_err(dom::listen(&button, "click", move |_: Event| {
            dom::smooth_scroll_to(&window, 0.0);
        }));
    }
}

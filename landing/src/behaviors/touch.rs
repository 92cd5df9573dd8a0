use std::cell::RefCell;

use folio_core::touch::{DoubleTapGuard, card_lift};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Event, Window};

use super::Page;
use crate::dom::{self, log_err};

fn is_touch_device(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
        || window.navigator().max_touch_points() > 0
}

/// Card hover lift, the `touch-device` body marker and double-tap guard.
pub fn setup(page: &Page) {
    let breakpoint = page.config.breakpoint_px;
    for card in dom::query_all(&page.document, ".project-card") {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let window = page.window.clone();
            let target = card.clone();
            log_err(dom::listen(&card, event, move |_: Event| {
                if let Some(transform) = card_lift(dom::viewport_width(&window), breakpoint, hovered) {
                    log_err(dom::set_style(&target, "transform", Some(transform)));
                }
            }));
        }
    }

    if is_touch_device(&page.window) {
        if let Some(body) = page.document.body() {
            log_err(dom::set_class(&body, "touch-device", true));
        }
    }

    let guard = RefCell::new(DoubleTapGuard::new(page.config.double_tap_window_ms));
    log_err(dom::listen(&page.document, "touchend", move |event: Event| {
        if guard.borrow_mut().touch_end(js_sys::Date::now()) {
            event.prevent_default();
        }
    }));
}

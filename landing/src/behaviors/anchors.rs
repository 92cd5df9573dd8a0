use folio_core::menu::MenuEvent;
use folio_core::scroll::{anchor_scroll_top, is_placeholder_anchor};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use super::{Page, SharedMenu};
use crate::dom::{self, log_err};

/// Smooth in-page anchor scrolling that clears the fixed header.
pub fn setup(page: &Page, menu: Option<SharedMenu>) {
    for anchor in dom::query_all(&page.document, "a[href^=\"#\"]") {
        let page = page.clone();
        let menu = menu.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        if is_placeholder_anchor(&href) {
            continue;
        }
        log_err(dom::listen(&anchor, "click", move |event: Event| {
            // Resolved at click time; sections may be rendered late.
            let Some(target) = dom::query(&page.document, &href) else {
                return;
            };
            event.prevent_default();

            let top = target
                .dyn_ref::<HtmlElement>()
                .map(|el| f64::from(el.offset_top()))
                .unwrap_or_default();
            dom::smooth_scroll_to(&page.window, anchor_scroll_top(top, page.config.header_offset_px));

            if let Some(menu) = &menu {
                let viewport_width = page.viewport_width();
                menu.borrow_mut()
                    .handle(MenuEvent::AnchorNavigated { viewport_width });
            }
        }));
    }
}

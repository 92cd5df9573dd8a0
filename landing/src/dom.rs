//! Thin helpers over web-sys: guarded lookups, class markers, listeners.
//!
//! Lookups return `Option`; a missing element is how the page says "this
//! feature is not here", so callers skip the feature instead of failing.

use thiserror::Error;
use tracing::warn;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window,
};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("window has no `document`")]
    NoDocument,
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl DomError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        DomError::Js { context, message }
    }
}

/// Attach a context label to a raw web-sys result.
pub trait JsResultExt<T> {
    fn context(self, context: &'static str) -> Result<T, DomError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn context(self, context: &'static str) -> Result<T, DomError> {
        self.map_err(|e| DomError::js(context, e))
    }
}

/// Log-and-continue for fire-and-forget DOM writes.
pub fn log_err(result: Result<(), DomError>) {
    if let Err(e) = result {
        warn!("[folio][dom] {e}");
    }
}

pub fn window_and_document() -> Result<(Window, Document), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    Ok((window, document))
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            warn!("[folio][dom] bad selector {selector}: {:?}", e);
            None
        }
    }
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            warn!("[folio][dom] bad selector {selector}: {:?}", e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), DomError> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .context("classList.toggle")
}

/// Set or clear one inline style property. `None` removes it so the
/// stylesheet value applies again.
pub fn set_style(element: &Element, property: &str, value: Option<&str>) -> Result<(), DomError> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = html.style();
    match value {
        Some(value) => style.set_property(property, value).context("style.setProperty"),
        None => style
            .remove_property(property)
            .map(|_| ())
            .context("style.removeProperty"),
    }
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Register `handler` for `event` on `target` for the page lifetime.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .context("addEventListener")?;
    closure.forget(); // Keep the closure alive
    Ok(())
}

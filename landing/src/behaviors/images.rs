use js_sys::{Object, Reflect};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlImageElement, Window};

use super::Page;
use crate::dom;

/// `'loading' in HTMLImageElement.prototype`
fn supports_native_lazy_loading(window: &Window) -> bool {
    Reflect::get(window, &JsValue::from_str("HTMLImageElement"))
        .and_then(|ctor| Reflect::get(ctor.unchecked_ref::<Object>(), &JsValue::from_str("prototype")))
        .and_then(|proto| Reflect::has(proto.unchecked_ref::<Object>(), &JsValue::from_str("loading")))
        .unwrap_or(false)
}

/// Promote `data-src` to `src` on lazy images when the browser defers them itself.
pub fn setup(page: &Page) {
    if !supports_native_lazy_loading(&page.window) {
        debug!("[folio][images] no native lazy loading, leaving data-src alone");
        return;
    }
    for image in dom::query_all(&page.document, "img[loading=\"lazy\"]") {
        let Some(src) = image.get_attribute("data-src") else {
            continue;
        };
        if let Ok(image) = image.dyn_into::<HtmlImageElement>() {
            image.set_src(&src);
        }
    }
}

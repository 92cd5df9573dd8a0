use std::cell::RefCell;
use std::rc::Rc;

use folio_core::contact::{ContactForm, FormView};
use folio_core::schedule::TaskOwner;
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement};

use super::Page;
use crate::dom::{self, log_err};
use crate::timers;

fn show(element: &Element, visible: bool) {
    log_err(dom::set_style(element, "display", (!visible).then_some("none")));
}

fn apply(form: &HtmlFormElement, success: Option<&Element>, view: FormView) {
    if view.clear_fields {
        form.reset();
    }
    show(form, view.form_visible);
    if let Some(success) = success {
        show(success, view.success_visible);
    }
}

/// `#contactForm` never submits; it flips to `#formSuccess` and back.
pub fn setup(page: &Page) {
    let Some(form) = dom::by_id(&page.document, "contactForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        debug!("[folio][contact] no #contactForm");
        return;
    };
    let success = dom::by_id(&page.document, "formSuccess");
    let state = Rc::new(RefCell::new(ContactForm::default()));

    let page = page.clone();
    let target = form.clone();
    log_err(dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let view = state.borrow_mut().submit();
        info!("[folio][contact] form submitted (mock, nothing sent)");
        apply(&target, success.as_ref(), view);

        let state = Rc::clone(&state);
        let form = target.clone();
        let success = success.clone();
        log_err(timers::schedule_once(
            &page.tasks,
            TaskOwner::ContactForm,
            page.config.form_reset(),
            move || {
                let view = state.borrow_mut().reset();
                apply(&form, success.as_ref(), view);
            },
        ));
    }));
}

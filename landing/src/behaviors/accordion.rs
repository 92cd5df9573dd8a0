use std::cell::RefCell;
use std::rc::Rc;

use folio_core::accordion::{Accordion, ICON_CLOSED, ICON_OPEN};
use tracing::debug;
use web_sys::Event;

use super::Page;
use crate::dom::{self, log_err};

/// Each `.faq-question` toggles the `.faq-answer` right after it.
pub fn setup(page: &Page) {
    let questions = dom::query_all(&page.document, ".faq-question");
    if questions.is_empty() {
        debug!("[folio][faq] no questions on page");
        return;
    }
    let faq = Rc::new(RefCell::new(Accordion::new(questions.len())));

    for (index, question) in questions.into_iter().enumerate() {
        let Some(answer) = question
            .next_element_sibling()
            .filter(|el| el.class_list().contains("faq-answer"))
        else {
            continue;
        };
        let faq = Rc::clone(&faq);
        let icon = question.query_selector("i").ok().flatten();
        log_err(dom::listen(&question, "click", move |_: Event| {
            let Some(item) = faq.borrow_mut().toggle(index) else {
                return;
            };
            log_err(dom::set_class(&answer, "active", item.open));
            log_err(dom::set_style(
                &answer,
                "display",
                Some(if item.open { "block" } else { "none" }),
            ));
            if let Some(icon) = &icon {
                let stale = if item.open { ICON_CLOSED } else { ICON_OPEN };
                log_err(dom::set_class(icon, stale, false));
                log_err(dom::set_class(icon, item.icon, true));
            }
        }));
    }
}

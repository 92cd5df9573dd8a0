use std::cell::RefCell;
use std::rc::Rc;

use folio_core::filter::{FilterBar, FilterPlan};
use folio_core::schedule::TaskOwner;
use tracing::debug;
use web_sys::{Element, Event};

use super::Page;
use crate::dom::{self, log_err};
use crate::timers;

const ACTIVE: &str = "active";
/// Fade/slide-out class; the stylesheet animates it.
const LEAVING: &str = "is-hidden";

/// `.filter-btn[data-filter]` controls over `.project-card[data-category]`.
pub fn setup(page: &Page) {
    let buttons = dom::query_all(&page.document, ".filter-btn");
    let cards = dom::query_all(&page.document, ".project-card");
    if buttons.is_empty() || cards.is_empty() {
        debug!("[folio][filter] no filter controls or project cards");
        return;
    }

    let values = buttons
        .iter()
        .map(|b| b.get_attribute("data-filter").unwrap_or_default())
        .collect();
    let bar = Rc::new(RefCell::new(FilterBar::new(values)));
    let buttons = Rc::new(buttons);
    let cards = Rc::new(cards);

    for (index, button) in buttons.iter().enumerate() {
        let page = page.clone();
        let bar = Rc::clone(&bar);
        let buttons = Rc::clone(&buttons);
        let cards = Rc::clone(&cards);
        log_err(dom::listen(button, "click", move |_: Event| {
            let categories: Vec<Option<String>> = cards
                .iter()
                .map(|c| c.get_attribute("data-category"))
                .collect();
            let categories: Vec<Option<&str>> = categories.iter().map(|c| c.as_deref()).collect();
            let Some(plan) = bar.borrow_mut().select(index, &categories) else {
                return;
            };
            apply(&page, &buttons, &cards, plan);
        }));
    }
}

fn apply(page: &Page, buttons: &[Element], cards: &Rc<Vec<Element>>, plan: FilterPlan) {
    for (i, button) in buttons.iter().enumerate() {
        log_err(dom::set_class(button, ACTIVE, i == plan.active));
    }

    for i in plan.shown() {
        let card = &cards[i];
        log_err(dom::set_style(card, "display", None));
        log_err(dom::set_class(card, LEAVING, false));
    }
    for i in plan.hidden() {
        log_err(dom::set_class(&cards[i], LEAVING, true));
    }

    // Leave the layout once the fade is over. A newer selection replaces
    // this task, so cards it shows again are never collapsed late.
    let hidden: Vec<usize> = plan.hidden().collect();
    let cards = Rc::clone(cards);
    log_err(timers::schedule_once(
        &page.tasks,
        TaskOwner::Filter,
        page.config.filter_transition(),
        move || {
            for i in hidden {
                log_err(dom::set_style(&cards[i], "display", Some("none")));
            }
        },
    ));
}

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::theme::{DARK_MARKER, Theme, ThemeController};
use tracing::debug;
use web_sys::{Element, Event, HtmlElement};

use super::Page;
use crate::dom::{self, log_err};
use crate::storage::LocalStore;

fn apply(body: Option<&HtmlElement>, toggle: Option<&Element>, theme: Theme) {
    if let Some(body) = body {
        log_err(dom::set_class(body, DARK_MARKER, theme.is_dark()));
    }
    if let Some(toggle) = toggle {
        toggle.set_inner_html(&format!("<i class=\"fas {}\"></i>", theme.toggle_icon()));
    }
}

/// Apply the stored theme, then let `#themeToggle` flip and persist it.
/// Without a stored value the markup's own body class is left as it is.
pub fn setup(page: &Page) {
    let body = page.document.body();
    let page_theme = match &body {
        Some(body) if body.class_list().contains(DARK_MARKER) => Theme::Dark,
        _ => Theme::Light,
    };
    let controller = ThemeController::load(
        page.config.theme_storage_key.clone(),
        LocalStore::new(&page.window),
        page_theme,
    );
    let toggle = dom::by_id(&page.document, "themeToggle");
    debug!("[folio][theme] starting with {}", controller.current());
    if controller.from_store() {
        apply(body.as_ref(), toggle.as_ref(), controller.current());
    }

    let Some(toggle) = toggle else {
        debug!("[folio][theme] no #themeToggle, switching disabled");
        return;
    };

    let controller = Rc::new(RefCell::new(controller));
    let target = toggle.clone();
    log_err(dom::listen(&toggle, "click", move |_: Event| {
        let theme = controller.borrow_mut().toggle();
        apply(body.as_ref(), Some(&target), theme);
    }));
}

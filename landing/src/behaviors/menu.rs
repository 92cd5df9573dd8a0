//! Mobile menu: DOM listeners feeding the core state machine.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::menu::{MenuController, MenuEvent, MenuSurface, MenuView};
use folio_core::schedule::TaskOwner;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, Node};

use super::Page;
use crate::dom::{self, log_err};
use crate::timers;

pub type SharedMenu = Rc<RefCell<MenuController<DomMenuSurface>>>;

const ACTIVE: &str = "active";

/// Applies menu views to the hamburger, the panel and the body scroll lock.
pub struct DomMenuSurface {
    toggle: Element,
    panel: Element,
    body: Option<HtmlElement>,
}

impl DomMenuSurface {
    pub fn new(toggle: Element, panel: Element, body: Option<HtmlElement>) -> Self {
        Self {
            toggle,
            panel,
            body,
        }
    }

    /// True when `target` sits inside the toggle control or the panel.
    fn contains(&self, target: Option<&Node>) -> bool {
        self.toggle.contains(target) || self.panel.contains(target)
    }
}

impl MenuSurface for DomMenuSurface {
    fn render(&mut self, view: MenuView) {
        log_err(dom::set_class(&self.toggle, ACTIVE, view.toggle_active));
        log_err(dom::set_class(&self.panel, ACTIVE, view.panel_active));
        if let Some(body) = &self.body {
            let overflow = view.scroll_locked.then_some("hidden");
            log_err(dom::set_style(body, "overflow", overflow));
        }
    }
}

/// Wire the menu. Without both `.hamburger` and `.nav-menu` every menu
/// listener is skipped and `None` is returned.
pub fn setup(page: &Page) -> Option<SharedMenu> {
    let (Some(toggle), Some(panel)) = (
        dom::query(&page.document, ".hamburger"),
        dom::query(&page.document, ".nav-menu"),
    ) else {
        debug!("[folio][menu] toggle or panel missing, menu disabled");
        return None;
    };

    let surface = DomMenuSurface::new(toggle.clone(), panel, page.document.body());
    let menu: SharedMenu = Rc::new(RefCell::new(MenuController::new(
        page.config.breakpoint_px,
        surface,
    )));

    {
        let menu = Rc::clone(&menu);
        log_err(dom::listen(&toggle, "click", move |event: Event| {
            // The document-level outside-click handler would close it again.
            event.stop_propagation();
            menu.borrow_mut().handle(MenuEvent::ToggleClicked);
        }));
    }

    for link in dom::query_all(&page.document, ".nav-link") {
        let menu = Rc::clone(&menu);
        let window = page.window.clone();
        log_err(dom::listen(&link, "click", move |_: Event| {
            let viewport_width = dom::viewport_width(&window);
            menu.borrow_mut()
                .handle(MenuEvent::NavLinkClicked { viewport_width });
        }));
    }

    {
        let menu = Rc::clone(&menu);
        log_err(dom::listen(&page.document, "click", move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = menu.borrow().surface().contains(target.as_ref());
            if !inside {
                menu.borrow_mut().handle(MenuEvent::OutsideClick);
            }
        }));
    }

    {
        let menu = Rc::clone(&menu);
        log_err(dom::listen(&page.document, "keydown", move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                menu.borrow_mut().handle(MenuEvent::EscapeKey);
            }
        }));
    }

    {
        let menu = Rc::clone(&menu);
        let window = page.window.clone();
        log_err(dom::listen(&page.window, "resize", move |_: Event| {
            let width = dom::viewport_width(&window);
            menu.borrow_mut().handle(MenuEvent::ViewportResized { width });
        }));
    }

    {
        let menu = Rc::clone(&menu);
        let tasks = page.tasks.clone();
        let settle = page.config.orientation_settle();
        log_err(dom::listen(&page.window, "orientationchange", move |_: Event| {
            let menu = Rc::clone(&menu);
            // Rescheduling under the same owner drops a pending settle.
            log_err(timers::schedule_once(&tasks, TaskOwner::Orientation, settle, move || {
                menu.borrow_mut().handle(MenuEvent::OrientationSettled);
            }));
        }));
    }

    Some(menu)
}

// Page behaviors wired onto the static portfolio markup
// Developed by The Folio Team (c)2025

use std::rc::Rc;

use folio_core::FolioConfig;
use leptos::prelude::*;
use tracing::{info, warn};
use web_sys::{Document, Window};

use crate::dom::{self, DomError};
use crate::timers::{self, Tasks};

pub mod accordion;
pub mod anchors;
pub mod contact;
pub mod counters;
pub mod filter;
pub mod images;
pub mod menu;
pub mod scroll;
pub mod theme;
pub mod touch;
pub mod typewriter;

pub use menu::{DomMenuSurface, SharedMenu};

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Handles shared by every behavior on the page.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<FolioConfig>,
    pub tasks: Tasks,
}

impl Page {
    pub fn from_globals() -> Result<Self, DomError> {
        let (window, document) = dom::window_and_document()?;
        let raw = dom::by_id(&document, CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
        let config = FolioConfig::load_or_default(raw.as_deref());
        Ok(Self {
            window,
            document,
            config: Rc::new(config),
            tasks: timers::new_tasks(),
        })
    }

    pub fn viewport_width(&self) -> f64 {
        dom::viewport_width(&self.window)
    }
}

/// Attach every behavior. Theme goes first so the stored preference is on
/// the body before anything else touches the page.
pub fn install(page: &Page) {
    theme::setup(page);
    let menu = menu::setup(page);
    scroll::setup(page);
    anchors::setup(page, menu.clone());
    typewriter::setup(page);
    counters::setup(page);
    filter::setup(page);
    accordion::setup(page);
    contact::setup(page);
    touch::setup(page);
    images::setup(page);
    info!(
        "[folio] behaviors ready (menu: {})",
        if menu.is_some() { "on" } else { "off" }
    );
}

/// Mount point: renders nothing, installs the behaviors once.
#[component]
#[allow(clippy::unused_unit)]
pub fn Behaviors() -> impl IntoView {
    Effect::new(move || match Page::from_globals() {
        Ok(page) => install(&page),
        Err(e) => warn!("[folio] cannot attach behaviors: {e}"),
    });

    view! {}
}

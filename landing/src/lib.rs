//! Browser bindings for the folio portfolio page.
//!
//! The page markup is static HTML; this crate mounts an empty Leptos
//! component whose only job is to find the interactive elements and hand
//! their events to `folio-core`.
//!
//! Developed by The Folio Team (c)2025

pub mod behaviors;
pub mod dom;
pub mod storage;
pub mod timers;

use leptos::prelude::*;

pub use behaviors::Behaviors;

#[component]
pub fn App() -> impl IntoView {
    view! { <Behaviors /> }
}

/// Route `tracing`/`log` output to the browser console.
pub fn init_logging() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"folio: console logger already installed".into());
    }
}

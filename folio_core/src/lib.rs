//! # folio-core
//!
//! Browser-agnostic behavior logic for the folio portfolio page.
//!
//! Every interactive piece of the page lives here as plain Rust: explicit
//! state owned by small structs, transitions as methods, and timing expressed
//! as "what to show next and how long to wait". The `folio-landing` crate is
//! only glue that feeds DOM events in and applies the results.
//!
//! ## Modules
//!
//! - [`menu`] - mobile navigation state machine (the only real FSM)
//! - [`scroll`] - navbar style, back-to-top visibility, anchor offsets
//! - [`typewriter`] - cyclic type/pause/delete animation
//! - [`counter`] - count-up animation gated on first visibility
//! - [`theme`] - dark/light preference and its persistence
//! - [`filter`] - project category filter
//! - [`accordion`] - independent FAQ toggles
//! - [`contact`] - mock contact form submit/reset cycle
//! - [`touch`] - double-tap guard and card hover lift
//! - [`schedule`] - cancellable tasks keyed by owning component
//! - [`config`] - tunable constants with serde defaults
//!
//! ## Example
//!
//! ```rust
//! use folio_core::menu::{MenuController, MenuEvent, MenuState, RecordingSurface};
//!
//! let mut menu = MenuController::new(768.0, RecordingSurface::default());
//! menu.handle(MenuEvent::ToggleClicked);
//! assert_eq!(menu.state(), MenuState::Open);
//! assert!(menu.surface().view().scroll_locked);
//!
//! menu.handle(MenuEvent::EscapeKey);
//! assert_eq!(menu.state(), MenuState::Closed);
//! ```
//!
//! Developed by The Folio Team (c)2025

pub mod accordion;
pub mod config;
pub mod contact;
pub mod counter;
pub mod error;
pub mod filter;
pub mod menu;
pub mod schedule;
pub mod scroll;
pub mod theme;
pub mod touch;
pub mod typewriter;

pub use config::FolioConfig;
pub use error::{FolioError, Result};

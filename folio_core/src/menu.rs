//! Mobile navigation menu state machine.
//!
//! The menu is either [`MenuState::Closed`] or [`MenuState::Open`]. Input is
//! expressed as [`MenuEvent`]s so the same machine can be driven by DOM
//! listeners, tests, or anything else that can describe what happened.
//!
//! The controller never mutates markers piecemeal: after every state change it
//! renders a whole [`MenuView`] from the state, so the toggle marker, the panel
//! marker and the scroll lock cannot disagree.

use tracing::debug;

/// Whether the collapsible menu is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    fn flipped(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Everything that can happen to the menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// The hamburger control was clicked. Callers must stop the click from
    /// also reaching the outside-click handler.
    ToggleClicked,
    /// A navigation link inside the panel was chosen.
    NavLinkClicked { viewport_width: f64 },
    /// A click landed outside both the toggle control and the panel.
    OutsideClick,
    EscapeKey,
    ViewportResized { width: f64 },
    /// An orientation change has settled (the caller applies the delay).
    OrientationSettled,
    /// A smooth in-page anchor scroll was started.
    AnchorNavigated { viewport_width: f64 },
}

/// Marker/lock values derived from a [`MenuState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuView {
    pub toggle_active: bool,
    pub panel_active: bool,
    pub scroll_locked: bool,
}

impl From<MenuState> for MenuView {
    fn from(state: MenuState) -> Self {
        let open = state.is_open();
        Self {
            toggle_active: open,
            panel_active: open,
            scroll_locked: open,
        }
    }
}

/// Outcome of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: MenuState,
    pub to: MenuState,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Where the menu's visible state is applied.
pub trait MenuSurface {
    fn render(&mut self, view: MenuView);
}

/// Surface that only remembers the last rendered view.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    view: MenuView,
    renders: usize,
}

impl RecordingSurface {
    pub fn view(&self) -> MenuView {
        self.view
    }

    /// Number of times the controller pushed a view.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl MenuSurface for RecordingSurface {
    fn render(&mut self, view: MenuView) {
        self.view = view;
        self.renders += 1;
    }
}

/// Owns the menu state and pushes every change to its surface.
#[derive(Debug)]
pub struct MenuController<S> {
    state: MenuState,
    breakpoint: f64,
    surface: S,
}

impl<S: MenuSurface> MenuController<S> {
    /// Create a closed menu and render that state once so the surface starts
    /// consistent regardless of what the markup shipped with.
    pub fn new(breakpoint: f64, mut surface: S) -> Self {
        surface.render(MenuView::from(MenuState::Closed));
        Self {
            state: MenuState::Closed,
            breakpoint,
            surface,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn breakpoint(&self) -> f64 {
        self.breakpoint
    }

    /// Whether `width` counts as a narrow (collapsible menu) viewport.
    pub fn is_narrow(&self, width: f64) -> bool {
        width <= self.breakpoint
    }

    pub fn handle(&mut self, event: MenuEvent) -> Transition {
        let from = self.state;
        let to = self.next_state(event);
        if to != from {
            debug!("[folio][menu] {event:?}: {from:?} -> {to:?}");
            self.state = to;
            self.surface.render(MenuView::from(to));
        }
        Transition { from, to }
    }

    pub fn toggle(&mut self) -> Transition {
        self.handle(MenuEvent::ToggleClicked)
    }

    pub fn close(&mut self) -> Transition {
        self.handle(MenuEvent::EscapeKey)
    }

    fn next_state(&self, event: MenuEvent) -> MenuState {
        use MenuEvent::*;

        match (self.state, event) {
            (state, ToggleClicked) => state.flipped(),
            (MenuState::Open, NavLinkClicked { viewport_width })
            | (MenuState::Open, AnchorNavigated { viewport_width })
                if self.is_narrow(viewport_width) =>
            {
                MenuState::Closed
            }
            (MenuState::Open, OutsideClick | EscapeKey | OrientationSettled) => MenuState::Closed,
            (MenuState::Open, ViewportResized { width }) if !self.is_narrow(width) => {
                MenuState::Closed
            }
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> MenuController<RecordingSurface> {
        MenuController::new(768.0, RecordingSurface::default())
    }

    fn open() -> MenuController<RecordingSurface> {
        let mut menu = controller();
        menu.toggle();
        menu
    }

    #[test]
    fn test_starts_closed_and_rendered() {
        let menu = controller();
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.surface().view(), MenuView::default());
        assert_eq!(menu.surface().renders(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_state_and_lock() {
        let mut menu = controller();
        let first = menu.toggle();
        assert!(first.changed());
        assert!(menu.surface().view().scroll_locked);

        menu.toggle();
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.surface().view().scroll_locked);
        assert!(!menu.surface().view().toggle_active);
    }

    #[test]
    fn test_nav_link_closes_only_on_narrow_viewport() {
        let mut menu = open();
        let t = menu.handle(MenuEvent::NavLinkClicked {
            viewport_width: 1280.0,
        });
        assert!(!t.changed());
        assert_eq!(menu.state(), MenuState::Open);

        menu.handle(MenuEvent::NavLinkClicked {
            viewport_width: 768.0,
        });
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_anchor_navigation_follows_nav_link_rule() {
        let mut menu = open();
        menu.handle(MenuEvent::AnchorNavigated {
            viewport_width: 1024.0,
        });
        assert!(menu.state().is_open());
        menu.handle(MenuEvent::AnchorNavigated {
            viewport_width: 375.0,
        });
        assert!(!menu.state().is_open());
    }

    #[test]
    fn test_outside_click_and_escape_close() {
        let mut menu = open();
        menu.handle(MenuEvent::OutsideClick);
        assert_eq!(menu.state(), MenuState::Closed);

        let mut menu = open();
        menu.handle(MenuEvent::EscapeKey);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_resize_to_desktop_closes() {
        let mut menu = open();
        menu.handle(MenuEvent::ViewportResized { width: 600.0 });
        assert!(menu.state().is_open());

        menu.handle(MenuEvent::ViewportResized { width: 1024.0 });
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.surface().view(), MenuView::default());
    }

    #[test]
    fn test_orientation_settled_closes() {
        let mut menu = open();
        menu.handle(MenuEvent::OrientationSettled);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_close_events_while_closed_do_not_render() {
        let mut menu = controller();
        for event in [
            MenuEvent::OutsideClick,
            MenuEvent::EscapeKey,
            MenuEvent::OrientationSettled,
            MenuEvent::ViewportResized { width: 2000.0 },
            MenuEvent::NavLinkClicked {
                viewport_width: 320.0,
            },
        ] {
            let t = menu.handle(event);
            assert!(!t.changed(), "{event:?} should be a no-op while closed");
        }
        assert_eq!(menu.surface().renders(), 1);
    }
}

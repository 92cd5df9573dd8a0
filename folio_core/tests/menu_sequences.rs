//! Long event sequences through the menu controller.
//!
//! The surface used here records every view it is handed, so the checks
//! cover each intermediate render and not just the final state.

use folio_core::menu::{MenuController, MenuEvent, MenuState, MenuSurface, MenuView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Default)]
struct HistorySurface {
    views: Vec<MenuView>,
}

impl MenuSurface for HistorySurface {
    fn render(&mut self, view: MenuView) {
        self.views.push(view);
    }
}

fn random_event(rng: &mut StdRng) -> MenuEvent {
    let width = [320.0, 768.0, 769.0, 1024.0][rng.random_range(0..4usize)];
    match rng.random_range(0..8) {
        0 | 1 => MenuEvent::ToggleClicked,
        2 => MenuEvent::NavLinkClicked {
            viewport_width: width,
        },
        3 => MenuEvent::OutsideClick,
        4 => MenuEvent::EscapeKey,
        5 => MenuEvent::ViewportResized { width },
        6 => MenuEvent::AnchorNavigated {
            viewport_width: width,
        },
        _ => MenuEvent::OrientationSettled,
    }
}

#[test]
fn markers_and_scroll_lock_track_state_after_every_event() {
    for seed in 1..=20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut menu = MenuController::new(768.0, HistorySurface::default());

        for _ in 0..500 {
            let event = random_event(&mut rng);
            menu.handle(event);

            let view = *menu.surface().views.last().expect("initial render");
            assert_eq!(view.toggle_active, view.panel_active, "seed {seed}, {event:?}");
            assert_eq!(view.scroll_locked, menu.state().is_open(), "seed {seed}, {event:?}");
        }

        for view in &menu.surface().views {
            assert_eq!(view.toggle_active, view.panel_active);
            assert_eq!(view.toggle_active, view.scroll_locked);
        }
    }
}

#[test]
fn renders_alternate_between_open_and_closed() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut menu = MenuController::new(768.0, HistorySurface::default());
    for _ in 0..300 {
        menu.handle(random_event(&mut rng));
    }

    // Only real transitions render, so consecutive views always differ.
    let views = &menu.surface().views;
    assert!(views.windows(2).all(|w| w[0] != w[1]));
}

#[test]
fn desktop_resize_clears_stale_open_menu() {
    let mut menu = MenuController::new(768.0, HistorySurface::default());
    menu.handle(MenuEvent::ToggleClicked);
    assert_eq!(menu.state(), MenuState::Open);

    menu.handle(MenuEvent::ViewportResized { width: 1024.0 });
    assert_eq!(menu.state(), MenuState::Closed);
    assert_eq!(menu.surface().views.last(), Some(&MenuView::default()));
}


//! Scroll-driven page chrome and in-page anchor offsets.

/// What the page chrome should look like at a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollChrome {
    /// `.navbar` carries the `scrolled` marker.
    pub navbar_scrolled: bool,
    /// The back-to-top control carries the `visible` marker.
    pub back_to_top_visible: bool,
}

/// Re-evaluates the chrome on every scroll event.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    back_to_top_threshold: f64,
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new(back_to_top_threshold: f64) -> Self {
        Self {
            back_to_top_threshold,
            last_offset: 0.0,
        }
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn update(&mut self, offset: f64) -> ScrollChrome {
        self.last_offset = offset;
        ScrollChrome {
            navbar_scrolled: offset > 0.0,
            back_to_top_visible: offset > self.back_to_top_threshold,
        }
    }
}

/// `href` values that look like anchors but point nowhere.
pub fn is_placeholder_anchor(href: &str) -> bool {
    matches!(href, "#" | "#!")
}

/// Scroll destination for an element whose top edge is at `element_top`,
/// leaving room for the fixed header.
pub fn anchor_scroll_top(element_top: f64, header_offset: f64) -> f64 {
    element_top - header_offset
}

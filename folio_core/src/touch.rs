//! Touch and hover niceties.

/// Transform applied to a hovered project card on wide viewports.
pub const LIFTED: &str = "translateY(-8px)";
pub const RESTING: &str = "translateY(0)";

/// Card transform for a hover change, or `None` when the viewport is narrow
/// and hover effects stay off.
pub fn card_lift(viewport_width: f64, breakpoint: f64, hovered: bool) -> Option<&'static str> {
    if viewport_width <= breakpoint {
        return None;
    }
    Some(if hovered { LIFTED } else { RESTING })
}

/// Detects a second `touchend` arriving within the double-tap window.
#[derive(Debug, Clone)]
pub struct DoubleTapGuard {
    window_ms: f64,
    last_touch_end: Option<f64>,
}

impl DoubleTapGuard {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms: window_ms as f64,
            last_touch_end: None,
        }
    }

    /// Record a `touchend` at `now_ms`; true means suppress its default
    /// (zoom) action.
    pub fn touch_end(&mut self, now_ms: f64) -> bool {
        let suppress = self
            .last_touch_end
            .is_some_and(|last| now_ms - last <= self.window_ms);
        self.last_touch_end = Some(now_ms);
        suppress
    }
}

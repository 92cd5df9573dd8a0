//! Count-up animation for statistic elements.
//!
//! [`CounterBoard`] decides *when* a counter starts (first time it is at least
//! the threshold fraction visible, once per element) and
//! [`CounterAnimation`] decides *what* it shows on each frame.

use std::collections::HashSet;

use crate::config::CounterConfig;
use crate::error::{FolioError, Result};

/// Parse a `data-count` attribute value.
pub fn parse_target(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FolioError::InvalidCounterTarget {
            raw: raw.to_string(),
        })
}

/// Value to display for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    /// True on the frame that lands on the target; no frames follow.
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, config: &CounterConfig) -> Self {
        let frames = config.duration_ms as f64 / config.frame_ms as f64;
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame. Returns `None` once the target was reached.
    pub fn tick(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        let reached = if self.target >= 0 {
            self.current >= self.target as f64
        } else {
            self.current <= self.target as f64
        };
        if reached {
            self.current = self.target as f64;
            self.finished = true;
        }
        Some(CounterFrame {
            value: self.current.floor() as i64,
            done: self.finished,
        })
    }
}

/// Tracks which counters already started.
#[derive(Debug, Clone)]
pub struct CounterBoard {
    config: CounterConfig,
    started: HashSet<usize>,
}

impl CounterBoard {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            config,
            started: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.config.visibility_threshold
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn has_started(&self, index: usize) -> bool {
        self.started.contains(&index)
    }

    /// Report the visible fraction of counter `index`. Yields an animation the
    /// first time the threshold is crossed and never again for that index.
    pub fn observe(&mut self, index: usize, ratio: f64, target: i64) -> Option<CounterAnimation> {
        if ratio < self.config.visibility_threshold || self.started.contains(&index) {
            return None;
        }
        self.started.insert(index);
        Some(CounterAnimation::new(target, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(mut anim: CounterAnimation) -> Vec<CounterFrame> {
        let mut frames = Vec::new();
        while let Some(frame) = anim.tick() {
            frames.push(frame);
            assert!(frames.len() < 10_000, "counter never finished");
        }
        frames
    }

    #[test]
    fn test_reaches_target_exactly_and_stops() {
        let config = CounterConfig::default();
        let mut anim = CounterAnimation::new(250, &config);
        let mut last = None;
        while let Some(frame) = anim.tick() {
            last = Some(frame);
        }
        assert_eq!(
            last,
            Some(CounterFrame {
                value: 250,
                done: true
            })
        );
        assert!(anim.is_finished());
        assert_eq!(anim.tick(), None);
    }

    #[test]
    fn test_values_are_monotonic_and_floored() {
        let frames = run_to_end(CounterAnimation::new(250, &CounterConfig::default()));
        // 2000ms / 16ms = 125 frames of 2.0 each
        assert_eq!(frames.len(), 125);
        assert_eq!(frames[0].value, 2);
        assert!(frames.windows(2).all(|w| w[0].value <= w[1].value));
        assert!(frames[..frames.len() - 1].iter().all(|f| !f.done));
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let frames = run_to_end(CounterAnimation::new(0, &CounterConfig::default()));
        assert_eq!(frames, vec![CounterFrame { value: 0, done: true }]);
    }

    #[test]
    fn test_negative_target_counts_down() {
        let frames = run_to_end(CounterAnimation::new(-40, &CounterConfig::default()));
        assert_eq!(frames.last().map(|f| f.value), Some(-40));
        assert!(frames.len() > 1);
    }

    #[test]
    fn test_board_starts_once_after_threshold() {
        let mut board = CounterBoard::new(CounterConfig::default());
        assert!(board.observe(0, 0.1, 250).is_none());
        assert!(board.observe(0, 0.29, 250).is_none());
        assert!(!board.has_started(0));

        let anim = board.observe(0, 0.3, 250);
        assert_eq!(anim.map(|a| a.target()), Some(250));

        // Leaving and re-entering the viewport does not restart it.
        assert!(board.observe(0, 0.0, 250).is_none());
        assert!(board.observe(0, 1.0, 250).is_none());

        // Other counters are independent.
        assert!(board.observe(1, 0.5, 10).is_some());
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("250").ok(), Some(250));
        assert_eq!(parse_target(" 42 ").ok(), Some(42));
        assert!(matches!(
            parse_target("12k"),
            Err(FolioError::InvalidCounterTarget { .. })
        ));
    }
}

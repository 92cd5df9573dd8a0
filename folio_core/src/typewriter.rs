//! Typewriter animation.
//!
//! Each [`Typewriter::step`] produces the text to display and how long to wait
//! before the next step. The cycle per phrase is: type forward one character
//! at a time, hold on the full phrase, delete backward one character at a
//! time, pause on empty, advance to the next phrase (wrapping).

use std::time::Duration;

use crate::config::TypewriterConfig;
use crate::error::Result;

/// One rendered step of the animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterFrame {
    pub text: String,
    pub next_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    type_delay: Duration,
    delete_delay: Duration,
    hold_delay: Duration,
    advance_delay: Duration,
    start_delay: Duration,
}

impl Typewriter {
    /// Validates the config; an empty list or an empty phrase is rejected.
    pub fn new(config: &TypewriterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            phrases: config.phrases.iter().map(|p| p.chars().collect()).collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            type_delay: Duration::from_millis(config.type_ms),
            delete_delay: Duration::from_millis(config.delete_ms),
            hold_delay: Duration::from_millis(config.hold_ms),
            advance_delay: Duration::from_millis(config.advance_ms),
            start_delay: Duration::from_millis(config.start_delay_ms),
        })
    }

    /// Delay before the first step.
    pub fn start_delay(&self) -> Duration {
        self.start_delay
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn step(&mut self) -> TypewriterFrame {
        let len = self.phrases[self.phrase_index].len();

        let mut next_delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.delete_delay
        } else {
            self.char_index = (self.char_index + 1).min(len);
            self.type_delay
        };

        let text: String = self.phrases[self.phrase_index][..self.char_index]
            .iter()
            .collect();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            next_delay = self.hold_delay;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            next_delay = self.advance_delay;
        }

        TypewriterFrame { text, next_delay }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use pretty_assertions::assert_eq;

    fn config(phrases: &[&str]) -> TypewriterConfig {
        TypewriterConfig {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            ..TypewriterConfig::default()
        }
    }

    fn frames(tw: &mut Typewriter, n: usize) -> Vec<(String, u64)> {
        (0..n)
            .map(|_| {
                let f = tw.step();
                (f.text, f.next_delay.as_millis() as u64)
            })
            .collect()
    }

    fn owned(expected: &[(&str, u64)]) -> Vec<(String, u64)> {
        expected.iter().map(|(t, d)| (t.to_string(), *d)).collect()
    }

    #[test]
    fn test_two_phrase_cycle_is_deterministic() {
        let mut tw = Typewriter::new(&config(&["A", "BB"])).expect("valid");
        assert_eq!(tw.start_delay(), Duration::from_millis(1000));

        let cycle = owned(&[
            ("A", 1500),
            ("", 500),
            ("B", 100),
            ("BB", 1500),
            ("B", 50),
            ("", 500),
        ]);
        assert_eq!(frames(&mut tw, 6), cycle);
        // Wraps back to "A" and repeats identically.
        assert_eq!(frames(&mut tw, 6), cycle);
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn test_counts_unicode_scalars() {
        let mut tw = Typewriter::new(&config(&["día"])).expect("valid");
        let texts: Vec<String> = frames(&mut tw, 3).into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts, vec!["d", "dí", "día"]);
        assert!(tw.is_deleting());
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            Typewriter::new(&config(&[])),
            Err(FolioError::NoPhrases)
        ));
        assert!(matches!(
            Typewriter::new(&config(&["x", ""])),
            Err(FolioError::EmptyPhrase { index: 1 })
        ));
    }
}

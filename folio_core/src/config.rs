//! Configuration for the page behaviors.
//!
//! The page may embed a JSON object (see `folio-landing`) overriding any of
//! these fields; everything missing falls back to the defaults below.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FolioError, Result};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Viewport width (px) at or below which the collapsible menu applies.
    pub breakpoint_px: f64,
    /// Fixed header height subtracted from anchor scroll targets.
    pub header_offset_px: f64,
    /// Scroll offset above which the back-to-top control is shown.
    pub back_to_top_threshold_px: f64,
    /// Delay before reacting to an orientation change.
    pub orientation_settle_ms: u64,
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
    pub typewriter: TypewriterConfig,
    pub counter: CounterConfig,
    /// Fade/slide time before filtered-out cards leave the layout.
    pub filter_transition_ms: u64,
    /// How long the contact success message stays before the form returns.
    pub form_reset_ms: u64,
    /// Two `touchend`s closer than this are treated as a double tap.
    pub double_tap_window_ms: u64,
}

/// Typewriter phrases and timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub start_delay_ms: u64,
    pub type_ms: u64,
    pub delete_ms: u64,
    /// Pause once a phrase is fully typed.
    pub hold_ms: u64,
    /// Pause once a phrase is fully deleted, before the next one starts.
    pub advance_ms: u64,
}

/// Counter animation timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u64,
    pub frame_ms: u64,
    /// Fraction of the element that must be visible to start counting.
    pub visibility_threshold: f64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            header_offset_px: 80.0,
            back_to_top_threshold_px: 300.0,
            orientation_settle_ms: 200,
            theme_storage_key: "theme".to_string(),
            typewriter: TypewriterConfig::default(),
            counter: CounterConfig::default(),
            filter_transition_ms: 300,
            form_reset_ms: 5000,
            double_tap_window_ms: 300,
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Data Engineer".to_string(),
                "Software Developer".to_string(),
                "Full-Stack Developer".to_string(),
                "Tech Enthusiast".to_string(),
            ],
            start_delay_ms: 1000,
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 1500,
            advance_ms: 500,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            frame_ms: 16,
            visibility_threshold: 0.3,
        }
    }
}

impl FolioConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`FolioConfig::from_json`], but never fails: an absent or broken
    /// config yields the defaults with a warning.
    pub fn load_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("[folio][config] {e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.typewriter.validate()?;
        self.counter.validate()?;
        Ok(())
    }

    pub fn orientation_settle(&self) -> Duration {
        Duration::from_millis(self.orientation_settle_ms)
    }

    pub fn filter_transition(&self) -> Duration {
        Duration::from_millis(self.filter_transition_ms)
    }

    pub fn form_reset(&self) -> Duration {
        Duration::from_millis(self.form_reset_ms)
    }
}

impl TypewriterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.phrases.is_empty() {
            return Err(FolioError::NoPhrases);
        }
        if let Some(index) = self.phrases.iter().position(|p| p.is_empty()) {
            return Err(FolioError::EmptyPhrase { index });
        }
        for (field, value) in [
            ("typewriter.type_ms", self.type_ms),
            ("typewriter.delete_ms", self.delete_ms),
        ] {
            if value == 0 {
                return Err(FolioError::ZeroDuration { field });
            }
        }
        Ok(())
    }
}

impl CounterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.frame_ms == 0 {
            return Err(FolioError::ZeroDuration {
                field: "counter.frame_ms",
            });
        }
        if self.duration_ms == 0 {
            return Err(FolioError::ZeroDuration {
                field: "counter.duration_ms",
            });
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(FolioError::InvalidThreshold(self.visibility_threshold));
        }
        Ok(())
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.breakpoint_px, 768.0);
        assert_eq!(config.header_offset_px, 80.0);
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.typewriter.phrases.len(), 4);
        assert_eq!(config.counter.visibility_threshold, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FolioConfig::from_json(
            r#"{ "breakpoint_px": 900, "typewriter": { "phrases": ["Rustacean"] } }"#,
        )
        .expect("valid config");
        assert_eq!(config.breakpoint_px, 900.0);
        assert_eq!(config.typewriter.phrases, vec!["Rustacean".to_string()]);
        assert_eq!(config.typewriter.type_ms, 100);
        assert_eq!(config.form_reset_ms, 5000);
    }

    #[test]
    fn test_rejects_empty_phrase_list() {
        let err = FolioConfig::from_json(r#"{ "typewriter": { "phrases": [] } }"#).unwrap_err();
        assert!(matches!(err, FolioError::NoPhrases));
    }

    #[test]
    fn test_rejects_empty_phrase() {
        let err = FolioConfig::from_json(r#"{ "typewriter": { "phrases": ["ok", ""] } }"#)
            .unwrap_err();
        assert!(matches!(err, FolioError::EmptyPhrase { index: 1 }));
    }

    #[test]
    fn test_rejects_zero_frame() {
        let err = FolioConfig::from_json(r#"{ "counter": { "frame_ms": 0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            FolioError::ZeroDuration {
                field: "counter.frame_ms"
            }
        ));
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        let err = FolioConfig::from_json(r#"{ "counter": { "visibility_threshold": 1.5 } }"#)
            .unwrap_err();
        assert!(matches!(err, FolioError::InvalidThreshold(_)));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        assert_eq!(FolioConfig::load_or_default(None), FolioConfig::default());
        assert_eq!(
            FolioConfig::load_or_default(Some("{ not json")),
            FolioConfig::default()
        );
        assert_eq!(
            FolioConfig::load_or_default(Some(r#"{ "counter": { "frame_ms": 0 } }"#)),
            FolioConfig::default()
        );
    }

    #[test]
    fn test_zero_delays_are_accepted() {
        // Only the counter frame divides by its value; other delays may be 0.
        let config = FolioConfig::from_json(r#"{ "form_reset_ms": 0, "filter_transition_ms": 0 }"#)
            .expect("valid config");
        assert_eq!(config.form_reset_ms, 0);
        assert_eq!(config.filter_transition_ms, 0);
    }
}

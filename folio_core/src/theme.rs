//! Dark/light theme preference.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Class put on `<body>` while the dark theme is active.
pub const DARK_MARKER: &str = "dark-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Icon offered by the toggle: the sun switches back to light, the moon
    /// switches to dark.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Key/value persistence for preferences. Implementations swallow their own
/// failures: a failed read is an absent value, a failed write is dropped.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, also handy where `localStorage` is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Current theme plus where it is persisted.
#[derive(Debug)]
pub struct ThemeController<S> {
    key: String,
    current: Theme,
    from_store: bool,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the persisted preference once. `page_theme` is what the markup
    /// already shows; it stays in effect when nothing valid is stored.
    pub fn load(key: impl Into<String>, store: S, page_theme: Theme) -> Self {
        let key = key.into();
        let saved = store.get(&key);
        let stored = match saved.as_deref().map(Theme::from_str) {
            Some(Ok(theme)) => Some(theme),
            Some(Err(())) => {
                debug!("[folio][theme] ignoring stored value {saved:?}");
                None
            }
            None => None,
        };
        Self {
            key,
            current: stored.unwrap_or(page_theme),
            from_store: stored.is_some(),
            store,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// True when the current theme came from a valid stored value, i.e. the
    /// page must be updated to match it.
    pub fn from_store(&self) -> bool {
        self.from_store
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Flip and persist.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(&self.key, self.current.as_str());
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_survives_reload() {
        let mut store = MemoryStore::default();
        store.set("theme", "dark");

        let theme = ThemeController::load("theme", store, Theme::Light);
        assert_eq!(theme.current(), Theme::Dark);
        assert!(theme.from_store());
        assert_eq!(theme.current().toggle_icon(), "fa-sun");
    }

    #[test]
    fn test_nothing_stored_keeps_page_theme() {
        let mut theme = ThemeController::load("theme", MemoryStore::default(), Theme::Dark);
        assert_eq!(theme.current(), Theme::Dark);
        assert!(!theme.from_store());

        // Toggling flips what the page showed, not the light default.
        assert_eq!(theme.toggle(), Theme::Light);
        assert_eq!(theme.store().get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_stored_value_overrides_page_theme() {
        let mut store = MemoryStore::default();
        store.set("theme", "light");
        let theme = ThemeController::load("theme", store, Theme::Dark);
        assert_eq!(theme.current(), Theme::Light);
        assert!(theme.from_store());
    }

    #[test]
    fn test_toggle_persists_and_reload_reads_it() {
        let mut theme = ThemeController::load("theme", MemoryStore::default(), Theme::Light);
        assert_eq!(theme.current(), Theme::Light);

        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(theme.store().get("theme").as_deref(), Some("dark"));

        let reloaded = ThemeController::load("theme", theme.into_store(), Theme::Light);
        assert!(reloaded.current().is_dark());
    }

    #[test]
    fn test_unknown_value_is_ignored() {
        let mut store = MemoryStore::default();
        store.set("theme", "sepia");
        let theme = ThemeController::load("theme", store, Theme::Dark);
        assert_eq!(theme.current(), Theme::Dark);
        assert!(!theme.from_store());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).ok().as_deref(), Some("\"dark\""));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
    }
}

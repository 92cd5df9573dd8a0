//! `localStorage`-backed preference store.

use folio_core::theme::PreferenceStore;
use tracing::debug;
use web_sys::{Storage, Window};

/// Wraps `window.localStorage`. Private browsing modes can deny access
/// entirely; then every read is absent and every write is dropped.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            debug!("[folio][storage] localStorage unavailable");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            debug!("[folio][storage] failed to persist {key}");
        }
    }
}

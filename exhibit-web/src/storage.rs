//! Session-scoped settings for the browser.

use exhibit_core::settings::{MemoryStore, SettingsStore};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::dom;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("session storage {op} failed: {message}")]
    Storage { op: &'static str, message: String },
}

impl SettingsError {
    fn storage(op: &'static str, err: &JsValue) -> Self {
        Self::Storage {
            op,
            message: dom::js_error_message(err),
        }
    }
}

/// `sessionStorage` wrapper.
#[derive(Debug, Clone)]
pub struct SessionStore {
    storage: Storage,
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

impl SettingsStore for SessionStore {
    type Error = SettingsError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.storage
            .get_item(key)
            .map_err(|e| SettingsError::storage("read", &e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SettingsError::storage("write", &e))
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        self.storage
            .remove_item(key)
            .map_err(|e| SettingsError::storage("remove", &e))
    }
}

/// Session storage when the browser offers it, otherwise an in-memory map
/// that lives as long as the page.
#[derive(Debug, Clone)]
pub enum BrowserSettings {
    Session(SessionStore),
    Memory(MemoryStore),
}

impl BrowserSettings {
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = dom::session_storage() {
                return Self::Session(SessionStore::new(storage));
            }
            log::warn!("session storage unavailable; decisions will not survive a reload");
        }
        Self::Memory(MemoryStore::new())
    }
}

impl PartialEq for BrowserSettings {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Session(_), Self::Session(_)) | (Self::Memory(_), Self::Memory(_))
        )
    }
}

impl SettingsStore for BrowserSettings {
    type Error = SettingsError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match self {
            Self::Session(store) => store.get_item(key),
            Self::Memory(store) => store.get_item(key).map_err(|never| match never {}),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        match self {
            Self::Session(store) => store.set_item(key, value),
            Self::Memory(store) => store.set_item(key, value).map_err(|never| match never {}),
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        match self {
            Self::Session(store) => store.remove_item(key),
            Self::Memory(store) => store.remove_item(key).map_err(|never| match never {}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhibit_core::transparency::{Decision, MapTransparencyFlow, STORAGE_KEY};

    #[test]
    fn native_build_falls_back_to_memory() {
        assert!(matches!(BrowserSettings::detect(), BrowserSettings::Memory(_)));
    }

    #[test]
    fn memory_variant_backs_the_flow() {
        let settings = BrowserSettings::Memory(MemoryStore::new());
        let mut flow = MapTransparencyFlow::restore(&settings);
        flow.decide(Decision::Safe, &settings).unwrap();
        assert_eq!(
            settings.get_item(STORAGE_KEY).unwrap().as_deref(),
            Some("safe")
        );
    }
}

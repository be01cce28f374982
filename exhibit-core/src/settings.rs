//! Persisted settings with a typed get/set contract.
//!
//! Platforms provide a [`SettingsStore`] (the browser uses session storage);
//! [`MemoryStore`] serves environments without persistent storage and tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::marker::PhantomData;
use std::rc::Rc;

/// Raw string key/value storage.
pub trait SettingsStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), Self::Error>;
}

/// Value that persists as one of a fixed set of string literals.
pub trait StoredLiteral: Sized {
    fn to_literal(&self) -> &'static str;
    fn from_literal(raw: &str) -> Option<Self>;
}

/// Typed handle for one settings key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting<T> {
    key: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T: StoredLiteral> Setting<T> {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _value: PhantomData,
        }
    }

    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Load the typed value. Unrecognised literals read as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn load<S: SettingsStore>(&self, store: &S) -> Result<Option<T>, S::Error> {
        let Some(raw) = store.get_item(self.key)? else {
            return Ok(None);
        };
        let value = T::from_literal(&raw);
        if value.is_none() {
            log::warn!("discarding unrecognised value {raw:?} stored under {}", self.key);
        }
        Ok(value)
    }

    /// Persist `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn save<S: SettingsStore>(&self, store: &S, value: &T) -> Result<(), S::Error> {
        store.set_item(self.key, value.to_literal())
    }

    /// Remove the stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the removal.
    pub fn clear<S: SettingsStore>(&self, store: &S) -> Result<(), S::Error> {
        store.remove_item(self.key)
    }
}

/// In-memory store. Clones share the same map, mirroring a per-tab session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SettingsStore for MemoryStore {
    type Error = Infallible;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

//! Key-value persistence seam.
//!
//! The browser crate backs this with `localStorage`; tests and native
//! callers use [`MemoryStore`]. Values are JSON-encoded strings either way.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StoreError;

pub trait KeyValueStore {
    /// Decoded value under `key`, or `None` if the key is absent.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>;
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>;
    fn delete(&self, key: &str);
    fn contains(&self, key: &str) -> bool;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw encoded value, as the browser would show it in dev tools.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.to_string(), value.into());
    }
}

impl KeyValueStore for MemoryStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let entries = self.entries.borrow();
        let Some(raw) = entries.get(key) else {
            return Ok(None);
        };
        serde_json::from_str(raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        self.entries.borrow_mut().insert(key.to_string(), raw);
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

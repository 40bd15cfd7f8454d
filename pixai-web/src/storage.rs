use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use pixai_core::{KeyValueStore, StoreError};
use serde::{Serialize, de::DeserializeOwned};

/// `window.localStorage`, JSON-encoded through gloo.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match LocalStorage::get::<T>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(source)) => Err(StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
            Err(other) => Err(StoreError::Backend(other.to_string())),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        LocalStorage::set(key, value).map_err(|err| StoreError::Backend(err.to_string()))
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }

    fn contains(&self, key: &str) -> bool {
        matches!(LocalStorage::raw().get_item(key), Ok(Some(_)))
    }
}

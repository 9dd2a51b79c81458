//! `localStorage`-backed selection storage.
use randovango_core::SelectionStorage;

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Selection storage scoped to the page origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalSelectionStorage;

impl SelectionStorage for LocalSelectionStorage {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage().ok_or(WebStorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage().ok_or(WebStorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randovango_core::{SelectionKey, SelectionStore};

    #[test]
    fn native_builds_degrade_without_local_storage() {
        let store = SelectionStore::new(LocalSelectionStorage);
        assert!(matches!(
            LocalSelectionStorage.set("selectedHiking", "1"),
            Err(WebStorageError::Unavailable)
        ));
        store.record(SelectionKey::Hiking, "1");
        assert_eq!(store.raw(SelectionKey::Hiking), None);
    }
}

//! Selection store: the flat key/value surface shared by every wizard step.
use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::SelectionStorage;

/// Fixed keys written by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectionKey {
    Hiking,
    Spot,
    Services,
}

impl SelectionKey {
    pub const ALL: [Self; 3] = [Self::Hiking, Self::Spot, Self::Services];

    /// Storage key as persisted in the browser.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hiking => "selectedHiking",
            Self::Spot => "selectedSpot",
            Self::Services => "selectedServices",
        }
    }

    /// Reserved value meaning "explicitly none of the options".
    #[must_use]
    pub const fn none_sentinel(self) -> &'static str {
        match self {
            Self::Hiking => "no-hiking",
            Self::Spot => "autre_hebergement",
            Self::Services => "aucun_service",
        }
    }
}

/// A value read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Card(String),
    None,
}

impl Selection {
    #[must_use]
    pub fn from_stored(key: SelectionKey, raw: &str) -> Self {
        if raw == key.none_sentinel() {
            Self::None
        } else {
            Self::Card(raw.to_string())
        }
    }

    #[must_use]
    pub fn card_id(&self) -> Option<&str> {
        match self {
            Self::Card(id) => Some(id),
            Self::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage is read-only")]
    ReadOnly,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// In-memory storage used by native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects every write, like a browser with storage disabled.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            entries: RefCell::default(),
            read_only: true,
        }
    }

    /// Seed an entry without going through the wizard.
    #[must_use]
    pub fn with_entry(self, key: SelectionKey, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.as_str().to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SelectionStorage for MemoryStorage {
    type Error = StoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed view over an injected [`SelectionStorage`].
///
/// Writes overwrite unconditionally. Backend failures are logged and
/// swallowed: a failed write leaves the page usable.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore<S> {
    storage: S,
}

impl<S: SelectionStorage> SelectionStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns the backend error when the write is rejected.
    pub fn try_record(&self, key: SelectionKey, value: &str) -> Result<(), S::Error> {
        self.storage.set(key.as_str(), value)
    }

    /// Persist `value` under `key`, logging instead of failing.
    pub fn record(&self, key: SelectionKey, value: &str) {
        if let Err(err) = self.try_record(key, value) {
            log::warn!("could not persist {}={value}: {err}", key.as_str());
        }
    }

    /// Persist the "none" sentinel for `key`.
    pub fn record_none(&self, key: SelectionKey) {
        self.record(key, key.none_sentinel());
    }

    /// Raw stored value, `None` when absent or unreadable.
    #[must_use]
    pub fn raw(&self, key: SelectionKey) -> Option<String> {
        match self.storage.get(key.as_str()) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("could not read {}: {err}", key.as_str());
                None
            }
        }
    }

    #[must_use]
    pub fn stored(&self, key: SelectionKey) -> Option<Selection> {
        self.raw(key).map(|raw| Selection::from_stored(key, &raw))
    }

    /// Whether the stored value for `key` is its "none" sentinel.
    #[must_use]
    pub fn is_none_sentinel(&self, key: SelectionKey) -> bool {
        matches!(self.stored(key), Some(Selection::None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_sentinels_match_persisted_names() {
        assert_eq!(SelectionKey::Hiking.as_str(), "selectedHiking");
        assert_eq!(SelectionKey::Spot.as_str(), "selectedSpot");
        assert_eq!(SelectionKey::Services.as_str(), "selectedServices");
        assert_eq!(SelectionKey::Hiking.none_sentinel(), "no-hiking");
        assert_eq!(SelectionKey::Spot.none_sentinel(), "autre_hebergement");
        assert_eq!(SelectionKey::Services.none_sentinel(), "aucun_service");
    }

    #[test]
    fn record_overwrites_previous_value() {
        let store = SelectionStore::new(MemoryStorage::new());
        store.record(SelectionKey::Hiking, "3");
        store.record(SelectionKey::Hiking, "7");
        assert_eq!(store.raw(SelectionKey::Hiking).as_deref(), Some("7"));
        assert_eq!(store.storage().len(), 1);
    }

    #[test]
    fn stored_distinguishes_sentinel_from_card() {
        let store = SelectionStore::new(
            MemoryStorage::new()
                .with_entry(SelectionKey::Spot, "autre_hebergement")
                .with_entry(SelectionKey::Hiking, "12"),
        );
        assert_eq!(store.stored(SelectionKey::Spot), Some(Selection::None));
        assert!(store.is_none_sentinel(SelectionKey::Spot));
        assert_eq!(
            store.stored(SelectionKey::Hiking),
            Some(Selection::Card("12".into()))
        );
        assert_eq!(store.stored(SelectionKey::Services), None);
    }

    #[test]
    fn read_only_backend_is_swallowed_by_record() {
        let store = SelectionStore::new(MemoryStorage::read_only());
        store.record(SelectionKey::Services, "aucun_service");
        assert!(store.storage().is_empty());
        assert_eq!(
            store.try_record(SelectionKey::Services, "x"),
            Err(StoreError::ReadOnly)
        );
    }
}

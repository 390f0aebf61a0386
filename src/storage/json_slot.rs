//! JsonSlot - stores the whole record set as a JSON array under one key.

use super::{ContactStorage, KeyValueStore};
use crate::contact::Contact;
use crate::error::StorageError;

#[derive(Debug, Clone)]
pub struct JsonSlot<K> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> JsonSlot<K> {
    pub fn new(store: K, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backing key/value store.
    pub fn inner(&self) -> &K {
        &self.store
    }

    /// Read and decode the slot, surfacing every failure.
    /// [`ContactStorage::load`] folds these into `None`.
    pub fn try_load(&self) -> Result<Option<Vec<Contact>>, StorageError> {
        match self.store.get_item(&self.key)? {
            // `null` is what an empty browser slot parses to; treat it as no data.
            Some(raw) => Ok(serde_json::from_str::<Option<Vec<Contact>>>(&raw)?),
            None => Ok(None),
        }
    }
}

impl<K: KeyValueStore> ContactStorage for JsonSlot<K> {
    fn load(&self) -> Option<Vec<Contact>> {
        match self.try_load() {
            Ok(contacts) => contacts,
            Err(e) => {
                log::warn!("ignoring unreadable contact slot {:?}: {}", self.key, e);
                None
            }
        }
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(contacts)?;
        self.store.set_item(&self.key, &raw)
    }
}

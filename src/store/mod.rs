//! ContactStore - the authoritative, ordered record set.
//!
//! The store loads once from its [`ContactStorage`] when opened and writes the
//! whole set back after every mutation. Writes are best effort: a failed save
//! is logged, flips [`ContactStore::is_synced`] to false, and leaves the
//! in-memory records as the source of truth.
//!
//! Mutations that name an unknown id are silent no-ops. They still write the
//! (unchanged) set through, and they never notify.

use uuid::Uuid;

use crate::config::StoreConfig;
use crate::contact::{Contact, ContactInput};
use crate::notify::{ContactEvent, Notifier};
use crate::query::{ContactFilter, View};
use crate::storage::{ContactStorage, JsonSlot, KeyValueStore};

pub struct ContactStore<S> {
    storage: S,
    contacts: Vec<Contact>,
    synced: bool,
    notifier: Notifier,
}

impl<K: KeyValueStore> ContactStore<JsonSlot<K>> {
    /// Open a store over the slot named by `config.storage_key`.
    pub fn from_config(store: K, config: &StoreConfig) -> Self {
        Self::open(JsonSlot::new(store, config.storage_key.clone()))
    }
}

impl<S: ContactStorage> ContactStore<S> {
    /// Load the record set from `storage`. Missing or unreadable content
    /// starts the store empty.
    pub fn open(storage: S) -> Self {
        let contacts = storage.load().unwrap_or_default();
        log::info!("contact store opened with {} records", contacts.len());
        Self {
            storage,
            contacts,
            synced: true,
            notifier: Notifier::new(),
        }
    }

    /// Append a new record with a freshly minted id and `favorite = false`.
    pub fn add(&mut self, input: ContactInput) -> Contact {
        let contact = Contact::from_input(self.mint_id(), input);
        log::debug!("adding contact {}", contact.id());
        self.contacts.push(contact.clone());
        self.persist();
        self.notifier
            .emit(ContactEvent::Added, || serde_json::to_string(&contact).ok());
        contact
    }

    /// Replace every field of the record `id` except `id` and `favorite`.
    /// Returns the updated record, or `None` if `id` is unknown.
    pub fn update(&mut self, id: &str, input: ContactInput) -> Option<Contact> {
        let updated = match self.find_mut(id) {
            Some(contact) => {
                contact.apply(input);
                Some(contact.clone())
            }
            None => None,
        };
        self.log_outcome("update", id, updated.is_some());
        self.persist();
        if let Some(contact) = &updated {
            self.notifier
                .emit(ContactEvent::Updated, || serde_json::to_string(contact).ok());
        }
        updated
    }

    /// Remove the record `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id() != id);
        let removed = self.contacts.len() != before;
        self.log_outcome("delete", id, removed);
        self.persist();
        if removed {
            self.notifier.emit(ContactEvent::Deleted, || {
                Some(serde_json::json!({ "id": id }).to_string())
            });
        }
        removed
    }

    /// Flip `favorite` on the record `id`. Returns the new value, or `None`
    /// if `id` is unknown.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let toggled = self.find_mut(id).map(|contact| {
            contact.toggle_favorite();
            contact.clone()
        });
        self.log_outcome("toggle favorite", id, toggled.is_some());
        self.persist();
        toggled.map(|contact| {
            self.notifier.emit(ContactEvent::FavoriteToggled, || {
                serde_json::to_string(&contact).ok()
            });
            contact.favorite
        })
    }

    /// Records in `group` (empty = any) whose first name, last name, phone or
    /// group contains `search` case-insensitively (empty = any). Insertion order.
    pub fn list(&self, search: &str, group: &str) -> Vec<&Contact> {
        let filter = ContactFilter::new(search, group);
        self.contacts.iter().filter(|c| filter.matches(c)).collect()
    }

    /// [`list`](Self::list), restricted to favorites.
    pub fn list_favorites(&self, search: &str, group: &str) -> Vec<&Contact> {
        self.list(search, group)
            .into_iter()
            .filter(|c| c.favorite)
            .collect()
    }

    /// The records shown on `view` under `filter`.
    pub fn view(&self, view: View, filter: &ContactFilter) -> Vec<&Contact> {
        self.list(&filter.search, &filter.group)
            .into_iter()
            .filter(|c| view.includes(c))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// False when the last write to storage failed.
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Register a listener for `event`. Returns an id for
    /// [`remove_listener`](Self::remove_listener).
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, event: ContactEvent, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.notifier.on(event, listener)
    }

    #[cfg(feature = "emitter")]
    pub fn remove_listener(&mut self, listener_id: &str) -> bool {
        self.notifier.remove_listener(listener_id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.id() == id)
    }

    fn mint_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        match self.storage.save(&self.contacts) {
            Ok(()) => self.synced = true,
            Err(e) => {
                log::warn!(
                    "failed to persist {} contacts, keeping in-memory state: {}",
                    self.contacts.len(),
                    e
                );
                self.synced = false;
            }
        }
    }

    fn log_outcome(&self, operation: &str, id: &str, hit: bool) {
        if hit {
            log::debug!("{} contact {}", operation, id);
        } else {
            log::debug!("{} ignored, no contact {}", operation, id);
        }
    }
}

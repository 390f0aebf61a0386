//! Storage - the durable slot a contact store mirrors itself into.
//!
//! Two layers:
//!
//! - [`KeyValueStore`] is a raw string slot store, the shape of browser
//!   `localStorage`. Backends: [`InMemoryKeyValueStore`], [`FileKeyValueStore`].
//! - [`ContactStorage`] is what [`ContactStore`](crate::ContactStore) depends on:
//!   load the whole record set, save the whole record set. [`JsonSlot`] adapts
//!   any `KeyValueStore` by keeping the set as a JSON array under one key.
//!
//! ## Example
//!
//! ```ignore
//! use contact_book::{ContactStore, InMemoryKeyValueStore, JsonSlot};
//!
//! let slot = JsonSlot::new(InMemoryKeyValueStore::new(), "contacts");
//! let mut store = ContactStore::open(slot);
//! ```

mod file;
mod in_memory;
mod json_slot;

use crate::contact::Contact;
use crate::error::StorageError;

/// Whole-set persistence for contact records.
pub trait ContactStorage {
    /// Read the persisted record set. `None` means "no usable data": the slot
    /// is empty, unreadable, or holds something that is not a contact array.
    fn load(&self) -> Option<Vec<Contact>>;

    /// Overwrite the persisted record set.
    fn save(&self, contacts: &[Contact]) -> Result<(), StorageError>;
}

/// Raw string storage addressed by key.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: ContactStorage + ?Sized> ContactStorage for Box<T> {
    fn load(&self) -> Option<Vec<Contact>> {
        (**self).load()
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), StorageError> {
        (**self).save(contacts)
    }
}

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
pub use json_slot::JsonSlot;

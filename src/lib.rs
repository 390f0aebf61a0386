mod config;
mod contact;
mod error;
mod form;
mod notify;
mod query;
mod storage;
mod store;

pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use contact::{Contact, ContactInput};
pub use error::StorageError;
pub use form::{ContactForm, FormError, FormField, Submission};
pub use notify::ContactEvent;
pub use query::{ContactFilter, View};
pub use storage::{
    ContactStorage, FileKeyValueStore, InMemoryKeyValueStore, JsonSlot, KeyValueStore,
};
pub use store::ContactStore;

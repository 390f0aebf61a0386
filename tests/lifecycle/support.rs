use contact_book::{ContactInput, ContactStore, InMemoryKeyValueStore, JsonSlot};

pub type MemoryStore = ContactStore<JsonSlot<InMemoryKeyValueStore>>;

pub fn memory_store() -> MemoryStore {
    ContactStore::open(JsonSlot::new(InMemoryKeyValueStore::new(), "contacts"))
}

pub fn input(first: &str, last: &str, phone: &str, group: &str) -> ContactInput {
    ContactInput::new(first, last, phone, group)
}

/// Ids of a view, in order.
pub fn ids(contacts: &[&contact_book::Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.id().to_string()).collect()
}

/// A small, mixed address book. Returns the store and the ids in insertion order.
pub fn seeded() -> (MemoryStore, Vec<String>) {
    let mut store = memory_store();
    let ids = [
        input("Ann", "Lee", "+998111", "Female"),
        input("Bob", "Ray", "+998222", "Male"),
        input("Cara", "Annis", "+998333", "Female"),
        input("Dan", "Moe", "+447000", "Male"),
    ]
    .into_iter()
    .map(|i| store.add(i).id().to_string())
    .collect();
    (store, ids)
}

//! Integration tests for mutation notifications.
#![cfg(feature = "emitter")]

use std::sync::{Arc, Mutex};

use contact_book::{
    Contact, ContactEvent, ContactForm, ContactInput, ContactStore, FormField,
    InMemoryKeyValueStore, JsonSlot, StoreConfig,
};

type Log = Arc<Mutex<Vec<(ContactEvent, String)>>>;

fn store_with_log() -> (ContactStore<JsonSlot<InMemoryKeyValueStore>>, Log) {
    let mut store = ContactStore::open(JsonSlot::new(InMemoryKeyValueStore::new(), "contacts"));
    let log: Log = Arc::new(Mutex::new(Vec::new()));

    for event in [
        ContactEvent::Added,
        ContactEvent::Updated,
        ContactEvent::Deleted,
        ContactEvent::FavoriteToggled,
    ] {
        let sink = Arc::clone(&log);
        store.on(event, move |payload| {
            sink.lock().unwrap().push((event, payload));
        });
    }

    (store, log)
}

fn ann() -> ContactInput {
    ContactInput::new("Ann", "Lee", "+998111", "Female")
}

#[test]
fn each_mutation_notifies_once() {
    let (mut store, log) = store_with_log();

    let ann = store.add(ann());
    store.toggle_favorite(ann.id());
    store.update(ann.id(), ContactInput::new("Anna", "Lee", "+998111", "Female"));
    store.delete(ann.id());

    let events: Vec<ContactEvent> = log.lock().unwrap().iter().map(|(e, _)| *e).collect();
    assert_eq!(
        events,
        vec![
            ContactEvent::Added,
            ContactEvent::FavoriteToggled,
            ContactEvent::Updated,
            ContactEvent::Deleted,
        ]
    );
}

#[test]
fn payloads_carry_the_record() {
    let (mut store, log) = store_with_log();

    let ann = store.add(ann());
    store.toggle_favorite(ann.id());
    store.delete(ann.id());

    let log = log.lock().unwrap();
    let added: Contact = serde_json::from_str(&log[0].1).unwrap();
    assert_eq!(added, ann);

    let toggled: Contact = serde_json::from_str(&log[1].1).unwrap();
    assert!(toggled.favorite);

    let deleted: serde_json::Value = serde_json::from_str(&log[2].1).unwrap();
    assert_eq!(deleted["id"], ann.id());
}

#[test]
fn misses_do_not_notify() {
    let (mut store, log) = store_with_log();

    store.update("missing", ann());
    store.delete("missing");
    store.toggle_favorite("missing");

    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn form_submissions_notify_through_the_store() {
    let (mut store, log) = store_with_log();
    let config = StoreConfig::default();

    let mut form = ContactForm::new();
    form.set_field(FormField::FirstName, "Ann");
    form.set_field(FormField::LastName, "Lee");
    form.set_field(FormField::Contact, "+998111");
    form.set_field(FormField::Group, "Female");
    form.submit(&mut store, &config).unwrap();

    let added = store.contacts()[0].clone();
    let mut form = ContactForm::edit(&added);
    form.set_field(FormField::Group, "Male");
    form.submit(&mut store, &config).unwrap();

    let events: Vec<ContactEvent> = log.lock().unwrap().iter().map(|(e, _)| *e).collect();
    assert_eq!(events, vec![ContactEvent::Added, ContactEvent::Updated]);
}

#[test]
fn removed_listener_is_silent() {
    let mut store = ContactStore::open(JsonSlot::new(InMemoryKeyValueStore::new(), "contacts"));
    let count = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&count);
    let id = store.on(ContactEvent::Added, move |_| {
        *counter.lock().unwrap() += 1;
    });

    store.add(ann());
    assert!(store.remove_listener(&id));
    store.add(ann());

    assert_eq!(*count.lock().unwrap(), 1);
}

//! Walks a contact through its lifecycle against a file-backed slot.
//!
//! Run with `RUST_LOG=debug` to see the store's logging.

use contact_book::{
    ContactEvent, ContactFilter, ContactForm, ContactStore, FileKeyValueStore, FormField,
    StoreConfig, View,
};

fn print_view(store: &ContactStore<contact_book::JsonSlot<FileKeyValueStore>>, view: View) {
    println!("-- {:?} --", view);
    for contact in store.view(view, &ContactFilter::default()) {
        println!(
            "{} {} {} [{}]{}",
            contact.first_name,
            contact.last_name,
            contact.contact,
            contact.group,
            if contact.favorite { " *" } else { "" }
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dir = std::env::temp_dir().join("contact_book_demo");
    let config = StoreConfig::default();
    let mut store = ContactStore::from_config(FileKeyValueStore::open(&dir)?, &config);
    println!("Loaded {} contacts from {}", store.len(), dir.display());

    for event in [
        ContactEvent::Added,
        ContactEvent::Updated,
        ContactEvent::Deleted,
        ContactEvent::FavoriteToggled,
    ] {
        store.on(event, move |payload| {
            println!("{}: {}", event.name(), payload);
        });
    }

    let mut form = ContactForm::new();
    form.set_field(FormField::FirstName, "Ann");
    form.set_field(FormField::LastName, "Lee");
    form.set_field(FormField::Contact, "+998111");
    form.set_field(FormField::Group, "Female");
    form.submit(&mut store, &config)?;

    form.set_field(FormField::FirstName, "Bob");
    if let Err(e) = form.submit(&mut store, &config) {
        println!("Rejected: {}", e);
    }
    form.reset();

    let ann = store.list("ann", "")[0].clone();
    store.toggle_favorite(ann.id());

    print_view(&store, View::All);
    print_view(&store, View::Favorites);

    store.delete(ann.id());
    println!("{} contacts left", store.len());

    Ok(())
}

//! Derived-view predicates.

use crate::contact::Contact;

/// Search term plus group filter. Empty strings disable either part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    pub search: String,
    pub group: String,
}

impl ContactFilter {
    pub fn new(search: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            group: group.into(),
        }
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        self.matches_group(contact) && self.matches_search(contact)
    }

    fn matches_group(&self, contact: &Contact) -> bool {
        self.group.is_empty() || contact.group == self.group
    }

    fn matches_search(&self, contact: &Contact) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [
            &contact.first_name,
            &contact.last_name,
            &contact.contact,
            &contact.group,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Which tab of records is being looked at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    All,
    Favorites,
}

impl View {
    pub fn includes(&self, contact: &Contact) -> bool {
        match self {
            View::All => true,
            View::Favorites => contact.favorite,
        }
    }
}

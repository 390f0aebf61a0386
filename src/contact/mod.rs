//! The contact record and the user-editable input it is built from.

use serde::{Deserialize, Serialize};

/// The editable fields of a contact, as gathered by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    /// Phone number text. Free-form.
    pub contact: String,
    /// Opaque categorical tag, also the key used by the group filter.
    pub group: String,
}

impl ContactInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        contact: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            contact: contact.into(),
            group: group.into(),
        }
    }
}

/// A stored contact record.
///
/// Serialized with camelCase field names; a missing `favorite` reads as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    id: String,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub group: String,
    #[serde(default)]
    pub favorite: bool,
}

impl Contact {
    pub(crate) fn from_input(id: String, input: ContactInput) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            contact: input.contact,
            group: input.group,
            favorite: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace every editable field. `id` and `favorite` are left alone.
    pub(crate) fn apply(&mut self, input: ContactInput) {
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.contact = input.contact;
        self.group = input.group;
    }

    pub(crate) fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }

    /// The editable fields of this record, e.g. to prefill an edit form.
    pub fn to_input(&self) -> ContactInput {
        ContactInput {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            contact: self.contact.clone(),
            group: self.group.clone(),
        }
    }
}

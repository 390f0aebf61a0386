//! ContactForm - add/edit form state that feeds a [`ContactStore`].
//!
//! The form is where required-field presence and group membership are
//! enforced; the store accepts whatever it is given.

use std::fmt;

use crate::config::StoreConfig;
use crate::contact::{Contact, ContactInput};
use crate::storage::ContactStorage;
use crate::store::ContactStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Contact,
    Group,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Contact,
        FormField::Group,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Contact => "contact",
            FormField::Group => "group",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingField(FormField),
    UnknownGroup(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(field) => write!(f, "{} is required", field.name()),
            FormError::UnknownGroup(group) => write!(f, "unknown group: {:?}", group),
        }
    }
}

impl std::error::Error for FormError {}

/// What a successful [`ContactForm::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Added(Contact),
    /// `None` when the contact being edited was deleted in the meantime.
    Updated(Option<Contact>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    input: ContactInput,
    editing: Option<String>,
}

impl ContactForm {
    /// An empty form in add mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form in edit mode, prefilled from `contact`.
    pub fn edit(contact: &Contact) -> Self {
        Self {
            input: contact.to_input(),
            editing: Some(contact.id().to_string()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn input(&self) -> &ContactInput {
        &self.input
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.input.first_name,
            FormField::LastName => &self.input.last_name,
            FormField::Contact => &self.input.contact,
            FormField::Group => &self.input.group,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::FirstName => self.input.first_name = value,
            FormField::LastName => self.input.last_name = value,
            FormField::Contact => self.input.contact = value,
            FormField::Group => self.input.group = value,
        }
    }

    /// Check required fields and the group, returning the input to submit.
    pub fn validate(&self, config: &StoreConfig) -> Result<ContactInput, FormError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
        {
            return Err(FormError::MissingField(field));
        }
        if !config.has_group(&self.input.group) {
            return Err(FormError::UnknownGroup(self.input.group.clone()));
        }
        Ok(self.input.clone())
    }

    /// Validate, then add (add mode) or update (edit mode), then reset.
    /// On a validation error the form is left untouched.
    pub fn submit<S: ContactStorage>(
        &mut self,
        store: &mut ContactStore<S>,
        config: &StoreConfig,
    ) -> Result<Submission, FormError> {
        let input = self.validate(config)?;
        let submission = match self.editing.as_deref() {
            Some(id) => Submission::Updated(store.update(id, input)),
            None => Submission::Added(store.add(input)),
        };
        self.reset();
        Ok(submission)
    }

    /// Clear every field and drop back to add mode.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

//! Entry form for userdir.
//!
//! This module implements the form that collects the three required record
//! fields. The form is a pure state machine: it never touches the store, it
//! only constructs a candidate record on submit and hands it to the
//! coordinator, which decides add-vs-replace.

use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};
use crate::record::{mint_id, Record};

/// Basic email shape accepted by the input layer: a single `@` with
/// something on both sides and no whitespace.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+$";

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The name field.
    Name,
    /// The email field.
    Email,
    /// The contact field.
    Contact,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Contact];

    /// Capitalized label for prompts.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Contact => write!(f, "contact"),
        }
    }
}

/// The form's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Creating a new record; submit mints a fresh identifier.
    Creating,
    /// Editing an existing record; submit preserves its identifier.
    ///
    /// Holds a read-only snapshot, not a reference into the store, so an
    /// in-progress edit is not affected by store changes.
    Editing(Record),
}

/// The entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    mode: FormMode,
    name: String,
    email: String,
    contact: String,
}

impl EntryForm {
    /// Create a blank form in the creating state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: FormMode::Creating,
            name: String::new(),
            email: String::new(),
            contact: String::new(),
        }
    }

    /// Create a form in the editing state, pre-filled from the snapshot.
    #[must_use]
    pub fn edit(record: Record) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            contact: record.contact.clone(),
            mode: FormMode::Editing(record),
        }
    }

    /// The form's current state.
    #[must_use]
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Check if the form is editing an existing record.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Current value of the name field.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value of the email field.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current value of the contact field.
    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Current value of the given field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
        }
    }

    /// Set the given field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Contact => self.contact = value,
        }
    }

    /// The first empty field, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    /// Check if all three fields are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// The submit action's label, which varies with the form state.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update user"
        } else {
            "Add user"
        }
    }

    /// Produce the candidate record from the current field values.
    ///
    /// Preserves the snapshot's identifier when editing, mints a fresh one
    /// when creating. The input layer refuses incomplete submissions, so the
    /// emptiness check here guards a precondition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormIncomplete`] if a required field is empty.
    pub fn submit(self) -> Result<Record> {
        if let Some(field) = self.missing_field() {
            return Err(Error::FormIncomplete { field });
        }

        let id = match self.mode {
            FormMode::Editing(snapshot) => snapshot.id,
            FormMode::Creating => mint_id(),
        };
        Ok(Record {
            id,
            name: self.name,
            email: self.email,
            contact: self.contact,
        })
    }

    /// Discard in-progress edits: clear the fields and return to creating.
    pub fn cancel(&mut self) {
        *self = Self::new();
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a value against the input layer's basic email pattern.
///
/// This mirrors what a basic email input control accepts; the core logic
/// never inspects the email format.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(value))
}

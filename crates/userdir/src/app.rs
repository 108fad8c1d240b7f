//! Root coordinator for userdir.
//!
//! The [`Directory`] owns the record store and the "currently editing"
//! selection, wires the entry form and the record list together, and is the
//! sole writer to the durable slot. Surfaces never touch the store directly.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::form::EntryForm;
use crate::record::Record;
use crate::store::RecordStore;

/// The user directory: record store plus the current form selection.
#[derive(Debug)]
pub struct Directory {
    store: RecordStore,
    /// Snapshot of the record loaded into the form for editing, if any.
    selection: Option<Record>,
}

impl Directory {
    /// Open the directory backed by the store file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            store: RecordStore::open(path)?,
            selection: None,
        })
    }

    /// The record sequence, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    /// Check if the directory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get a record by its identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.store.get(id)
    }

    /// The record currently selected for editing, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Record> {
        self.selection.as_ref()
    }

    /// Select a record for editing.
    ///
    /// The selection holds a read-only snapshot; it does not alias the
    /// stored record.
    pub fn select(&mut self, record: Record) {
        debug!("Selecting user {} for editing", record.id);
        self.selection = Some(record);
    }

    /// Select the record with the given identifier for editing.
    ///
    /// Returns `None` and leaves the selection cleared if no record matches.
    pub fn select_by_id(&mut self, id: &str) -> Option<&Record> {
        self.selection = self.store.get(id).cloned();
        self.selection.as_ref()
    }

    /// Clear the "currently editing" selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Build the entry form: editing pre-filled from the selection when one
    /// is present, creating blank otherwise.
    #[must_use]
    pub fn form(&self) -> EntryForm {
        match &self.selection {
            Some(record) => EntryForm::edit(record.clone()),
            None => EntryForm::new(),
        }
    }

    /// Submit the form: append or replace depending on the form's state,
    /// persist, and clear the selection.
    ///
    /// Returns the record that was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is incomplete or the store cannot be
    /// written.
    pub fn submit(&mut self, form: EntryForm) -> Result<Record> {
        let editing = form.is_editing();
        let record = form.submit()?;

        if editing {
            self.store.replace(record.clone())?;
        } else {
            self.store.add(record.clone())?;
        }
        self.selection = None;
        Ok(record)
    }

    /// Cancel the in-progress edit: clear the selection without mutation.
    pub fn cancel(&mut self) {
        debug!("Cancelling edit");
        self.selection = None;
    }

    /// Remove the record with the given identifier and persist.
    ///
    /// Returns `false` if no record matched (silent no-op).
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        self.store.remove(id)
    }
}

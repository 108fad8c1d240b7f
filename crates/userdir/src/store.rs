//! Record store for userdir.
//!
//! This module provides the ordered in-memory record collection and its
//! durable slot: a single JSON file holding the complete record sequence,
//! rewritten wholesale after every mutation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::record::Record;

/// The record store.
///
/// Holds the record sequence in memory and mirrors it to the store file on
/// every mutation, so the file is always a complete, self-consistent
/// snapshot. Insertion order is preserved; the sequence is never sorted or
/// deduplicated beyond identifier uniqueness.
#[derive(Debug)]
pub struct RecordStore {
    /// Path to the store file.
    path: PathBuf,
    /// The record sequence, in insertion order.
    records: Vec<Record>,
}

impl RecordStore {
    /// Open a store backed by the file at the given path.
    ///
    /// Creates the parent directories if they don't exist and hydrates the
    /// sequence from the file. A missing or malformed file hydrates as an
    /// empty sequence; it is never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directories cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let records = Self::hydrate(&path);
        debug!(
            "Opened user store at {} with {} record(s)",
            path.display(),
            records.len()
        );
        Ok(Self { path, records })
    }

    /// Read the record sequence from the store file.
    ///
    /// Missing file, unreadable file, and unparseable payload all hydrate
    /// as an empty sequence.
    fn hydrate(path: &Path) -> Vec<Record> {
        let payload = match fs::read_to_string(path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(
                    "Could not read user store at {}, starting empty: {}",
                    path.display(),
                    err
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "Malformed user store at {}, starting empty: {}",
                    path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Get the path to the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the record sequence, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get a record by its identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record, then persist the full sequence.
    ///
    /// The caller guarantees `record.id` is fresh; the store does not mint
    /// identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be written.
    pub fn add(&mut self, record: Record) -> Result<()> {
        info!("Adding user {}", record.id);
        self.records.push(record);
        self.persist()
    }

    /// Substitute the first record whose id matches, preserving its
    /// position, then persist the full sequence.
    ///
    /// Returns `false` if no record matched; the sequence is left unchanged
    /// and the rewrite is a no-op byte-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be written.
    pub fn replace(&mut self, record: Record) -> Result<bool> {
        let replaced = match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                info!("Replacing user {}", record.id);
                *slot = record;
                true
            }
            None => {
                debug!("Replace matched no record for id {}", record.id);
                false
            }
        };
        self.persist()?;
        Ok(replaced)
    }

    /// Remove all records whose id matches (zero or one in normal use),
    /// then persist the full sequence.
    ///
    /// Returns `false` if no record matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be written.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() < before;
        if removed {
            info!("Removed user {id}");
        } else {
            debug!("Remove matched no record for id {id}");
        }
        self.persist()?;
        Ok(removed)
    }

    /// Write the complete sequence to the store file.
    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, payload).map_err(|source| Error::StorePersist {
            path: self.path.clone(),
            source,
        })
    }
}

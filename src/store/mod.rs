//! In-memory record store
//!
//! This module provides the student record collection:
//! - [`record`]: the [`StudentRecord`] value type and its display forms
//! - [`arena`]: the index-linked list backing the store
//!
//! # Uniqueness
//!
//! No two stored records share an id. [`RecordStore::add`] checks for an
//! existing id before appending; there is no other way to insert.
//!
//! # Complexity
//!
//! Every lookup is a linear walk from the head of the list. Appends are O(1)
//! once the duplicate check has passed.

pub mod arena;
pub mod record;

pub use record::{StudentId, StudentRecord};

use crate::errors::StoreError;
use arena::{Iter, LinkedArena};
use tracing::debug;

/// Ordered collection of student records, insertion order preserved
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: LinkedArena<StudentRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore {
            records: LinkedArena::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check whether a record with `id` is on file
    pub fn exists(&self, id: StudentId) -> bool {
        self.find(id).is_some()
    }

    /// Append a record at the tail, rejecting duplicate ids
    pub fn add(&mut self, record: StudentRecord) -> Result<(), StoreError> {
        if self.exists(record.id) {
            debug!(id = record.id, "rejected duplicate id");
            return Err(StoreError::DuplicateId(record.id));
        }

        let id = record.id;
        self.records.push_back(record);
        debug!(id, size = self.len(), "record added");
        Ok(())
    }

    /// Find the record with `id`
    pub fn find(&self, id: StudentId) -> Option<&StudentRecord> {
        self.records.find(|r| r.id == id)
    }

    /// Remove the record with `id`, returning it
    pub fn remove(&mut self, id: StudentId) -> Result<StudentRecord, StoreError> {
        if self.records.is_empty() {
            return Err(StoreError::Empty);
        }

        match self.records.remove_first(|r| r.id == id) {
            Some(record) => {
                debug!(id, size = self.len(), "record deleted");
                Ok(record)
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Remove the record with `id`; true if one was removed
    pub fn delete(&mut self, id: StudentId) -> bool {
        self.remove(id).is_ok()
    }

    /// All records in insertion order
    pub fn list_all(&self) -> Vec<&StudentRecord> {
        self.records.iter().collect()
    }

    pub fn iter(&self) -> Iter<'_, StudentRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a StudentRecord;
    type IntoIter = Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-document writes that keep every derived index consistent.
//!
//! Update is remove-then-reinsert: the old field values leave every bucket
//! before the new ones go in, so no bucket ever holds an id under both its old
//! and new value. The full-text entry is rewritten in place, keeping the
//! document's rank position for tie-breaks.

use tracing::debug;

use crate::error::{EngineError, Result};
use crate::index::builder::DerivedKeys;
use crate::index::ExerciseIndex;
use crate::types::Document;
use crate::verify::contracts;

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Inserted,
    Replaced,
}

impl ExerciseIndex {
    /// Insert `document`, or replace the stored record with the same id.
    ///
    /// Fails with [`EngineError::MissingId`] (and changes nothing) when the id
    /// is empty. Calling it twice with the same record leaves the same state
    /// as calling it once.
    pub fn upsert_document(&mut self, document: Document) -> Result<Upserted> {
        if !document.has_id() {
            return Err(EngineError::MissingId);
        }

        let outcome = if self.store.contains(&document.id) {
            Upserted::Replaced
        } else {
            Upserted::Inserted
        };
        debug!(id = %document.id, ?outcome, "upserting exercise");

        self.index_document(document);
        contracts::check_well_formed(self);
        Ok(outcome)
    }

    /// Remove the document with `id` from every index and then the store.
    ///
    /// Unknown ids are a no-op and return `None`.
    pub fn remove_document(&mut self, id: &str) -> Option<Document> {
        let keys = self.store.get(id).map(DerivedKeys::of)?;

        self.unlink(id, &keys);
        self.full_text.retain(|entry| entry.id != id);
        let removed = self.store.remove(id);
        debug!(id, "removed exercise");

        contracts::check_well_formed(self);
        removed
    }
}

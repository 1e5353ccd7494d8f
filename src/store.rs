// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document store: the only authoritative copy of every record.
//!
//! Secondary indices are derived from what lives here and may only reference
//! ids present here. The store remembers first-insertion order, which is the
//! id universe `match_all` tag queries start from.

use std::collections::HashMap;

use crate::types::Document;

#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    docs: HashMap<String, Document>,
    order: Vec<String>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    /// Insert or replace. A replaced record keeps its original position.
    ///
    /// Returns the previous record for this id, if any.
    pub fn insert(&mut self, doc: Document) -> Option<Document> {
        let id = doc.id.clone();
        let previous = self.docs.insert(id.clone(), doc);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    pub fn remove(&mut self, id: &str) -> Option<Document> {
        let removed = self.docs.remove(id)?;
        self.order.retain(|k| k != id);
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.docs.clear();
        self.order.clear();
    }

    /// Ids in first-insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Documents in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.order.iter().filter_map(|id| self.docs.get(id))
    }
}

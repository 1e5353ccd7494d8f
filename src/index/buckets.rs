// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Value -> ids lookup tables (category, difficulty, tag, title).
//!
//! Each bucket is an insertion-ordered set: re-adding an id is a no-op, and
//! removing the last id drops the bucket so only live values are reported.
//! Buckets stay small in practice (a few hundred ids at most), so membership
//! is a linear scan over a `Vec` rather than a second hash set.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Buckets {
    map: HashMap<String, Vec<String>>,
}

impl Buckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` under `key`. Returns false if it was already there.
    pub fn insert(&mut self, key: &str, id: &str) -> bool {
        let ids = self.map.entry(key.to_string()).or_default();
        if ids.iter().any(|existing| existing == id) {
            return false;
        }
        ids.push(id.to_string());
        true
    }

    /// Remove `id` from `key`, dropping the bucket once empty.
    /// Returns false if it was not there.
    pub fn remove(&mut self, key: &str, id: &str) -> bool {
        let Some(ids) = self.map.get_mut(key) else {
            return false;
        };
        let before = ids.len();
        ids.retain(|existing| existing != id);
        let removed = ids.len() != before;
        if ids.is_empty() {
            self.map.remove(key);
        }
        removed
    }

    /// Ids under `key` in insertion order; empty for unknown keys.
    pub fn get(&self, key: &str) -> &[String] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, key: &str, id: &str) -> bool {
        self.get(key).iter().any(|existing| existing == id)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.map.iter().map(|(k, ids)| (k.as_str(), ids.as_slice()))
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bulk loading and the per-document derivation every write path shares.
//!
//! A document contributes at most one key to each single-valued index, one key
//! per distinct tag, and exactly one full-text entry. Empty strings count as
//! absent, the same way the site scripts treat them.

use chrono::Utc;
use tracing::{debug, warn};

use super::ExerciseIndex;
use crate::types::{Document, FullTextEntry, IndexStats};
use crate::utils::search_text;
use crate::verify::contracts;

/// Every index key one document produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DerivedKeys {
    pub title: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub tags: Vec<String>,
    pub text: String,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

impl DerivedKeys {
    pub fn of(doc: &Document) -> Self {
        let mut tags: Vec<String> = Vec::with_capacity(doc.tags.len());
        for tag in doc.tags.iter().filter(|t| !t.is_empty()) {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        Self {
            title: non_empty(doc.title.as_deref()).map(|t| t.to_lowercase()),
            category: non_empty(doc.category.as_deref()),
            difficulty: non_empty(doc.difficulty.as_deref()),
            tags,
            text: search_text(doc),
        }
    }
}

impl ExerciseIndex {
    /// Index a batch of documents.
    ///
    /// Records without an id are skipped and counted. Ids already present are
    /// replaced with update semantics (old index entries dropped first, the
    /// full-text slot kept), so loading the same batch twice changes nothing.
    /// Documents with other ids are left alone: loading is additive.
    pub fn build_index<I>(&mut self, documents: I) -> IndexStats
    where
        I: IntoIterator<Item = Document>,
    {
        let started = Utc::now();
        let mut stats = IndexStats::default();

        for doc in documents {
            if !doc.has_id() {
                stats.skipped_count += 1;
                continue;
            }
            self.index_document(doc);
            stats.indexed_count += 1;
        }

        stats.total_documents = self.store.len();
        stats.duration_ms = (Utc::now() - started).num_milliseconds().max(0) as u64;

        if stats.skipped_count > 0 {
            warn!(skipped = stats.skipped_count, "skipped documents without an id");
        }
        debug!(
            indexed = stats.indexed_count,
            total = stats.total_documents,
            duration_ms = stats.duration_ms,
            "built exercise index"
        );
        contracts::check_well_formed(self);
        stats
    }

    /// Drop every document and every derived entry.
    pub fn clear(&mut self) {
        self.store.clear();
        self.by_title.clear();
        self.by_category.clear();
        self.by_difficulty.clear();
        self.by_tags.clear();
        self.full_text.clear();
        debug!("cleared exercise index");
    }

    /// Store `doc` and (re)derive its entries. The id must be non-empty.
    pub(crate) fn index_document(&mut self, doc: Document) {
        let keys = DerivedKeys::of(&doc);
        let id = doc.id.clone();

        let stale = self.store.get(&id).map(DerivedKeys::of);
        if let Some(stale) = stale {
            self.unlink(&id, &stale);
        }
        let fresh = self.store.insert(doc).is_none();
        self.link(&id, keys, fresh);
    }

    /// Add `id` under each of `keys`. Every insert is idempotent.
    ///
    /// A `fresh` id has no full-text entry yet, so it is appended without
    /// scanning for an existing slot.
    pub(crate) fn link(&mut self, id: &str, keys: DerivedKeys, fresh: bool) {
        if let Some(title) = &keys.title {
            self.by_title.insert(title, id);
        }
        if let Some(category) = &keys.category {
            self.by_category.insert(category, id);
        }
        if let Some(difficulty) = &keys.difficulty {
            self.by_difficulty.insert(difficulty, id);
        }
        for tag in &keys.tags {
            self.by_tags.insert(tag, id);
        }

        let slot = if fresh {
            None
        } else {
            self.full_text.iter_mut().find(|entry| entry.id == id)
        };
        match slot {
            Some(entry) => entry.text = keys.text,
            None => self.full_text.push(FullTextEntry {
                id: id.to_string(),
                text: keys.text,
            }),
        }
    }

    /// Remove `id` from the buckets named by `keys`. Full text is untouched.
    pub(crate) fn unlink(&mut self, id: &str, keys: &DerivedKeys) {
        if let Some(title) = &keys.title {
            self.by_title.remove(title, id);
        }
        if let Some(category) = &keys.category {
            self.by_category.remove(category, id);
        }
        if let Some(difficulty) = &keys.difficulty {
            self.by_difficulty.remove(difficulty, id);
        }
        for tag in &keys.tags {
            self.by_tags.remove(tag, id);
        }
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine instance: a document store plus everything derived from it.
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────────────────────────┐
//! │  DocumentStore   │─────▶│ by_category  by_difficulty  by_tags  │
//! │  id -> Document  │      │ by_title     full_text              │
//! └──────────────────┘      └──────────────────────────────────────┘
//!          ▲                                   │
//!   build / upsert / remove              search / stats
//! ```
//!
//! One `ExerciseIndex` per session. There is no global state, so tests and
//! multi-catalog callers simply build several.
//!
//! # Invariants
//!
//! - Every id in any bucket or full-text entry is in the store.
//! - A stored document sits in `by_category[category]`, `by_difficulty[difficulty]`,
//!   `by_tags[t]` for each tag and `by_title[lowercase(title)]`, and nowhere else.
//! - `full_text` holds exactly one entry per stored id, equal to `search_text(doc)`.
//!
//! `crate::verify` checks all three.

mod buckets;
pub(crate) mod builder;

pub use buckets::Buckets;

use crate::config::EngineConfig;
use crate::store::DocumentStore;
use crate::types::{Document, FullTextEntry};

#[derive(Debug, Clone, Default)]
pub struct ExerciseIndex {
    pub(crate) config: EngineConfig,
    pub(crate) store: DocumentStore,
    pub(crate) by_title: Buckets,
    pub(crate) by_category: Buckets,
    pub(crate) by_difficulty: Buckets,
    pub(crate) by_tags: Buckets,
    pub(crate) full_text: Vec<FullTextEntry>,
}

impl ExerciseIndex {
    /// An empty index with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    /// Point lookup by primary key.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.store.get(id)
    }

    /// Documents in first-insertion order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.store.iter()
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn by_title(&self) -> &Buckets {
        &self.by_title
    }

    pub fn by_category(&self) -> &Buckets {
        &self.by_category
    }

    pub fn by_difficulty(&self) -> &Buckets {
        &self.by_difficulty
    }

    pub fn by_tags(&self) -> &Buckets {
        &self.by_tags
    }

    pub fn full_text(&self) -> &[FullTextEntry] {
        &self.full_text
    }
}

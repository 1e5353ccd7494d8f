// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact lookups over the category, difficulty and tag buckets.

use std::collections::HashSet;

use crate::index::ExerciseIndex;
use crate::types::Document;

/// Lookup results in index order, plus how many ids matched before `limit`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page<'a> {
    pub documents: Vec<&'a Document>,
    pub total: usize,
}

impl<'a> Page<'a> {
    pub fn ids(&self) -> Vec<&'a str> {
        self.documents.iter().map(|doc| doc.id.as_str()).collect()
    }
}

impl ExerciseIndex {
    pub fn search_by_category(&self, category: &str, limit: usize) -> Page<'_> {
        self.page(self.by_category.get(category).iter().map(String::as_str), limit)
    }

    pub fn search_by_difficulty(&self, difficulty: &str, limit: usize) -> Page<'_> {
        self.page(self.by_difficulty.get(difficulty).iter().map(String::as_str), limit)
    }

    /// Documents carrying the given tags.
    ///
    /// With `match_all` the result is the intersection, in store order: start
    /// from every known id and keep those present under each tag in turn.
    /// Otherwise it is the union, in first-seen order walking the tag list.
    pub fn search_by_tags<S: AsRef<str>>(&self, tags: &[S], match_all: bool, limit: usize) -> Page<'_> {
        if tags.is_empty() {
            return Page::default();
        }

        let ids: Vec<&str> = if match_all {
            tags.iter().fold(self.store.ids().collect(), |survivors, tag| {
                let bucket: HashSet<&str> = self
                    .by_tags
                    .get(tag.as_ref())
                    .iter()
                    .map(String::as_str)
                    .collect();
                survivors
                    .into_iter()
                    .filter(|id| bucket.contains(id))
                    .collect()
            })
        } else {
            let mut seen = HashSet::new();
            tags.iter()
                .flat_map(|tag| self.by_tags.get(tag.as_ref()))
                .map(String::as_str)
                .filter(|id| seen.insert(*id))
                .collect()
        };

        self.page(ids, limit)
    }

    fn page<'a>(&'a self, ids: impl IntoIterator<Item = &'a str>, limit: usize) -> Page<'a> {
        let ids: Vec<&str> = ids.into_iter().collect();
        let documents = ids
            .iter()
            .filter_map(|id| self.store.get(id))
            .take(limit)
            .collect();
        Page {
            documents,
            total: ids.len(),
        }
    }
}

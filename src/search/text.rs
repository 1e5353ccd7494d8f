// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring search with additive relevance.
//!
//! The whole query, trimmed and lowercased, is one needle: no tokenizing, no
//! stemming. A document is a candidate when its full-text blob contains the
//! needle (or, with `searchFileNames`, when its file name does). Candidates
//! are scored with the configured weights, ranked by
//! [`compare_hits`](crate::scoring::ranking::compare_hits), then truncated.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::ExerciseIndex;
use crate::scoring::ranking::compare_hits;
use crate::scoring::{file_name_matches, relevance};
use crate::types::{Document, FullTextEntry};
use crate::utils::{normalize_query, snippet_around};

/// Catalogs at least this large are scanned on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_SCAN_THRESHOLD: usize = 4096;

/// Per-call knobs for [`ExerciseIndex::search_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Defaults to `maxResults` from the config.
    pub limit: Option<usize>,
    /// Keep only documents whose `type` equals this.
    pub kind: Option<String>,
}

/// One ranked result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub document: &'a Document,
    pub score: u32,
    /// Slot of the document's full-text entry (insertion order).
    pub position: usize,
    /// Context around the first content hit, else the record's own excerpt.
    pub snippet: Option<String>,
}

/// Ranked hits plus the candidate count before truncation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome<'a> {
    pub hits: Vec<SearchHit<'a>>,
    pub total: usize,
}

impl<'a> SearchOutcome<'a> {
    pub fn documents(&self) -> Vec<&'a Document> {
        self.hits.iter().map(|hit| hit.document).collect()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.hits.iter().map(|hit| hit.document.id.as_str()).collect()
    }
}

impl ExerciseIndex {
    /// Ranked documents for `query`, at most `limit` of them.
    ///
    /// Empty, whitespace-only or too-short queries return nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Document> {
        self.search_hits(query, limit).documents()
    }

    /// Like [`search`](Self::search) but keeps scores, snippets and the total.
    pub fn search_hits(&self, query: &str, limit: usize) -> SearchOutcome<'_> {
        self.search_with(
            query,
            &SearchOptions {
                limit: Some(limit),
                kind: None,
            },
        )
    }

    pub fn search_with(&self, query: &str, options: &SearchOptions) -> SearchOutcome<'_> {
        let Some(needle) = normalize_query(query, self.config.min_query_chars()) else {
            return SearchOutcome::default();
        };
        let limit = options.limit.unwrap_or(self.config.max_results);

        let mut hits = self.scan(&needle, options.kind.as_deref());
        let total = hits.len();

        hits.sort_unstable_by(compare_hits);
        hits.truncate(limit);
        for hit in &mut hits {
            hit.snippet = snippet_for(hit.document, &needle);
        }

        debug!(query = %needle, candidates = total, returned = hits.len(), "text search");
        SearchOutcome { hits, total }
    }

    #[cfg(feature = "parallel")]
    fn scan(&self, needle: &str, kind: Option<&str>) -> Vec<SearchHit<'_>> {
        if self.full_text.len() >= PARALLEL_SCAN_THRESHOLD {
            self.full_text
                .par_iter()
                .enumerate()
                .filter_map(|(position, entry)| self.candidate(position, entry, needle, kind))
                .collect()
        } else {
            self.scan_sequential(needle, kind)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn scan(&self, needle: &str, kind: Option<&str>) -> Vec<SearchHit<'_>> {
        self.scan_sequential(needle, kind)
    }

    fn scan_sequential(&self, needle: &str, kind: Option<&str>) -> Vec<SearchHit<'_>> {
        self.full_text
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| self.candidate(position, entry, needle, kind))
            .collect()
    }

    fn candidate<'a>(
        &'a self,
        position: usize,
        entry: &FullTextEntry,
        needle: &str,
        kind: Option<&str>,
    ) -> Option<SearchHit<'a>> {
        let document = self.store.get(&entry.id)?;

        let matched = entry.text.contains(needle)
            || (self.config.search_file_names && file_name_matches(document, needle));
        if !matched {
            return None;
        }
        if kind.is_some_and(|kind| document.kind.as_deref() != Some(kind)) {
            return None;
        }

        Some(SearchHit {
            document,
            score: relevance(document, needle, &self.config.weights),
            position,
            snippet: None,
        })
    }
}

fn snippet_for(document: &Document, needle: &str) -> Option<String> {
    document
        .content
        .as_deref()
        .and_then(|content| snippet_around(content, needle))
        .or_else(|| document.extract_snippet.clone())
}

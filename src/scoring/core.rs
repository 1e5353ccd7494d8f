// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The weights table and the relevance function.
//!
//! | Field hit                         | Default weight |
//! |-----------------------------------|----------------|
//! | title contains query              | 100            |
//! | title starts with query (extra)   | 50             |
//! | category contains query           | 20             |
//! | each tag containing query         | 15             |
//! | description contains query        | 10             |
//! | name or filename contains query   | 3              |
//!
//! All comparisons are on lowercased field text against an already
//! lowercased query. `content` never scores on its own; it only makes a
//! document a candidate through the full-text blob.

use serde::{Deserialize, Serialize};

use crate::types::Document;

pub const TITLE_CONTAINS_WEIGHT: u32 = 100;
pub const TITLE_PREFIX_WEIGHT: u32 = 50;
pub const CATEGORY_WEIGHT: u32 = 20;
pub const TAG_WEIGHT: u32 = 15;
pub const DESCRIPTION_WEIGHT: u32 = 10;
pub const FILE_NAME_WEIGHT: u32 = 3;

/// Hand-tuned weights, overridable through [`crate::EngineConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    pub title_contains: u32,
    /// Added on top of `title_contains` when the title starts with the query.
    pub title_prefix: u32,
    pub category: u32,
    /// Per matching tag, summed.
    pub tag: u32,
    pub description: u32,
    pub file_name: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_contains: TITLE_CONTAINS_WEIGHT,
            title_prefix: TITLE_PREFIX_WEIGHT,
            category: CATEGORY_WEIGHT,
            tag: TAG_WEIGHT,
            description: DESCRIPTION_WEIGHT,
            file_name: FILE_NAME_WEIGHT,
        }
    }
}

fn field_contains(field: Option<&str>, query: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(query))
}

/// Additive relevance of `doc` for the lowercased `query`.
pub fn relevance(doc: &Document, query: &str, weights: &ScoringWeights) -> u32 {
    let mut score = 0u32;

    if let Some(title) = doc.title.as_deref() {
        let title = title.to_lowercase();
        if title.contains(query) {
            score += weights.title_contains;
            if title.starts_with(query) {
                score += weights.title_prefix;
            }
        }
    }

    if field_contains(doc.category.as_deref(), query) {
        score += weights.category;
    }

    let tag_hits = doc
        .tags
        .iter()
        .filter(|tag| tag.to_lowercase().contains(query))
        .count() as u32;
    score += tag_hits * weights.tag;

    if field_contains(doc.description.as_deref(), query) {
        score += weights.description;
    }

    if file_name_matches(doc, query) {
        score += weights.file_name;
    }

    score
}

/// Whether `name` or `filename` contains the lowercased query.
pub fn file_name_matches(doc: &Document, query: &str) -> bool {
    doc.file_names()
        .any(|name| name.to_lowercase().contains(query))
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only counts over the secondary indices.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::index::{Buckets, ExerciseIndex};

/// Catalog statistics. Breakdowns are bucket sizes, keyed in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(rename = "totalExercises")]
    pub total_documents: usize,
    /// Distinct category values.
    pub categories: usize,
    pub difficulties: usize,
    pub tags: usize,
    pub categories_breakdown: BTreeMap<String, usize>,
    pub difficulties_breakdown: BTreeMap<String, usize>,
    pub tags_breakdown: BTreeMap<String, usize>,
}

fn breakdown(buckets: &Buckets) -> BTreeMap<String, usize> {
    buckets
        .iter()
        .map(|(key, ids)| (key.to_string(), ids.len()))
        .collect()
}

impl ExerciseIndex {
    pub fn statistics(&self) -> Statistics {
        Statistics {
            total_documents: self.store.len(),
            categories: self.by_category.len(),
            difficulties: self.by_difficulty.len(),
            tags: self.by_tags.len(),
            categories_breakdown: breakdown(&self.by_category),
            difficulties_breakdown: breakdown(&self.by_difficulty),
            tags_breakdown: breakdown(&self.by_tags),
        }
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search hits get sorted.
//!
//! Higher score first. Equal scores keep full-text order, which is the order
//! documents were first indexed (an update keeps its slot). The tie-break is
//! spelled out in the comparator so results stay deterministic even if the
//! sort is swapped for an unstable one.

use crate::search::SearchHit;
use std::cmp::Ordering;

/// Compare two hits for ranking.
///
/// 1. **Score** - descending
/// 2. **Position** - full-text insertion order, ascending
pub fn compare_hits(a: &SearchHit<'_>, b: &SearchHit<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

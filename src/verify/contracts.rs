// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-build contracts run after every write.
//!
//! Zero cost in release builds. In debug builds a violated invariant panics
//! at the write that broke it, not at some later search that happens to
//! notice.

use crate::index::ExerciseIndex;

/// Panic (debug builds only) if any index invariant is violated.
#[inline]
pub fn check_well_formed(index: &ExerciseIndex) {
    if cfg!(debug_assertions) {
        let report = index.verify();
        debug_assert!(
            report.is_ok(),
            "index invariants violated: {:?}",
            report.errors
        );
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores are plain additive weights over which fields contain the query.
//! Candidacy is decided elsewhere (full-text containment); a score of zero is
//! still a result, it just sorts last.

mod core;
pub mod ranking;

pub use self::core::*;

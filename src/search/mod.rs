// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation. Nothing in here mutates the index.
//!
//! Two kinds of query:
//! - **Text search** (`text`): substring scan over the full-text blobs,
//!   weighted scoring, ranked output.
//! - **Lookups** (`filters`): exact category / difficulty / tag buckets,
//!   returned in index order with no scoring.

mod filters;
mod text;

pub use filters::Page;
pub use text::{SearchHit, SearchOptions, SearchOutcome};
